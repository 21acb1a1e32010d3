//! Networking modules for the follow-up REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single chokepoint for backend calls, `transport` holds the
//! browser seams it sends through (HTTP and navigation), and `types` defines
//! the wire schema.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
