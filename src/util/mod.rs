//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep route rules and list parsing free of Leptos so they
//! can be unit tested without a browser.

pub mod auth;
pub mod questions;
pub mod timer;
