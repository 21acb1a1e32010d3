//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the stored credential and user record; `patients` holds the
//! list/selection model behind the patients page.

pub mod patients;
pub mod session;
