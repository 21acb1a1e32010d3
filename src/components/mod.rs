//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render local state and emit callbacks; backend calls go through
//! the `ApiClient` taken from context.

pub mod call_history;
pub mod patient_modal;
pub mod questions_editor;
pub mod session_guard;
