//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic used by pages and components lives here so it can be tested
//! natively, away from the DOM.

pub mod dialog;
pub mod format;
pub mod forms;
pub mod guards;
