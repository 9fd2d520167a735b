//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentation units composed by pages. Form controls are
//! plain prop-configured components; only `layout` and `route_guard` read the
//! session from context.

pub mod apartment_card;
pub mod apartment_form;
pub mod fields;
pub mod layout;
pub mod route_guard;
