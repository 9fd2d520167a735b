//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Pages that need a signed-in user or an admin wrap
//! their body in a guard from `components::route_guard`.

pub mod add_apartment;
pub mod admin;
pub mod apartment_details;
pub mod apartments;
pub mod contact;
pub mod edit_apartment;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
