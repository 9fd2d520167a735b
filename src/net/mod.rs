//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the request chokepoint, the `api_*` modules add typed operations
//! per resource, `transport` abstracts `fetch`, `error` is the single failure
//! type, and `types` defines the wire schema.

pub mod api;
pub mod api_admin;
pub mod api_apartments;
pub mod api_auth;
pub mod api_requests;
pub mod error;
pub mod transport;
pub mod types;
