//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` owns the persisted session record, `session` the live identity,
//! and `profile`/`admin` the collections behind their pages. Pages depend only
//! on the model they render.

pub mod admin;
pub mod profile;
pub mod session;
pub mod storage;
