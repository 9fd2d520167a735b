//! Profile page collections: the user's own listings and incoming requests.
//!
//! DESIGN
//! ======
//! Deletes splice the local lists instead of re-fetching. Incoming requests
//! are replaced wholesale by each poll, so a splice that the server did not
//! honor is corrected on the next tick.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Apartment, ContactRequest};

/// Profile page data with per-collection loading flags.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub listings: Vec<Apartment>,
    pub incoming: Vec<ContactRequest>,
    pub listings_loading: bool,
    pub incoming_loading: bool,
    pub error: Option<String>,
}

impl ProfileState {
    pub fn loading() -> Self {
        Self { listings_loading: true, incoming_loading: true, ..Self::default() }
    }

    pub fn set_listings(&mut self, items: Vec<Apartment>) {
        self.listings = items;
        self.listings_loading = false;
        self.error = None;
    }

    /// Install a poll result.
    pub fn set_incoming(&mut self, items: Vec<ContactRequest>) {
        self.incoming = items;
        self.incoming_loading = false;
        self.error = None;
    }

    /// Drop a deleted listing. Returns whether it was present.
    pub fn remove_listing(&mut self, id: &str) -> bool {
        let before = self.listings.len();
        self.listings.retain(|apt| apt.id != id);
        self.listings.len() != before
    }

    /// Drop a declined request. Returns whether it was present.
    pub fn remove_request(&mut self, id: &str) -> bool {
        let before = self.incoming.len();
        self.incoming.retain(|req| req.id != id);
        self.incoming.len() != before
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.listings_loading = false;
        self.incoming_loading = false;
    }
}
