//! `requests` (owner-directed contact requests) and `contact` (help-center
//! messages) resource groups.

#[cfg(test)]
#[path = "api_requests_test.rs"]
mod api_requests_test;

use serde::Serialize;

use super::api::{ApiClient, segment};
use super::error::ApiError;
use super::transport::Transport;
use super::types::{ContactMessagePayload, ContactRequest, Created, CreatedRequest, Items};
use crate::state::storage::KeyValueStore;

pub(crate) const INCOMING_PATH: &str = "/api/requests/incoming";
pub(crate) const CONTACT_PATH: &str = "/api/contact";

#[derive(Serialize)]
struct RequestBody<'a> {
    phone: &'a str,
    message: &'a str,
}

/// Contact requests between visitors and listing owners.
pub struct RequestsApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

/// Anonymous help-center submissions.
pub struct ContactApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

impl<T: Transport, B: KeyValueStore> ApiClient<T, B> {
    pub fn requests(&self) -> RequestsApi<'_, T, B> {
        RequestsApi { client: self }
    }

    pub fn contact(&self) -> ContactApi<'_, T, B> {
        ContactApi { client: self }
    }
}

impl<T: Transport, B: KeyValueStore> RequestsApi<'_, T, B> {
    /// `POST /api/apartments/{id}/requests`, unwrapping `{success, request}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn create(&self, apartment_id: &str, phone: &str, message: &str) -> Result<ContactRequest, ApiError> {
        let path = format!("/api/apartments/{}/requests", segment(apartment_id));
        let envelope: CreatedRequest = self.client.post(&path, &RequestBody { phone, message }).await?;
        Ok(envelope.request)
    }

    /// `GET /api/requests/incoming`: requests addressed to the caller's listings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn incoming(&self) -> Result<Vec<ContactRequest>, ApiError> {
        let envelope: Items<ContactRequest> = self.client.get(INCOMING_PATH).await?;
        Ok(envelope.items)
    }

    /// `DELETE /api/requests/{id}` (recipient only).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/requests/{}", segment(id))).await
    }
}

impl<T: Transport, B: KeyValueStore> ContactApi<'_, T, B> {
    /// `POST /api/contact`; returns the new message id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn submit(&self, payload: &ContactMessagePayload) -> Result<Created, ApiError> {
        self.client.post(CONTACT_PATH, payload).await
    }
}
