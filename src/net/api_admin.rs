//! `admin` resource group: moderation of listings, users, messages, reports.
//!
//! Every call needs an admin token. The server enforces that; the client only
//! keeps non-admins away from the console route.

#[cfg(test)]
#[path = "api_admin_test.rs"]
mod api_admin_test;

use super::api::{ApiClient, QueryString, segment};
use super::error::ApiError;
use super::transport::Transport;
use super::types::{AdminStats, Apartment, ContactMessage, Items, ModerationStatus, ReportItem, ReportStatus, Role, User};
use crate::state::storage::KeyValueStore;

pub(crate) const ADMIN_STATS_PATH: &str = "/api/admin/stats";
pub(crate) const ADMIN_APARTMENTS_PATH: &str = "/api/admin/apartments";
pub(crate) const ADMIN_USERS_PATH: &str = "/api/admin/users";
pub(crate) const ADMIN_MESSAGES_PATH: &str = "/api/admin/messages";
pub(crate) const ADMIN_REPORTS_PATH: &str = "/api/admin/reports";

/// Moderation transitions available on a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingAction {
    Approve,
    Reject,
    Hide,
    Unhide,
}

impl ListingAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Hide => "hide",
            Self::Unhide => "unhide",
        }
    }
}

/// Filters for the admin listing view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminListingFilter {
    pub status: Option<ModerationStatus>,
    pub hidden: Option<bool>,
}

impl AdminListingFilter {
    pub fn pending() -> Self {
        Self { status: Some(ModerationStatus::Pending), hidden: None }
    }

    fn to_query(self) -> QueryString {
        QueryString::new()
            .text("status", self.status.map(ModerationStatus::as_str))
            .value("hidden", self.hidden)
    }
}

/// Moderation console endpoints.
pub struct AdminApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

impl<T: Transport, B: KeyValueStore> ApiClient<T, B> {
    pub fn admin(&self) -> AdminApi<'_, T, B> {
        AdminApi { client: self }
    }
}

fn listing_path(id: &str) -> String {
    format!("{ADMIN_APARTMENTS_PATH}/{}", segment(id))
}

fn user_path(id: &str, action: &str) -> String {
    format!("{ADMIN_USERS_PATH}/{}/{action}", segment(id))
}

impl<T: Transport, B: KeyValueStore> AdminApi<'_, T, B> {
    /// `GET /api/admin/stats`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn stats(&self) -> Result<AdminStats, ApiError> {
        self.client.get(ADMIN_STATS_PATH).await
    }

    /// `GET /api/admin/apartments?status=&hidden=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn list_apartments(&self, filter: AdminListingFilter) -> Result<Vec<Apartment>, ApiError> {
        let path = filter.to_query().apply(ADMIN_APARTMENTS_PATH);
        let envelope: Items<Apartment> = self.client.get(&path).await?;
        Ok(envelope.items)
    }

    /// `PATCH /api/admin/apartments/{id}/{approve|reject|hide|unhide}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn moderate_apartment(&self, id: &str, action: ListingAction) -> Result<Apartment, ApiError> {
        let path = format!("{}/{}", listing_path(id), action.as_str());
        self.client.patch(&path, None).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn approve_apartment(&self, id: &str) -> Result<Apartment, ApiError> {
        self.moderate_apartment(id, ListingAction::Approve).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn reject_apartment(&self, id: &str) -> Result<Apartment, ApiError> {
        self.moderate_apartment(id, ListingAction::Reject).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn hide_apartment(&self, id: &str) -> Result<Apartment, ApiError> {
        self.moderate_apartment(id, ListingAction::Hide).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn unhide_apartment(&self, id: &str) -> Result<Apartment, ApiError> {
        self.moderate_apartment(id, ListingAction::Unhide).await
    }

    /// `DELETE /api/admin/apartments/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn delete_apartment(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&listing_path(id)).await
    }

    /// `GET /api/admin/users`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let envelope: Items<User> = self.client.get(ADMIN_USERS_PATH).await?;
        Ok(envelope.items)
    }

    /// `PATCH /api/admin/users/{id}/ban` with `{isBanned}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn ban_user(&self, id: &str, is_banned: bool) -> Result<User, ApiError> {
        let body = serde_json::json!({ "isBanned": is_banned });
        self.client.patch(&user_path(id, "ban"), Some(&body)).await
    }

    /// `PATCH /api/admin/users/{id}/role` with `{role}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn set_user_role(&self, id: &str, role: Role) -> Result<User, ApiError> {
        let body = serde_json::json!({ "role": role.as_str() });
        self.client.patch(&user_path(id, "role"), Some(&body)).await
    }

    /// `GET /api/admin/messages`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let envelope: Items<ContactMessage> = self.client.get(ADMIN_MESSAGES_PATH).await?;
        Ok(envelope.items)
    }

    /// `DELETE /api/admin/messages/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn delete_message(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{ADMIN_MESSAGES_PATH}/{}", segment(id))).await
    }

    /// `GET /api/admin/reports?status=`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn list_reports(&self, status: Option<ReportStatus>) -> Result<Vec<ReportItem>, ApiError> {
        let path = QueryString::new()
            .text("status", status.map(ReportStatus::as_str))
            .apply(ADMIN_REPORTS_PATH);
        let envelope: Items<ReportItem> = self.client.get(&path).await?;
        Ok(envelope.items)
    }

    /// `PATCH /api/admin/reports/{id}/resolve`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn resolve_report(&self, id: &str) -> Result<ReportItem, ApiError> {
        self.client.patch(&format!("{ADMIN_REPORTS_PATH}/{}/resolve", segment(id)), None).await
    }

    /// `DELETE /api/admin/reports/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn delete_report(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{ADMIN_REPORTS_PATH}/{}", segment(id))).await
    }
}
