//! Moderation console state.
//!
//! DESIGN
//! ======
//! The console holds every admin collection at once and re-fetches all of
//! them after any mutation. Moderation changes ripple across collections
//! (approving a pending listing moves it and changes the stats), so a full
//! reload is simpler than patching each list.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::api::ApiClient;
use crate::net::api_admin::{AdminListingFilter, ListingAction};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{AdminStats, Apartment, ContactMessage, ReportItem, Role, User};
use crate::state::storage::KeyValueStore;

/// Console tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Pending,
    Listings,
    Reports,
    Messages,
    Users,
    Stats,
}

impl AdminTab {
    pub const ALL: [Self; 6] = [Self::Pending, Self::Listings, Self::Reports, Self::Messages, Self::Users, Self::Stats];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Listings => "Listings",
            Self::Reports => "Reports",
            Self::Messages => "Messages",
            Self::Users => "Users",
            Self::Stats => "Stats",
        }
    }

    /// Item count shown next to the tab label.
    pub fn badge(self, data: &AdminData) -> Option<usize> {
        match self {
            Self::Pending => Some(data.pending.len()),
            Self::Listings => Some(data.listings.len()),
            Self::Reports => Some(data.reports.len()),
            Self::Messages => Some(data.messages.len()),
            Self::Users => Some(data.users.len()),
            Self::Stats => None,
        }
    }
}

/// Everything the console renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminData {
    pub stats: AdminStats,
    pub pending: Vec<Apartment>,
    pub listings: Vec<Apartment>,
    pub reports: Vec<ReportItem>,
    pub messages: Vec<ContactMessage>,
    pub users: Vec<User>,
}

impl AdminData {
    /// Load every collection. The first failure aborts the whole load.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] encountered.
    pub async fn fetch<T: Transport, B: KeyValueStore>(api: &ApiClient<T, B>) -> Result<Self, ApiError> {
        let admin = api.admin();
        let stats = admin.stats().await?;
        let pending = admin.list_apartments(AdminListingFilter::pending()).await?;
        let listings = admin.list_apartments(AdminListingFilter::default()).await?;
        let reports = admin.list_reports(None).await?;
        let messages = admin.list_messages().await?;
        let users = admin.list_users().await?;
        log::debug!(
            "admin data loaded: {} pending, {} listings, {} reports, {} messages, {} users",
            pending.len(),
            listings.len(),
            reports.len(),
            messages.len(),
            users.len()
        );
        Ok(Self { stats, pending, listings, reports, messages, users })
    }
}

/// One console mutation. Every variant is followed by a full reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminAction {
    Moderate(String, ListingAction),
    DeleteListing(String),
    ResolveReport(String),
    DeleteReport(String),
    DeleteMessage(String),
    SetBanned(String, bool),
    SetRole(String, Role),
}

impl AdminAction {
    /// Row the action applies to.
    pub fn target_id(&self) -> &str {
        match self {
            Self::Moderate(id, _)
            | Self::DeleteListing(id)
            | Self::ResolveReport(id)
            | Self::DeleteReport(id)
            | Self::DeleteMessage(id)
            | Self::SetBanned(id, _)
            | Self::SetRole(id, _) => id,
        }
    }

    /// Confirmation prompt for destructive actions.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::DeleteListing(_) => Some("Delete this listing permanently?"),
            Self::DeleteReport(_) => Some("Delete this report?"),
            Self::DeleteMessage(_) => Some("Delete this message?"),
            Self::SetBanned(_, true) => Some("Ban this user?"),
            _ => None,
        }
    }

    /// Send the action to the server.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the failed call.
    pub async fn apply<T: Transport, B: KeyValueStore>(&self, api: &ApiClient<T, B>) -> Result<(), ApiError> {
        let admin = api.admin();
        match self {
            Self::Moderate(id, action) => admin.moderate_apartment(id, *action).await.map(drop),
            Self::DeleteListing(id) => admin.delete_apartment(id).await,
            Self::ResolveReport(id) => admin.resolve_report(id).await.map(drop),
            Self::DeleteReport(id) => admin.delete_report(id).await,
            Self::DeleteMessage(id) => admin.delete_message(id).await,
            Self::SetBanned(id, banned) => admin.ban_user(id, *banned).await.map(drop),
            Self::SetRole(id, role) => admin.set_user_role(id, *role).await.map(drop),
        }
    }
}

/// Console view state.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub data: AdminData,
    pub loading: bool,
    /// Id of the row with a mutation in flight.
    pub busy: Option<String>,
    pub error: Option<String>,
}

impl AdminState {
    /// Mark the start of a (re)load, keeping the current data on screen.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<AdminData, ApiError>) {
        self.loading = false;
        self.busy = None;
        match result {
            Ok(data) => self.data = data,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn begin_mutation(&mut self, id: &str) {
        self.busy = Some(id.to_owned());
        self.error = None;
    }

    /// A failed mutation leaves data as-is and reports the message.
    pub fn fail_mutation(&mut self, error: &ApiError) {
        self.busy = None;
        self.error = Some(error.to_string());
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.as_deref() == Some(id)
    }
}
