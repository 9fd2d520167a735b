//! `apartments` and `reports` resource groups.

#[cfg(test)]
#[path = "api_apartments_test.rs"]
mod api_apartments_test;

use serde::Serialize;

use super::api::{ApiClient, QueryString, segment};
use super::error::ApiError;
use super::transport::Transport;
use super::types::{Apartment, ApartmentPage, ApartmentPayload, Created, ListingType};
use crate::config::OWNED_LISTINGS_LIMIT;
use crate::state::storage::KeyValueStore;

pub(crate) const APARTMENTS_PATH: &str = "/api/apartments";

/// Search filters for the public listing. `None` and blank values are never
/// sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApartmentFilters {
    pub city: Option<String>,
    pub listing_type: Option<ListingType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub rooms: Option<u32>,
    pub category_id: Option<String>,
}

/// Server-side ordering for the listing search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Newest, Self::PriceAsc, Self::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.as_str() == raw)
    }
}

/// Full listing query: filters plus paging and ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApartmentQuery {
    pub filters: ApartmentFilters,
    /// `"me"` restricts results to the caller's own listings.
    pub owner: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
}

impl ApartmentQuery {
    pub fn new(filters: ApartmentFilters) -> Self {
        Self { filters, ..Self::default() }
    }

    #[must_use]
    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Query string in the backend's parameter order.
    pub fn to_query(&self) -> QueryString {
        let f = &self.filters;
        QueryString::new()
            .text("city", f.city.as_deref())
            .text("type", f.listing_type.map(ListingType::as_str))
            .value("minPrice", f.min_price)
            .value("maxPrice", f.max_price)
            .value("rooms", f.rooms)
            .text("categoryId", f.category_id.as_deref())
            .text("owner", self.owner.as_deref())
            .value("page", self.page)
            .value("limit", self.limit)
            .text("sort", self.sort.map(SortOrder::as_str))
    }
}

#[derive(Serialize)]
struct ReportBody<'a> {
    reason: &'a str,
}

/// Listing CRUD.
pub struct ApartmentsApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

/// Abuse reports against listings.
pub struct ReportsApi<'a, T, B> {
    client: &'a ApiClient<T, B>,
}

impl<T: Transport, B: KeyValueStore> ApiClient<T, B> {
    pub fn apartments(&self) -> ApartmentsApi<'_, T, B> {
        ApartmentsApi { client: self }
    }

    pub fn reports(&self) -> ReportsApi<'_, T, B> {
        ReportsApi { client: self }
    }
}

fn apartment_path(id: &str) -> String {
    format!("{APARTMENTS_PATH}/{}", segment(id))
}

impl<T: Transport, B: KeyValueStore> ApartmentsApi<'_, T, B> {
    /// `GET /api/apartments?...`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn list(&self, query: &ApartmentQuery) -> Result<ApartmentPage, ApiError> {
        self.client.get(&query.to_query().apply(APARTMENTS_PATH)).await
    }

    /// `GET /api/apartments/{id}`
    ///
    /// # Errors
    ///
    /// A missing listing is an error with [`ApiError::is_not_found`] set.
    pub async fn get(&self, id: &str) -> Result<Apartment, ApiError> {
        self.client.get(&apartment_path(id)).await
    }

    /// `POST /api/apartments`; the caller becomes the owner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when unauthenticated or the payload is rejected.
    pub async fn create(&self, payload: &ApartmentPayload) -> Result<Apartment, ApiError> {
        self.client.post(APARTMENTS_PATH, payload).await
    }

    /// `PUT /api/apartments/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the caller is neither owner nor admin.
    pub async fn update(&self, id: &str, payload: &ApartmentPayload) -> Result<Apartment, ApiError> {
        self.client.put(&apartment_path(id), payload).await
    }

    /// `DELETE /api/apartments/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the caller is neither owner nor admin.
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&apartment_path(id)).await
    }

    /// Listings owned by the caller (`owner=me`, one large page).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn get_mine(&self) -> Result<Vec<Apartment>, ApiError> {
        let query = ApartmentQuery {
            owner: Some("me".to_owned()),
            limit: Some(OWNED_LISTINGS_LIMIT),
            ..ApartmentQuery::default()
        };
        Ok(self.list(&query).await?.items)
    }
}

impl<T: Transport, B: KeyValueStore> ReportsApi<'_, T, B> {
    /// `POST /api/apartments/{id}/reports`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failed call.
    pub async fn create(&self, apartment_id: &str, reason: &str) -> Result<Created, ApiError> {
        let path = format!("{}/reports", apartment_path(apartment_id));
        self.client.post(&path, &ReportBody { reason }).await
    }
}
