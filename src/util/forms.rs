//! Form models: raw input strings in, typed requests out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages bind inputs to `String` signals and convert at submit time. Every
//! conversion lives here so it can be tested without a DOM.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are `&'static str` messages rendered inline next to
//! the form; nothing is sent when validation fails.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::config::DEFAULT_IMAGE_URL;
use crate::net::api::QueryString;
use crate::net::api_apartments::{ApartmentFilters, SortOrder};
use crate::net::types::{Apartment, ApartmentPayload, ContactMessagePayload, ListingType};

fn trimmed(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    trimmed(raw).ok_or(message)
}

/// Listing filter sidebar. Blank or unparsable inputs are left out of the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub city: String,
    pub listing_type: String,
    pub min_price: String,
    pub max_price: String,
    pub rooms: String,
}

impl FilterForm {
    /// Seed from URL query parameters.
    pub fn from_query<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            city: get("city").unwrap_or_default(),
            listing_type: get("type").unwrap_or_default(),
            min_price: get("minPrice").unwrap_or_default(),
            max_price: get("maxPrice").unwrap_or_default(),
            rooms: get("rooms").unwrap_or_default(),
        }
    }

    pub fn to_filters(&self) -> ApartmentFilters {
        ApartmentFilters {
            city: trimmed(&self.city),
            listing_type: ListingType::parse(self.listing_type.trim()),
            min_price: self.min_price.trim().parse().ok().filter(|p: &f64| p.is_finite()),
            max_price: self.max_price.trim().parse().ok().filter(|p: &f64| p.is_finite()),
            rooms: self.rooms.trim().parse().ok(),
            category_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_filters() == ApartmentFilters::default()
    }
}

/// Home page price bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceBand {
    #[default]
    Any,
    Low,
    Mid,
    High,
}

impl PriceBand {
    pub const ALL: [Self; 4] = [Self::Any, Self::Low, Self::Mid, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any Price",
            Self::Low => "Under $1,000",
            Self::Mid => "$1,000 - $3,000",
            Self::High => "$3,000+",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "low" => Self::Low,
            "mid" => Self::Mid,
            "high" => Self::High,
            _ => Self::Any,
        }
    }

    /// `(minPrice, maxPrice)` for the band.
    pub fn bounds(self) -> (Option<u32>, Option<u32>) {
        match self {
            Self::Any => (None, None),
            Self::Low => (None, Some(1000)),
            Self::Mid => (Some(1000), Some(3000)),
            Self::High => (Some(3000), None),
        }
    }
}

/// Hero search box on the home page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroSearch {
    pub city: String,
    pub listing_type: ListingType,
    pub band: PriceBand,
}

impl HeroSearch {
    /// Listings URL carrying the search as query parameters.
    pub fn to_path(&self) -> String {
        let (min, max) = self.band.bounds();
        QueryString::new()
            .text("city", Some(self.city.as_str()))
            .text("type", Some(self.listing_type.as_str()))
            .value("minPrice", min)
            .value("maxPrice", max)
            .apply("/apartments")
    }
}

/// Listings URL for a filter set, used to keep the address bar in sync.
pub fn listings_path(filters: &ApartmentFilters, sort: SortOrder, page: u32) -> String {
    QueryString::new()
        .text("city", filters.city.as_deref())
        .text("type", filters.listing_type.map(ListingType::as_str))
        .value("minPrice", filters.min_price)
        .value("maxPrice", filters.max_price)
        .value("rooms", filters.rooms)
        .text("sort", (sort != SortOrder::default()).then(|| sort.as_str()))
        .value("page", (page > 1).then_some(page))
        .apply("/apartments")
}

/// Number of result pages; at least one so the pager always renders.
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Create/edit listing form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub listing_type: ListingType,
    pub city: String,
    pub address: String,
    pub rooms: String,
    pub area: String,
    pub floor: String,
    pub image_url: String,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            listing_type: ListingType::Rent,
            city: String::new(),
            address: String::new(),
            rooms: String::new(),
            area: String::new(),
            floor: String::new(),
            image_url: DEFAULT_IMAGE_URL.to_owned(),
        }
    }
}

impl ListingDraft {
    /// Pre-fill from an existing listing.
    pub fn from_apartment(apt: &Apartment) -> Self {
        Self {
            title: apt.title.clone(),
            description: apt.description.clone(),
            price: apt.price.to_string(),
            listing_type: apt.listing_type,
            city: apt.city.clone(),
            address: apt.address.clone(),
            rooms: apt.rooms.to_string(),
            area: apt.area.to_string(),
            floor: apt.floor.to_string(),
            image_url: apt.image_url.clone(),
        }
    }

    /// Validate and convert.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn to_payload(&self) -> Result<ApartmentPayload, &'static str> {
        let title = required(&self.title, "Title is required")?;
        let description = required(&self.description, "Description is required")?;
        let price = parse_amount(&self.price, "Price must be a non-negative number")?;
        let city = required(&self.city, "City is required")?;
        let address = required(&self.address, "Address is required")?;
        let rooms = self.rooms.trim().parse::<u32>().map_err(|_| "Rooms must be a whole number")?;
        let area = parse_amount(&self.area, "Area must be a non-negative number")?;
        let floor = self.floor.trim().parse::<i32>().map_err(|_| "Floor must be a whole number")?;
        let image_url = required(&self.image_url, "Image URL is required")?;
        Ok(ApartmentPayload {
            title,
            description,
            price,
            listing_type: self.listing_type,
            city,
            address,
            rooms,
            area,
            floor,
            image_url,
            category_id: None,
        })
    }
}

fn parse_amount(raw: &str, message: &'static str) -> Result<f64, &'static str> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or(message)
}

/// # Errors
///
/// Returns a message when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    required(email, "Email is required")?;
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// # Errors
///
/// Returns a message when any field is blank or the email has no `@`.
pub fn validate_register(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    required(name, "Name is required")?;
    let email = required(email, "Email is required")?;
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// Help-center message; only the message body is mandatory.
///
/// # Errors
///
/// Returns a message when the body is blank.
pub fn contact_payload(name: &str, phone: &str, email: &str, message: &str) -> Result<ContactMessagePayload, &'static str> {
    Ok(ContactMessagePayload {
        name: trimmed(name),
        phone: trimmed(phone),
        email: trimmed(email),
        message: required(message, "Message is required")?,
    })
}

/// Contact request to a listing owner: `(phone, message)`.
///
/// # Errors
///
/// Returns a message when either field is blank.
pub fn validate_request(phone: &str, message: &str) -> Result<(String, String), &'static str> {
    Ok((required(phone, "Phone is required")?, required(message, "Message is required")?))
}

/// # Errors
///
/// Returns a message when the reason is blank.
pub fn validate_report(reason: &str) -> Result<String, &'static str> {
    required(reason, "Please describe the problem")
}
