//! Shared DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror server response payloads so serde
//! round-trips stay lossless and page code can stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/me`, login, and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// A stored listing photo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarImage {
    /// Unique image identifier (UUID string).
    pub id: String,
    /// Public URL the photo is served from.
    pub url: String,
}

/// A listing as shown on the home feed and the seller dashboard.
///
/// Year, mileage, and price are free-form strings: they are captured as the
/// seller typed them and rendered verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSummary {
    pub id: String,
    pub name: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    /// URL of the first photo, if the listing has any.
    pub cover_url: Option<String>,
}

/// Full listing detail for the `/car/:id` page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub name: String,
    pub model: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    /// Seller contact number, digits only.
    pub whatsapp: String,
    pub description: String,
    /// Seller display name at listing time.
    pub owner_name: String,
    /// Seller user id (UUID string).
    pub user_id: String,
    pub images: Vec<CarImage>,
}
