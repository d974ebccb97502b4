//! Listing service — creation, feeds, detail, and deletion.
//!
//! DESIGN
//! ======
//! Photos are uploaded ahead of the listing and attached inside the
//! creation transaction, so a listing never exists half-built. Deletion
//! removes the database record first and reports the orphaned photo ids to
//! the caller for best-effort storage cleanup.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::session::SessionUser;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CarError {
    #[error("listing not found: {0}")]
    NotFound(Uuid),
    #[error("listing owned by another user: {0}")]
    Forbidden(Uuid),
    #[error("invalid listing: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Full listing row.
#[derive(Debug, Clone)]
pub struct CarRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub model: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub whatsapp: String,
    pub description: String,
    pub owner_name: String,
}

/// Feed row: the card fields plus an optional cover photo reference.
#[derive(Debug, Clone)]
pub struct CarSummaryRow {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub cover: Option<ImageRef>,
}

/// Enough of a `car_images` row to locate the stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// Fields accepted for a new listing.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub name: String,
    pub model: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub whatsapp: String,
    pub description: String,
    pub image_ids: Vec<Uuid>,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Listing names are stored uppercased, as the original site displays them.
#[must_use]
pub fn listing_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn whatsapp_ok(value: &str) -> bool {
    (11..=12).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

/// Reject incomplete or malformed listing payloads.
///
/// # Errors
///
/// Returns `CarError::Invalid` naming the first offending field.
pub fn validate_new_car(new: &NewCar) -> Result<(), CarError> {
    let required = [
        (&new.name, "name"),
        (&new.model, "model"),
        (&new.year, "year"),
        (&new.km, "km"),
        (&new.price, "price"),
        (&new.city, "city"),
        (&new.description, "description"),
    ];
    for (value, field) in required {
        if value.trim().is_empty() {
            return Err(CarError::Invalid(field));
        }
    }
    if !whatsapp_ok(new.whatsapp.trim()) {
        return Err(CarError::Invalid("whatsapp"));
    }
    if new.image_ids.is_empty() {
        return Err(CarError::Invalid("images"));
    }
    Ok(())
}

/// ILIKE pattern for a name search.
#[must_use]
pub fn search_pattern(term: &str) -> String {
    format!("%{}%", term.trim())
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a listing and attach its photos in one transaction.
///
/// # Errors
///
/// Returns `Invalid` for bad payloads (including photo ids that are not the
/// caller's detached uploads) or a database error.
pub async fn create_car(pool: &PgPool, owner: &SessionUser, new: NewCar) -> Result<CarRow, CarError> {
    validate_new_car(&new)?;
    let name = listing_name(&new.name);

    let mut tx = pool.begin().await?;

    let row = sqlx::query(
        "INSERT INTO cars (user_id, name, model, year, km, price, city, whatsapp, description, owner_name)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING id",
    )
    .bind(owner.id)
    .bind(&name)
    .bind(new.model.trim())
    .bind(new.year.trim())
    .bind(new.km.trim())
    .bind(new.price.trim())
    .bind(new.city.trim())
    .bind(new.whatsapp.trim())
    .bind(new.description.trim())
    .bind(&owner.name)
    .fetch_one(&mut *tx)
    .await?;
    let car_id: Uuid = row.get("id");

    // Attach only photos the caller uploaded and has not used elsewhere;
    // anything else fails the whole creation.
    let attached = sqlx::query(
        "UPDATE car_images SET car_id = $1
         WHERE id = ANY($2) AND user_id = $3 AND car_id IS NULL",
    )
    .bind(car_id)
    .bind(&new.image_ids)
    .bind(owner.id)
    .execute(&mut *tx)
    .await?;
    if attached.rows_affected() != new.image_ids.len() as u64 {
        return Err(CarError::Invalid("images"));
    }

    tx.commit().await?;

    Ok(CarRow {
        id: car_id,
        user_id: owner.id,
        name,
        model: new.model.trim().to_owned(),
        year: new.year.trim().to_owned(),
        km: new.km.trim().to_owned(),
        price: new.price.trim().to_owned(),
        city: new.city.trim().to_owned(),
        whatsapp: new.whatsapp.trim().to_owned(),
        description: new.description.trim().to_owned(),
        owner_name: owner.name.clone(),
    })
}

const SUMMARY_SELECT: &str = "SELECT c.id, c.name, c.year, c.km, c.price, c.city,
        cover.id AS cover_id, cover.user_id AS cover_user_id
 FROM cars c
 LEFT JOIN LATERAL (
     SELECT ci.id, ci.user_id
     FROM car_images ci
     WHERE ci.car_id = c.id
     ORDER BY ci.created_at ASC, ci.id ASC
     LIMIT 1
 ) cover ON TRUE";

fn summary_from_row(row: &sqlx::postgres::PgRow) -> CarSummaryRow {
    let cover_id: Option<Uuid> = row.get("cover_id");
    let cover_user_id: Option<Uuid> = row.get("cover_user_id");
    CarSummaryRow {
        id: row.get("id"),
        name: row.get("name"),
        year: row.get("year"),
        km: row.get("km"),
        price: row.get("price"),
        city: row.get("city"),
        cover: cover_id.zip(cover_user_id).map(|(id, user_id)| ImageRef { id, user_id }),
    }
}

/// Public feed, newest first, optionally filtered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_cars(pool: &PgPool, search: Option<&str>) -> Result<Vec<CarSummaryRow>, CarError> {
    let rows = match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => {
            sqlx::query(&format!("{SUMMARY_SELECT} WHERE c.name ILIKE $1 ORDER BY c.created_at DESC"))
                .bind(search_pattern(term))
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query(&format!("{SUMMARY_SELECT} ORDER BY c.created_at DESC"))
                .fetch_all(pool)
                .await?
        }
    };

    Ok(rows.iter().map(summary_from_row).collect())
}

/// One seller's listings, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_user_cars(pool: &PgPool, user_id: Uuid) -> Result<Vec<CarSummaryRow>, CarError> {
    let rows = sqlx::query(&format!("{SUMMARY_SELECT} WHERE c.user_id = $1 ORDER BY c.created_at DESC"))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(summary_from_row).collect())
}

/// Fetch one listing with its photos, `None` when the id is unknown.
///
/// # Errors
///
/// Returns a database error if a query fails.
pub async fn get_car(pool: &PgPool, car_id: Uuid) -> Result<Option<(CarRow, Vec<ImageRef>)>, CarError> {
    let row = sqlx::query(
        "SELECT id, user_id, name, model, year, km, price, city, whatsapp, description, owner_name
         FROM cars WHERE id = $1",
    )
    .bind(car_id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let car = CarRow {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        model: row.get("model"),
        year: row.get("year"),
        km: row.get("km"),
        price: row.get("price"),
        city: row.get("city"),
        whatsapp: row.get("whatsapp"),
        description: row.get("description"),
        owner_name: row.get("owner_name"),
    };

    let images = sqlx::query(
        "SELECT id, user_id FROM car_images WHERE car_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(car_id)
    .fetch_all(pool)
    .await?
    .iter()
    .map(|r| ImageRef { id: r.get("id"), user_id: r.get("user_id") })
    .collect();

    Ok(Some((car, images)))
}

/// Delete an owned listing. The record (and its photo rows, via cascade)
/// goes first; the returned refs let the route clean up stored files.
///
/// # Errors
///
/// Returns `NotFound`/`Forbidden` for unknown or foreign listings, or a
/// database error.
pub async fn delete_car(pool: &PgPool, car_id: Uuid, user_id: Uuid) -> Result<Vec<ImageRef>, CarError> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query("SELECT user_id FROM cars WHERE id = $1")
        .bind(car_id)
        .fetch_optional(&mut *tx)
        .await?;
    let Some(row) = row else {
        return Err(CarError::NotFound(car_id));
    };
    let owner_id: Uuid = row.get("user_id");
    if owner_id != user_id {
        return Err(CarError::Forbidden(car_id));
    }

    let images = sqlx::query("SELECT id, user_id FROM car_images WHERE car_id = $1")
        .bind(car_id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(|r| ImageRef { id: r.get("id"), user_id: r.get("user_id") })
        .collect();

    sqlx::query("DELETE FROM cars WHERE id = $1")
        .bind(car_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(images)
}

#[cfg(test)]
#[path = "car_test.rs"]
mod tests;
