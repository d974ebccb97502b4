//! Listing routes — public feed/detail plus the seller's CRUD surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::car::{self, CarError, CarRow, CarSummaryRow, ImageRef, NewCar};
use crate::services::storage::Storage;
use crate::state::AppState;

// =============================================================================
// RESPONSE SHAPES
// =============================================================================

#[derive(Serialize)]
pub struct CarImageResponse {
    pub id: Uuid,
    pub url: String,
}

#[derive(Serialize)]
pub struct CarSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub cover_url: Option<String>,
}

#[derive(Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub name: String,
    pub model: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub whatsapp: String,
    pub description: String,
    pub owner_name: String,
    pub user_id: Uuid,
    pub images: Vec<CarImageResponse>,
}

fn image_url(image: ImageRef) -> String {
    Storage::public_url(image.user_id, image.id)
}

fn to_summary_response(row: CarSummaryRow) -> CarSummaryResponse {
    CarSummaryResponse {
        id: row.id,
        name: row.name,
        year: row.year,
        km: row.km,
        price: row.price,
        city: row.city,
        cover_url: row.cover.map(image_url),
    }
}

fn to_car_response(car: CarRow, images: Vec<ImageRef>) -> CarResponse {
    CarResponse {
        id: car.id,
        name: car.name,
        model: car.model,
        year: car.year,
        km: car.km,
        price: car.price,
        city: car.city,
        whatsapp: car.whatsapp,
        description: car.description,
        owner_name: car.owner_name,
        user_id: car.user_id,
        images: images
            .into_iter()
            .map(|image| CarImageResponse { id: image.id, url: image_url(image) })
            .collect(),
    }
}

pub(crate) fn car_error_to_status(err: &CarError) -> StatusCode {
    match err {
        CarError::NotFound(_) => StatusCode::NOT_FOUND,
        CarError::Forbidden(_) => StatusCode::FORBIDDEN,
        CarError::Invalid(_) => StatusCode::BAD_REQUEST,
        CarError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(err: &CarError) -> StatusCode {
    if matches!(err, CarError::Database(_)) {
        tracing::error!(error = %err, "listing query failed");
    }
    car_error_to_status(err)
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct FeedQuery {
    pub search: Option<String>,
}

/// `GET /api/cars` — public feed, optionally filtered by name.
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<CarSummaryResponse>>, StatusCode> {
    let rows = car::list_cars(&state.pool, query.search.as_deref())
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok(Json(rows.into_iter().map(to_summary_response).collect()))
}

/// `GET /api/cars/:id` — public listing detail.
pub async fn get_car(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<CarResponse>, StatusCode> {
    let found = car::get_car(&state.pool, car_id)
        .await
        .map_err(|e| log_and_map(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    let (row, images) = found;
    Ok(Json(to_car_response(row, images)))
}

/// `GET /api/my/cars` — the signed-in seller's listings.
pub async fn list_my_cars(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CarSummaryResponse>>, StatusCode> {
    let rows = car::list_user_cars(&state.pool, auth.user.id)
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok(Json(rows.into_iter().map(to_summary_response).collect()))
}

#[derive(Deserialize)]
pub struct CreateCarBody {
    pub name: String,
    pub model: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub whatsapp: String,
    pub description: String,
    #[serde(default)]
    pub image_ids: Vec<Uuid>,
}

impl From<CreateCarBody> for NewCar {
    fn from(body: CreateCarBody) -> Self {
        Self {
            name: body.name,
            model: body.model,
            year: body.year,
            km: body.km,
            price: body.price,
            city: body.city,
            whatsapp: body.whatsapp,
            description: body.description,
            image_ids: body.image_ids,
        }
    }
}

/// `POST /api/cars` — create a listing from previously uploaded photos.
pub async fn create_car(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateCarBody>,
) -> Result<(StatusCode, Json<CarResponse>), StatusCode> {
    let image_ids = body.image_ids.clone();
    let row = car::create_car(&state.pool, &auth.user, body.into())
        .await
        .map_err(|e| log_and_map(&e))?;

    let images = image_ids
        .into_iter()
        .map(|id| ImageRef { id, user_id: auth.user.id })
        .collect();
    Ok((StatusCode::CREATED, Json(to_car_response(row, images))))
}

/// `DELETE /api/cars/:id` — delete an owned listing.
///
/// The record goes first; stored photo files are then removed best-effort,
/// with every failure logged rather than surfaced.
pub async fn delete_car(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(car_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let images = car::delete_car(&state.pool, car_id, auth.user.id)
        .await
        .map_err(|e| log_and_map(&e))?;

    for image in images {
        if let Err(e) = state.storage.remove(image.user_id, image.id).await {
            tracing::warn!(image_id = %image.id, error = %e, "orphaned photo file left behind");
        }
    }

    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "cars_test.rs"]
mod tests;
