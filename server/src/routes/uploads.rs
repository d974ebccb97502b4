//! Photo upload routes.
//!
//! DESIGN
//! ======
//! Uploads are accepted before the listing exists: each one gets a detached
//! `car_images` row plus a stored file, and listing creation attaches the
//! rows later. A failed file write rolls the row back so the two stores
//! cannot drift.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use sqlx::Row;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::storage::Storage;
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub(crate) fn is_allowed_content_type(content_type: &str) -> bool {
    matches!(content_type, "image/jpeg" | "image/png")
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub url: String,
}

/// `POST /api/uploads` — store one jpeg/png photo for the signed-in seller.
pub async fn upload_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), StatusCode> {
    let field = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
        .ok_or(StatusCode::BAD_REQUEST)?;

    let content_type = field.content_type().unwrap_or_default().to_owned();
    if !is_allowed_content_type(&content_type) {
        return Err(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
    if bytes.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(StatusCode::PAYLOAD_TOO_LARGE);
    }

    let row = sqlx::query("INSERT INTO car_images (user_id, content_type) VALUES ($1, $2) RETURNING id")
        .bind(auth.user.id)
        .bind(&content_type)
        .fetch_one(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "photo row insert failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let image_id: Uuid = row.get("id");

    if let Err(e) = state.storage.save(auth.user.id, image_id, &bytes).await {
        tracing::error!(image_id = %image_id, error = %e, "photo write failed");
        let _ = sqlx::query("DELETE FROM car_images WHERE id = $1")
            .bind(image_id)
            .execute(&state.pool)
            .await;
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse { id: image_id, url: Storage::public_url(auth.user.id, image_id) }),
    ))
}

/// `DELETE /api/uploads/:id` — drop one of the caller's detached uploads.
///
/// Photos already attached to a listing are not deletable here; they go
/// away with the listing.
pub async fn delete_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(image_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let deleted = sqlx::query("DELETE FROM car_images WHERE id = $1 AND user_id = $2 AND car_id IS NULL RETURNING id")
        .bind(image_id)
        .bind(auth.user.id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "photo row delete failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    if deleted.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    if let Err(e) = state.storage.remove(auth.user.id, image_id).await {
        tracing::warn!(image_id = %image_id, error = %e, "orphaned photo file left behind");
    }

    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "uploads_test.rs"]
mod tests;
