//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! listing fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Car, CarImage, CarSummary, User};

#[cfg(any(test, feature = "hydrate"))]
fn car_endpoint(car_id: &str) -> String {
    format!("/api/cars/{car_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint(image_id: &str) -> String {
    format!("/api/uploads/{image_id}")
}

/// Trimmed search term, or `None` when the box is blank.
#[cfg(any(test, feature = "hydrate"))]
fn search_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`, returning the session profile.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`. The server also opens a
/// session, so a successful return means the user is signed in.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the account cannot
/// be created (e.g. the email is already taken).
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("register", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the public listing feed, optionally filtered by name.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails.
pub async fn fetch_cars(search: &str) -> Result<Vec<CarSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get("/api/cars");
        if let Some(term) = search_term(search) {
            request = request.query([("search", term.as_str())]);
        }
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("listing fetch", resp.status()));
        }
        resp.json::<Vec<CarSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
        Err("not available on server".to_owned())
    }
}

/// Fetch one listing. `Ok(None)` means the id does not exist.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails.
pub async fn fetch_car(car_id: &str) -> Result<Option<Car>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = car_endpoint(car_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("listing fetch", resp.status()));
        }
        resp.json::<Car>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = car_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in seller's own listings from `/api/my/cars`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the session is gone.
pub async fn fetch_my_cars() -> Result<Vec<CarSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/my/cars")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("listing fetch", resp.status()));
        }
        resp.json::<Vec<CarSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fields submitted by the new-listing form.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NewListing {
    pub name: String,
    pub model: String,
    pub year: String,
    pub km: String,
    pub price: String,
    pub city: String,
    pub whatsapp: String,
    pub description: String,
    /// Ids of previously uploaded photos, in display order.
    pub image_ids: Vec<String>,
}

/// Create a listing via `POST /api/cars`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the payload.
pub async fn create_car(listing: &NewListing) -> Result<Car, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/cars")
            .json(listing)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("listing create", resp.status()));
        }
        resp.json::<Car>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = listing;
        Err("not available on server".to_owned())
    }
}

/// Delete a listing via `DELETE /api/cars/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the caller does not
/// own the listing.
pub async fn delete_car(car_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = car_endpoint(car_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("listing delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = car_id;
        Err("not available on server".to_owned())
    }
}

/// Upload one photo via multipart `POST /api/uploads`.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the HTTP request
/// fails, or the server rejects the file.
#[cfg(feature = "hydrate")]
pub async fn upload_photo(file: &web_sys::File) -> Result<CarImage, String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "form construction failed".to_owned())?;

    let resp = gloo_net::http::Request::post("/api/uploads")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("photo upload", resp.status()));
    }
    resp.json::<CarImage>().await.map_err(|e| e.to_string())
}

/// Remove a not-yet-attached upload via `DELETE /api/uploads/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails.
pub async fn delete_photo(image_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = upload_endpoint(image_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("photo delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_id;
        Err("not available on server".to_owned())
    }
}
