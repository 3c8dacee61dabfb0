// SPDX-License-Identifier: MIT

//! Google Places proxy client.
//!
//! The frontend never talks to Google directly (the API key stays server
//! side); this client forwards text search, place details, and photo
//! requests and returns the upstream payloads as-is, apart from flattening
//! the review photo URL field the frontend expects.

use crate::error::AppError;
use anyhow::anyhow;
use serde_json::Value;

const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
const TEXT_SEARCH_RADIUS_M: u32 = 5000;
const DETAILS_FIELDS: &str = "name,photos,reviews,rating,formatted_address";

/// Google Places HTTP client.
#[derive(Clone)]
pub struct PlacesService {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl PlacesService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Internal(anyhow!("Google API key not configured")))
    }

    /// Text search around an optional `lat,lng` location.
    pub async fn text_search(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> Result<Value, AppError> {
        let key = self.api_key()?;
        let url = format!("{}/textsearch/json", PLACES_BASE_URL);

        let mut params = vec![
            ("query".to_string(), query.to_string()),
            ("radius".to_string(), TEXT_SEARCH_RADIUS_M.to_string()),
            ("key".to_string(), key.to_string()),
        ];
        if let Some(location) = location {
            params.push(("location".to_string(), location.to_string()));
        }

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Places text search failed: {}", e)))?;

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Places text search body: {}", e)))
    }

    /// Place details with the review photo URLs flattened for the frontend.
    pub async fn details(&self, place_id: &str) -> Result<Value, AppError> {
        let key = self.api_key()?;
        let url = format!("{}/details/json", PLACES_BASE_URL);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Places details failed: {}", e)))?;

        let mut data: Value = response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Places details body: {}", e)))?;

        flatten_review_photos(&mut data);
        Ok(data)
    }

    /// Fetch a place photo; returns the bytes and the content type.
    pub async fn photo(
        &self,
        photo_reference: &str,
        max_width: &str,
    ) -> Result<(Vec<u8>, String), AppError> {
        let key = self.api_key()?;
        let url = format!(
            "{}/photo?maxwidth={}&photo_reference={}&key={}",
            PLACES_BASE_URL,
            urlencoding::encode(max_width),
            urlencoding::encode(photo_reference),
            key
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Places photo failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Internal(anyhow!(
                "Places photo returned status {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Places photo body: {}", e)))?;

        Ok((bytes.to_vec(), content_type))
    }
}

/// Copy each review's `profile_photo_url` into the `profilePhoto` field the
/// frontend reads.
fn flatten_review_photos(data: &mut Value) {
    let Some(reviews) = data
        .get_mut("result")
        .and_then(|r| r.get_mut("reviews"))
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for review in reviews {
        let photo = review.get("profile_photo_url").cloned();
        if let (Some(photo), Some(obj)) = (photo, review.as_object_mut()) {
            obj.insert("profilePhoto".to_string(), photo);
        }
    }
}
