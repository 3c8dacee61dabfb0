// SPDX-License-Identifier: MIT

//! ArcGIS FeatureServer client for the upstream trail dataset.
//!
//! The service is a public, unauthenticated query endpoint. Failures split
//! into two kinds the callers care to distinguish: the service being
//! unreachable (network error, non-success status) and the service answering
//! with an unusable body (embedded error member, missing feature array).

use crate::error::AppError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Query parameters forwarded to the feature service.
///
/// Defaults match the full-dataset fetch: every field, every row, with
/// geometry included.
#[derive(Debug, Clone, Default)]
pub struct TrailQuery {
    /// SQL-like predicate, defaults to `1=1`
    pub where_clause: Option<String>,
    /// Field selector, defaults to `*`
    pub out_fields: Option<String>,
}

impl TrailQuery {
    /// Query constrained to a single object id.
    pub fn by_object_id(id: i64) -> Self {
        Self {
            where_clause: Some(format!("OBJECTID={}", id)),
            out_fields: None,
        }
    }
}

/// One unprocessed record from the feature service.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    /// Field map; GeoJSON-flavored responses call this `properties`
    #[serde(default, alias = "properties")]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

/// Raw geometry in either upstream shape: ArcGIS polyline `paths`
/// (Web Mercator meters) or GeoJSON `coordinates` (already WGS84).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub paths: Option<Vec<Vec<Vec<f64>>>>,
    #[serde(default)]
    pub coordinates: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<i64>,
}

/// HTTP client for the feature service.
#[derive(Clone)]
pub struct ArcGisClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArcGisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run a feature query and return the raw feature array.
    pub async fn query(&self, params: &TrailQuery) -> Result<Vec<RawFeature>, AppError> {
        let url = format!("{}/query", self.base_url);
        let where_clause = params.where_clause.as_deref().unwrap_or("1=1");
        let out_fields = params.out_fields.as_deref().unwrap_or("*");

        tracing::debug!(url = %url, where_clause = %where_clause, "Querying trail feature service");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("where", where_clause),
                ("outFields", out_fields),
                ("f", "json"),
                ("returnGeometry", "true"),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        parse_query_response(&body)
    }
}

/// Parse a feature-service response body into raw features.
///
/// Separated from the HTTP call so response handling is testable offline.
pub fn parse_query_response(body: &str) -> Result<Vec<RawFeature>, AppError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::UpstreamMalformed(format!("invalid JSON body: {}", e)))?;

    if let Some(error) = value.get("error") {
        let error: UpstreamError = serde_json::from_value(error.clone()).unwrap_or(UpstreamError {
            message: None,
            code: None,
        });
        let message = error.message.unwrap_or_else(|| "upstream error".to_string());
        return Err(AppError::UpstreamMalformed(match error.code {
            Some(code) => format!("upstream error {}: {}", code, message),
            None => message,
        }));
    }

    // The response nominally carries `features`; some deployments answer
    // with `results` instead.
    let features = value
        .get("features")
        .or_else(|| value.get("results"))
        .ok_or_else(|| {
            AppError::UpstreamMalformed("response has neither features nor results".to_string())
        })?;

    if !features.is_array() {
        return Err(AppError::UpstreamMalformed(
            "features is not an array".to_string(),
        ));
    }

    serde_json::from_value(features.clone())
        .map_err(|e| AppError::UpstreamMalformed(format!("unreadable feature array: {}", e)))
}
