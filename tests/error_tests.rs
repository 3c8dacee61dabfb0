// SPDX-License-Identifier: MIT

//! Error taxonomy → HTTP status mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use trail_atlas::error::AppError;

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError::NotFound("Trail 999".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_bad_request_maps_to_400() {
    let response = AppError::BadRequest("Invalid trail id".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_unauthorized_maps_to_401() {
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::InvalidToken.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn test_upstream_failures_map_to_502() {
    // Service down and service-returned-garbage are both bad gateway, but
    // stay distinguishable by variant.
    let unavailable = AppError::UpstreamUnavailable("connection refused".to_string());
    let malformed = AppError::UpstreamMalformed("features is not an array".to_string());

    assert_eq!(
        unavailable.into_response().status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(malformed.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_internal_errors_map_to_500() {
    let database = AppError::Database("offline".to_string());
    let internal = AppError::Internal(anyhow::anyhow!("boom"));

    assert_eq!(
        database.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        internal.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
