// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_hub::error::{AppError, ErrorResponse};
use axum::http::StatusCode;
use axum::response::IntoResponse;

async fn body_of(err: AppError) -> (StatusCode, ErrorResponse) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_client_errors_carry_details() {
    let (status, body) = body_of(AppError::NotFound("Activity 1 not found".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "not_found");
    assert_eq!(body.details.as_deref(), Some("Activity 1 not found"));

    let (status, body) = body_of(AppError::Conflict("exists".to_string())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error, "conflict");

    let (status, body) = body_of(AppError::BadRequest("bad".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "bad_request");
}

#[tokio::test]
async fn test_remote_errors_hide_details() {
    let (status, body) = body_of(AppError::RemoteApi("HTTP 500: boom".to_string())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.error, "remote_api_error");
    assert!(body.details.is_none());
}
