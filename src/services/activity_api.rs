// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API contract and its HTTP client.
//!
//! [`ActivityApi`] is everything the store needs from the backend. The HTTP
//! implementation talks JSON to `/activities` under a configurable base URL.

use crate::error::{AppError, ErrorResponse, Result};
use crate::models::Activity;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Remote activities service.
///
/// Every method is a single request/response. Implementations report any
/// failure as an [`AppError`]; the store treats all of them alike.
pub trait ActivityApi: Send + Sync + 'static {
    /// Fetch the full collection.
    fn list(&self) -> impl Future<Output = Result<Vec<Activity>>> + Send;

    /// Fetch one activity. Unknown ids fail.
    fn details(&self, id: &str) -> impl Future<Output = Result<Activity>> + Send;

    fn create(&self, activity: &Activity) -> impl Future<Output = Result<()>> + Send;

    fn update(&self, activity: &Activity) -> impl Future<Output = Result<()>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// HTTP client for the activities API.
#[derive(Clone)]
pub struct HttpActivityApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpActivityApi {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/activities/{}", self.base_url, urlencoding::encode(id))
    }

    /// Check response status and return error if not successful.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.details.or(Some(e.error)))
            .unwrap_or_else(|| body.clone());

        Err(match status.as_u16() {
            400 => AppError::BadRequest(message),
            404 => AppError::NotFound(message),
            409 => AppError::Conflict(message),
            _ => AppError::RemoteApi(format!("HTTP {}: {}", status, body)),
        })
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        Self::check_response(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::RemoteApi(format!("JSON parse error: {}", e)))
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::RemoteApi(e.to_string())
}

impl ActivityApi for HttpActivityApi {
    async fn list(&self) -> Result<Vec<Activity>> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_response_json(response).await
    }

    async fn details(&self, id: &str) -> Result<Activity> {
        let response = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_response_json(response).await
    }

    async fn create(&self, activity: &Activity) -> Result<()> {
        let response = self
            .http
            .post(self.collection_url())
            .json(activity)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_response(response).await?;
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<()> {
        let response = self
            .http
            .put(self.item_url(&activity.id))
            .json(activity)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_response(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_response(response).await?;
        Ok(())
    }
}
