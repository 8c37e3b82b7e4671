// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CRUD routes for activities.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityUpdate};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Activity routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity).put(edit_activity).delete(delete_activity),
        )
}

/// List all activities, oldest first.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Vec<Activity>> {
    let activities = state.repository.list();
    tracing::debug!(count = activities.len(), "Listing activities");
    Json(activities)
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    state
        .repository
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(activity): Json<Activity>,
) -> Result<StatusCode> {
    let id = activity.id.clone();
    state.repository.create(activity)?;

    tracing::info!(id = %id, "Activity created");
    Ok(StatusCode::OK)
}

/// Update an activity. Fields missing from the body are left unchanged.
async fn edit_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<ActivityUpdate>,
) -> Result<StatusCode> {
    state.repository.update(&id, update)?;

    tracing::info!(id = %id, "Activity updated");
    Ok(StatusCode::OK)
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.repository.delete(&id)?;

    tracing::info!(id = %id, "Activity deleted");
    Ok(StatusCode::OK)
}
