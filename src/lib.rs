// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Hub: schedule and browse activities.
//!
//! This crate provides the client-side activity store that caches activities
//! fetched from the activities API, an HTTP client for that API, and a small
//! development server implementing it.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::ActivityRepository;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub repository: ActivityRepository,
}
