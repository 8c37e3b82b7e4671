// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - client-side business logic.

pub mod activity_api;
pub mod activity_store;

pub use activity_api::{ActivityApi, HttpActivityApi};
pub use activity_store::ActivityStore;
