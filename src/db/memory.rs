// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity repository backing the development server.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityUpdate};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Activity repository. Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct ActivityRepository {
    activities: Arc<DashMap<String, Activity>>,
}

impl ActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `activities`.
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let repo = Self::new();
        for activity in activities {
            repo.activities.insert(activity.id.clone(), activity);
        }
        repo
    }

    /// All activities, ascending by date (ties and unparseable dates by id).
    pub fn list(&self) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by(Activity::cmp_by_date);
        activities
    }

    pub fn get(&self, id: &str) -> Option<Activity> {
        self.activities.get(id).map(|entry| entry.value().clone())
    }

    /// Insert a new activity. Fails if the id is empty or already taken.
    pub fn create(&self, activity: Activity) -> Result<()> {
        if activity.id.trim().is_empty() {
            return Err(AppError::BadRequest("Activity id is required".to_string()));
        }

        match self.activities.entry(activity.id.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "Activity {} already exists",
                activity.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(activity);
                Ok(())
            }
        }
    }

    /// Apply a partial update and return the stored result.
    pub fn update(&self, id: &str, update: ActivityUpdate) -> Result<Activity> {
        let mut entry = self
            .activities
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        update.apply_to(entry.value_mut());
        Ok(entry.value().clone())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.activities
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
