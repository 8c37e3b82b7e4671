// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side activity store.
//!
//! Keeps a local registry of activities in step with the activities API and
//! tracks the transient UI state around it:
//! - `loading_initial` while a list or single-activity fetch is in flight
//! - `submitting` while a create, edit or delete is in flight
//! - `edit_mode` while a form is open
//!
//! Every operation catches its own failure: the flag is reset, the error is
//! logged, and the error is also returned so a caller may react. Nothing is
//! retried. Concurrent calls are not ordered against each other; whichever
//! response lands last wins.

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::services::ActivityApi;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the activity store. Clones observe the same state.
pub struct ActivityStore<A> {
    inner: Arc<StoreInner<A>>,
}

struct StoreInner<A> {
    api: A,
    registry: DashMap<String, Arc<Activity>>,
    selected: Mutex<Option<Arc<Activity>>>,
    loading_initial: AtomicBool,
    submitting: AtomicBool,
    edit_mode: AtomicBool,
}

impl<A> Clone for ActivityStore<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Raises a flag for the lifetime of the guard.
///
/// Dropping the guard clears the flag, so the flag settles whether the
/// operation succeeds, fails, or its future is dropped mid-flight.
struct FlagGuard<'a>(&'a AtomicBool);

impl<'a> FlagGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<A: ActivityApi> ActivityStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                api,
                registry: DashMap::new(),
                selected: Mutex::new(None),
                loading_initial: AtomicBool::new(false),
                submitting: AtomicBool::new(false),
                edit_mode: AtomicBool::new(false),
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.inner.api
    }

    // ─── Remote Operations ───────────────────────────────────────

    /// Fetch every activity and upsert it into the registry.
    ///
    /// Returns the number of activities received.
    pub async fn load_all(&self) -> Result<usize> {
        let _loading = FlagGuard::raise(&self.inner.loading_initial);
        tracing::debug!("Loading activities");

        let activities = self
            .inner
            .api
            .list()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load activities"))?;

        let count = activities.len();
        for activity in activities {
            self.upsert(activity);
        }

        tracing::info!(count, cached = self.len(), "Activities loaded");
        Ok(count)
    }

    /// Make `id` the current activity.
    ///
    /// A cached entry is used as is, without a request. Otherwise the
    /// activity is fetched and becomes current; it is not added to the
    /// registry.
    pub async fn load_one(&self, id: &str) -> Result<Arc<Activity>> {
        if let Some(cached) = self.get(id) {
            tracing::debug!(id, "Activity served from cache");
            self.set_selected(Some(Arc::clone(&cached)));
            return Ok(cached);
        }

        let _loading = FlagGuard::raise(&self.inner.loading_initial);
        tracing::debug!(id, "Fetching activity");

        let activity = self
            .inner
            .api
            .details(id)
            .await
            .inspect_err(|e| tracing::warn!(id, error = %e, "Failed to load activity"))?;

        let activity = Arc::new(activity.with_normalized_date());
        self.set_selected(Some(Arc::clone(&activity)));
        Ok(activity)
    }

    /// Send a new activity and cache it once the server accepts it.
    pub async fn create(&self, activity: Activity) -> Result<()> {
        let _submitting = FlagGuard::raise(&self.inner.submitting);
        tracing::debug!(id = %activity.id, "Creating activity");

        self.inner
            .api
            .create(&activity)
            .await
            .inspect_err(|e| {
                tracing::warn!(id = %activity.id, error = %e, "Failed to create activity")
            })?;

        tracing::info!(id = %activity.id, "Activity created");
        self.upsert(activity);
        self.inner.edit_mode.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Send an update, then cache it and make it current.
    pub async fn edit(&self, activity: Activity) -> Result<()> {
        let _submitting = FlagGuard::raise(&self.inner.submitting);
        tracing::debug!(id = %activity.id, "Updating activity");

        self.inner
            .api
            .update(&activity)
            .await
            .inspect_err(|e| {
                tracing::warn!(id = %activity.id, error = %e, "Failed to update activity")
            })?;

        tracing::info!(id = %activity.id, "Activity updated");
        let updated = self.upsert(activity);
        self.set_selected(Some(updated));
        self.inner.edit_mode.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Delete remotely, then drop the cached entry.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _submitting = FlagGuard::raise(&self.inner.submitting);
        tracing::debug!(id, "Deleting activity");

        self.inner
            .api
            .delete(id)
            .await
            .inspect_err(|e| tracing::warn!(id, error = %e, "Failed to delete activity"))?;

        tracing::info!(id, "Activity deleted");
        self.inner.registry.remove(id);
        Ok(())
    }

    // ─── Local Actions ───────────────────────────────────────────

    /// Cached activity for `id`, if any. No side effects.
    pub fn get(&self, id: &str) -> Option<Arc<Activity>> {
        self.inner
            .registry
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Cached activity for `id`, or `NotFound`.
    pub fn require(&self, id: &str) -> Result<Arc<Activity>> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} is not cached", id)))
    }

    pub fn clear_current(&self) {
        self.set_selected(None);
    }

    /// Leave edit mode and select the cached activity for `id`.
    pub fn select(&self, id: &str) {
        self.inner.edit_mode.store(false, Ordering::SeqCst);
        self.set_selected(self.get(id));
    }

    /// Open an empty form for a new activity.
    pub fn open_create_form(&self) {
        self.inner.edit_mode.store(true, Ordering::SeqCst);
        self.set_selected(None);
    }

    /// Open the form on the cached activity for `id`.
    pub fn open_edit_form(&self, id: &str) {
        self.set_selected(self.get(id));
        self.inner.edit_mode.store(true, Ordering::SeqCst);
    }

    pub fn cancel_form_open(&self) {
        self.inner.edit_mode.store(false, Ordering::SeqCst);
    }

    // ─── Views ───────────────────────────────────────────────────

    /// Cached activities in ascending date order.
    ///
    /// Computed from a snapshot on each call; call again to restart.
    pub fn by_date(&self) -> impl Iterator<Item = Arc<Activity>> {
        let mut activities = self.snapshot();
        activities.sort_by(|a, b| a.cmp_by_date(b));
        activities.into_iter()
    }

    /// Unordered copy of the registry values.
    pub fn snapshot(&self) -> Vec<Arc<Activity>> {
        self.inner
            .registry
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn current(&self) -> Option<Arc<Activity>> {
        self.lock_selected().clone()
    }

    pub fn loading_initial(&self) -> bool {
        self.inner.loading_initial.load(Ordering::SeqCst)
    }

    pub fn submitting(&self) -> bool {
        self.inner.submitting.load(Ordering::SeqCst)
    }

    pub fn edit_mode(&self) -> bool {
        self.inner.edit_mode.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.registry.is_empty()
    }

    // ─── Internals ───────────────────────────────────────────────

    /// Normalize and insert, replacing any entry with the same id.
    fn upsert(&self, activity: Activity) -> Arc<Activity> {
        let activity = Arc::new(activity.with_normalized_date());
        self.inner
            .registry
            .insert(activity.id.clone(), Arc::clone(&activity));
        activity
    }

    fn set_selected(&self, activity: Option<Arc<Activity>>) {
        *self.lock_selected() = activity;
    }

    fn lock_selected(&self) -> MutexGuard<'_, Option<Arc<Activity>>> {
        // The guarded value is a plain Option; a panic elsewhere cannot leave it torn.
        self.inner
            .selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
