// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_hub::config::Config;
use activity_hub::db::ActivityRepository;
use activity_hub::error::{AppError, Result};
use activity_hub::models::Activity;
use activity_hub::routes::create_router;
use activity_hub::services::ActivityApi;
use activity_hub::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Build an activity with the given id, title and date; other fields empty.
#[allow(dead_code)]
pub fn activity(id: &str, title: &str, date: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        ..Default::default()
    }
}

/// In-memory activities API with failure injection and call counting.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockActivityApi {
    activities: Mutex<HashMap<String, Activity>>,
    fail: AtomicBool,
    delay: Mutex<Option<Duration>>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockActivityApi {
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let api = Self::default();
        {
            let mut map = api.activities.lock().unwrap();
            for a in activities {
                map.insert(a.id.clone(), a);
            }
        }
        api
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Delay every subsequent call.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self, id: &str) -> Option<Activity> {
        self.activities.lock().unwrap().get(id).cloned()
    }

    async fn begin(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::RemoteApi("injected failure".to_string()));
        }
        Ok(())
    }
}

impl ActivityApi for MockActivityApi {
    async fn list(&self) -> Result<Vec<Activity>> {
        self.begin().await?;
        Ok(self.activities.lock().unwrap().values().cloned().collect())
    }

    async fn details(&self, id: &str) -> Result<Activity> {
        self.begin().await?;
        self.stored(id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }

    async fn create(&self, activity: &Activity) -> Result<()> {
        self.begin().await?;
        self.activities
            .lock()
            .unwrap()
            .insert(activity.id.clone(), activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<()> {
        self.begin().await?;
        let mut map = self.activities.lock().unwrap();
        match map.get_mut(&activity.id) {
            Some(existing) => {
                *existing = activity.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Activity {} not found",
                activity.id
            ))),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.begin().await?;
        self.activities
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }
}

/// Create a test app over the given repository.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(repository: ActivityRepository) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        repository,
    });

    (create_router(state.clone()), state)
}

/// Serve a test app on an ephemeral loopback port.
/// Returns the API base URL (`http://127.0.0.1:<port>/api`).
#[allow(dead_code)]
pub async fn spawn_test_server(repository: ActivityRepository) -> String {
    let (app, _) = create_test_app(repository);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}/api", addr)
}
