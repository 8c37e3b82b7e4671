// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model shared by the store, the API client and the server.

use crate::time_utils::{parse_activity_date, truncate_fraction};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A scheduled activity (meetup, outing, event).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client-app/src/app/models/generated/")
)]
pub struct Activity {
    /// Unique identifier (client generated)
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Start date/time (ISO 8601, zone-less once cached)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub venue: String,
}

impl Activity {
    /// Strip fractional seconds and anything after them from `date`.
    pub fn normalize_date(&mut self) {
        let truncated = truncate_fraction(&self.date).len();
        self.date.truncate(truncated);
    }

    /// Consuming variant of [`Activity::normalize_date`].
    pub fn with_normalized_date(mut self) -> Self {
        self.normalize_date();
        self
    }

    /// Parsed `date`, if it is in a recognised format.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_activity_date(&self.date)
    }

    /// Ascending by parsed date. Unparseable dates sort last; ties break on id.
    pub fn cmp_by_date(&self, other: &Self) -> Ordering {
        match (self.parsed_date(), other.parsed_date()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.id.cmp(&other.id))
    }
}

/// Partial update body for `PUT /api/activities/{id}`.
///
/// Absent fields keep their stored value. Any `id` in the body is ignored in
/// favour of the path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client-app/src/app/models/generated/")
)]
pub struct ActivityUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub city: Option<String>,
    pub venue: Option<String>,
}

impl ActivityUpdate {
    /// Apply the present fields onto `activity`.
    pub fn apply_to(self, activity: &mut Activity) {
        if let Some(title) = self.title {
            activity.title = title;
        }
        if let Some(description) = self.description {
            activity.description = description;
        }
        if let Some(category) = self.category {
            activity.category = category;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }
        if let Some(city) = self.city {
            activity.city = city;
        }
        if let Some(venue) = self.venue {
            activity.venue = venue;
        }
    }
}
