//! Status dashboard for the webhook service
//!
//! Mounting a [`Dashboard`] fires three independent requests:
//! - `GET /health` - service liveness
//! - `GET /status/stats` - subscription and delivery counters
//! - `GET /status/activity?limit=N` - newest activity items
//!
//! Requests run concurrently and each one settles only its own section, so a
//! failing or slow endpoint never affects the other two.

pub mod state;

pub use state::{HealthStatus, SectionState};

use crate::api::{
    ActivityItem, ApiClient, ApiError, QueryParams, SystemStats, ACTIVITY_PATH, HEALTH_PATH,
    STATS_PATH,
};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use serde_json::Value;

const HEALTH_FALLBACK: &str = "Could not connect to backend.";
const STATS_FALLBACK: &str = "Could not load system statistics.";
const ACTIVITY_FALLBACK: &str = "Could not load recent activity.";

/// Dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Health,
    Stats,
    Activity,
}

/// A settled section, produced by one of the three fetches.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Health(SectionState<HealthStatus>),
    Stats(SectionState<Option<SystemStats>>),
    Activity(SectionState<Vec<ActivityItem>>),
}

impl SectionUpdate {
    pub fn section(&self) -> Section {
        match self {
            SectionUpdate::Health(_) => Section::Health,
            SectionUpdate::Stats(_) => Section::Stats,
            SectionUpdate::Activity(_) => Section::Activity,
        }
    }
}

/// View state of the whole dashboard.
///
/// `stats` succeeds with `None` when the service returns an empty payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub health: SectionState<HealthStatus>,
    pub stats: SectionState<Option<SystemStats>>,
    pub activity: SectionState<Vec<ActivityItem>>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one settled section. Other sections are left untouched.
    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Health(state) => self.health = state,
            SectionUpdate::Stats(state) => self.stats = state,
            SectionUpdate::Activity(state) => self.activity = state,
        }
    }

    /// True once every section has succeeded or failed.
    pub fn is_settled(&self) -> bool {
        self.health.is_settled() && self.stats.is_settled() && self.activity.is_settled()
    }

    /// Load all three sections concurrently.
    pub async fn mount(&mut self, client: &ApiClient, activity_limit: u32) {
        self.mount_with(client, activity_limit, |_, _| {}).await;
    }

    /// Like [`Dashboard::mount`], calling `on_update` after each section
    /// settles, in completion order.
    pub async fn mount_with<F>(
        &mut self,
        client: &ApiClient,
        activity_limit: u32,
        mut on_update: F,
    ) where
        F: FnMut(Section, &Dashboard),
    {
        self.health = SectionState::Loading;
        self.stats = SectionState::Loading;
        self.activity = SectionState::Loading;

        let mut pending: FuturesUnordered<BoxFuture<'_, SectionUpdate>> =
            FuturesUnordered::new();
        pending.push(check_health(client).map(SectionUpdate::Health).boxed());
        pending.push(fetch_stats(client).map(SectionUpdate::Stats).boxed());
        pending.push(
            fetch_activity(client, activity_limit)
                .map(SectionUpdate::Activity)
                .boxed(),
        );

        while let Some(update) = pending.next().await {
            let section = update.section();
            tracing::debug!(section = ?section, "Dashboard section settled");
            self.apply(update);
            on_update(section, self);
        }
    }
}

/// Probe `GET /health`. Any successful response means operational.
pub async fn check_health(client: &ApiClient) -> SectionState<HealthStatus> {
    tracing::debug!(url = %client.url(HEALTH_PATH, &QueryParams::new()), "Fetching health");

    match client.get::<Value>(HEALTH_PATH, &QueryParams::new()).await {
        Ok(_) => SectionState::Success(HealthStatus::Operational),
        Err(e) => {
            tracing::warn!(error = %e, "Health check error");
            SectionState::Error(failure_message(&e, HEALTH_FALLBACK))
        }
    }
}

/// Load `GET /status/stats`.
pub async fn fetch_stats(client: &ApiClient) -> SectionState<Option<SystemStats>> {
    tracing::debug!(url = %client.url(STATS_PATH, &QueryParams::new()), "Fetching stats");

    let result = client
        .get::<Value>(STATS_PATH, &QueryParams::new())
        .await
        .and_then(stats_from_payload);

    match result {
        Ok(stats) => SectionState::Success(stats),
        Err(e) => {
            tracing::warn!(error = %e, "Stats fetch error");
            SectionState::Error(failure_message(&e, STATS_FALLBACK))
        }
    }
}

/// Load the newest `limit` items from `GET /status/activity`.
pub async fn fetch_activity(client: &ApiClient, limit: u32) -> SectionState<Vec<ActivityItem>> {
    let query = QueryParams::new().with("limit", limit);
    tracing::debug!(url = %client.url(ACTIVITY_PATH, &query), "Fetching activity");

    let result = client
        .get::<Value>(ACTIVITY_PATH, &query)
        .await
        .and_then(activity_from_payload);

    match result {
        Ok(items) => SectionState::Success(items),
        Err(e) => {
            tracing::warn!(error = %e, "Activity fetch error");
            SectionState::Error(failure_message(&e, ACTIVITY_FALLBACK))
        }
    }
}

fn failure_message(err: &ApiError, fallback: &str) -> String {
    if err.message().trim().is_empty() {
        fallback.to_string()
    } else {
        err.message().to_string()
    }
}

/// `null` and `{}` (the 204 result) carry no data.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn stats_from_payload(value: Value) -> Result<Option<SystemStats>, ApiError> {
    if is_empty_payload(&value) {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ApiError::new(format!("Invalid stats payload: {}", e)))
}

fn activity_from_payload(value: Value) -> Result<Vec<ActivityItem>, ApiError> {
    if is_empty_payload(&value) {
        return Ok(Vec::new());
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::new(format!("Invalid activity payload: {}", e)))
}
