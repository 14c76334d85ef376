//! Payloads returned by the webhook service status endpoints.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Aggregate counters from `GET /status/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub total_subscriptions: u64,
    pub recent_success_count: u64,
    pub recent_failed_count: u64,
}

/// Kind of event in the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    SubscriptionCreated,
    DeliveryAttempt,
    /// Tag not known to this client
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::SubscriptionCreated => "subscription",
            ActivityType::DeliveryAttempt => "delivery",
            ActivityType::Other => "event",
        }
    }
}

/// One entry from `GET /status/activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Subscription ID or delivery ID, depending on `kind`
    pub id: String,
    /// ISO 8601 timestamp as sent by the service
    pub timestamp: String,
    /// e.g. "Target: http://..." or "Attempt #1 - Success (200)"
    pub details: String,
}

impl ActivityItem {
    /// Timestamp in local time, or the raw string when it cannot be parsed.
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an ISO 8601 timestamp in local time.
///
/// Timestamps with an offset are converted; timestamps without one
/// (`2024-05-01T12:00:00.123456`) are taken as already local.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}
