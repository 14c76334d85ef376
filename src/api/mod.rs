//! # Webhook service client
//!
//! URL construction, a JSON fetch wrapper, and the payload types served by
//! the webhook delivery service.
//!
//! ## Endpoints used by the dashboard
//!
//! - `GET /health` - Any success means the service is operational
//! - `GET /status/stats` - [`SystemStats`]
//! - `GET /status/activity?limit=N` - Newest [`ActivityItem`]s
//!
//! ## Example
//!
//! ```no_run
//! use hookdash::api::{ApiClient, QueryParams, SystemStats};
//! use hookdash::config::ApiConfig;
//!
//! # async fn example() -> Result<(), hookdash::api::ApiError> {
//! let client = ApiClient::new(&ApiConfig::default())?;
//! let stats: SystemStats = client.get("/status/stats", &QueryParams::new()).await?;
//! println!("{} subscriptions", stats.total_subscriptions);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is an [`ApiError`] carrying a message. For non-2xx
//! responses the message is the `detail` field of a JSON body such as
//! `{"detail": "Subscription not found"}`, or `HTTP error: <code>`.

mod client;
mod error;
mod types;
mod url_builder;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use types::{format_timestamp, ActivityItem, ActivityType, SystemStats};
pub use url_builder::{build_api_url, QueryPair, QueryParams, QueryValue};

/// Service liveness endpoint
pub const HEALTH_PATH: &str = "/health";
/// Aggregate counters endpoint
pub const STATS_PATH: &str = "/status/stats";
/// Recent activity feed endpoint
pub const ACTIVITY_PATH: &str = "/status/activity";
