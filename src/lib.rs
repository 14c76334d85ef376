//! hookdash - status dashboard and HTTP client for a webhook delivery service
//!
//! The delivery engine itself (subscriptions, delivery attempts, retries)
//! runs in a separate service; this crate only calls its read endpoints and
//! renders the results.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
