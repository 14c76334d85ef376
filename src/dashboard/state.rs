//! Per-section view state

use serde::{Deserialize, Serialize};

/// Lifecycle of one dashboard section.
///
/// A section is in exactly one state; "loading and errored" cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SectionState<T> {
    /// Nothing requested yet
    Idle,
    /// Request in flight
    Loading,
    /// Request failed with a display message
    Error(String),
    /// Request succeeded
    Success(T),
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        SectionState::Idle
    }
}

impl<T> SectionState<T> {
    pub fn is_settled(&self) -> bool {
        matches!(self, SectionState::Error(_) | SectionState::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            SectionState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SectionState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of the liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Operational,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Operational => "Operational",
        }
    }
}
