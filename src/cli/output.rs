//! Output formatting helpers for CLI commands

use crate::api::{ActivityItem, SystemStats};
use crate::dashboard::{Dashboard, HealthStatus, SectionState};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::fmt::Write;

/// JSON envelope for `status --json`
#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    pub api_url: &'a str,
    #[serde(flatten)]
    pub dashboard: &'a Dashboard,
}

/// Format the dashboard as JSON
pub fn format_dashboard_json(api_url: &str, dashboard: &Dashboard) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DashboardView { api_url, dashboard })
}

/// Format the dashboard as pretty text
pub fn format_dashboard_pretty(api_url: &str, dashboard: &Dashboard) -> String {
    let mut output = String::new();

    writeln!(output, "{}", "Webhook Delivery Service".bold()).unwrap();
    writeln!(output, "{}", api_url.dimmed()).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{}", "System Status".bold()).unwrap();
    writeln!(output, "  {}", format_health(&dashboard.health)).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{}", "Statistics".bold()).unwrap();
    writeln!(output, "{}", format_stats(&dashboard.stats)).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{}", "Recent Activity".bold()).unwrap();
    writeln!(output, "{}", format_activity(&dashboard.activity)).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{}", "Quick Actions".bold()).unwrap();
    writeln!(
        output,
        "  Create New Subscription: hookdash fetch /subscriptions -X POST -d '<json>'"
    )
    .unwrap();
    write!(output, "  View Subscriptions:      hookdash fetch /subscriptions").unwrap();

    output
}

/// One-line health summary
pub fn format_health(state: &SectionState<HealthStatus>) -> String {
    match state {
        SectionState::Idle => "Not checked".dimmed().to_string(),
        SectionState::Loading => "Checking...".dimmed().to_string(),
        SectionState::Error(message) => {
            format!("{} {} ({})", "✗".red(), "Error".red().bold(), message.red())
        }
        SectionState::Success(status) => {
            format!("{} {}", "✓".green(), status.label().green().bold())
        }
    }
}

/// Statistics section body
pub fn format_stats(state: &SectionState<Option<SystemStats>>) -> String {
    match state {
        SectionState::Idle | SectionState::Loading => {
            format!("  {}", "Loading Stats...".dimmed())
        }
        SectionState::Error(message) => {
            format!("  {}", format!("Error loading stats: {}", message).red())
        }
        SectionState::Success(None) => format!("  {}", "No stats available.".dimmed()),
        SectionState::Success(Some(stats)) => format_stats_table(stats),
    }
}

/// Format stats as a table
pub fn format_stats_table(stats: &SystemStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Active Subscriptions",
        "Recent Successes",
        "Recent Failures",
    ]);
    table.add_row(vec![
        Cell::new(stats.total_subscriptions),
        Cell::new(stats.recent_success_count.to_string().green()),
        Cell::new(stats.recent_failed_count.to_string().red()),
    ]);

    table.to_string()
}

/// Recent activity section body
pub fn format_activity(state: &SectionState<Vec<ActivityItem>>) -> String {
    match state {
        SectionState::Idle | SectionState::Loading => {
            format!("  {}", "Loading Activity...".dimmed())
        }
        SectionState::Error(message) => {
            format!("  {}", format!("Error loading activity: {}", message).red())
        }
        SectionState::Success(items) if items.is_empty() => {
            format!("  {}", "No recent activity found.".dimmed())
        }
        SectionState::Success(items) => format_activity_table(items),
    }
}

/// Format activity items as a table, in the order the service returned them
pub fn format_activity_table(items: &[ActivityItem]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Type", "ID", "Details"]);

    for item in items {
        table.add_row(vec![
            Cell::new(item.formatted_timestamp()),
            Cell::new(item.kind.label()),
            Cell::new(&item.id),
            Cell::new(&item.details),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ActivityType;

    fn create_test_stats() -> SystemStats {
        SystemStats {
            total_subscriptions: 12,
            recent_success_count: 340,
            recent_failed_count: 7,
        }
    }

    fn create_test_item() -> ActivityItem {
        ActivityItem {
            kind: ActivityType::DeliveryAttempt,
            id: "del-981".to_string(),
            timestamp: "2024-05-01T12:00:00Z".to_string(),
            details: "Attempt #2 - Failed (503)".to_string(),
        }
    }

    fn settled_dashboard() -> Dashboard {
        Dashboard {
            health: SectionState::Success(HealthStatus::Operational),
            stats: SectionState::Success(Some(create_test_stats())),
            activity: SectionState::Success(vec![create_test_item()]),
        }
    }

    #[test]
    fn test_format_health_states() {
        assert!(format_health(&SectionState::Loading).contains("Checking..."));
        assert!(format_health(&SectionState::Success(HealthStatus::Operational))
            .contains("Operational"));

        let failed = format_health(&SectionState::Error("HTTP error: 502".to_string()));
        assert!(failed.contains("Error"));
        assert!(failed.contains("HTTP error: 502"));
    }

    #[test]
    fn test_format_stats_table() {
        let output = format_stats(&SectionState::Success(Some(create_test_stats())));
        assert!(output.contains("Active Subscriptions"));
        assert!(output.contains("12"));
        assert!(output.contains("340"));
    }

    #[test]
    fn test_format_stats_fallbacks() {
        assert!(format_stats(&SectionState::Loading).contains("Loading Stats..."));
        assert!(format_stats(&SectionState::Success(None)).contains("No stats available."));
        assert!(format_stats(&SectionState::Error("timeout".to_string()))
            .contains("Error loading stats: timeout"));
    }

    #[test]
    fn test_format_activity_table() {
        let output = format_activity(&SectionState::Success(vec![create_test_item()]));
        assert!(output.contains("del-981"));
        assert!(output.contains("Attempt #2 - Failed (503)"));
        assert!(output.contains("delivery"));
    }

    #[test]
    fn test_format_activity_fallbacks() {
        assert!(format_activity(&SectionState::Loading).contains("Loading Activity..."));
        assert!(format_activity(&SectionState::Success(vec![]))
            .contains("No recent activity found."));
        assert!(format_activity(&SectionState::Error("boom".to_string()))
            .contains("Error loading activity: boom"));
    }

    #[test]
    fn test_format_dashboard_pretty_sections() {
        let output = format_dashboard_pretty("http://localhost:8000", &settled_dashboard());
        assert!(output.contains("System Status"));
        assert!(output.contains("Statistics"));
        assert!(output.contains("Recent Activity"));
        assert!(output.contains("http://localhost:8000"));
        assert!(output.contains("hookdash fetch /subscriptions"));
    }

    #[test]
    fn test_format_dashboard_json_valid() {
        let output = format_dashboard_json("http://localhost:8000", &settled_dashboard()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["api_url"], "http://localhost:8000");
        assert_eq!(parsed["health"]["state"], "success");
        assert_eq!(parsed["stats"]["data"]["totalSubscriptions"], 12);
        assert_eq!(parsed["activity"]["data"][0]["type"], "delivery_attempt");
    }
}
