//! Status command implementation

use crate::api::ApiClient;
use crate::cli::output::{format_dashboard_json, format_dashboard_pretty};
use crate::cli::StatusArgs;
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;

/// Handle status command
///
/// Section failures are rendered inline and never fail the command.
pub async fn handle_status(
    args: &StatusArgs,
    config: &DashboardConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.api)?;
    let limit = args.limit.unwrap_or(config.api.activity_limit);

    let mut dashboard = Dashboard::new();
    dashboard
        .mount_with(&client, limit, |section, _| {
            tracing::info!(section = ?section, "Section loaded");
        })
        .await;

    if args.json {
        Ok(format_dashboard_json(client.base_url(), &dashboard)?)
    } else {
        Ok(format_dashboard_pretty(client.base_url(), &dashboard))
    }
}
