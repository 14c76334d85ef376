//! Config command handlers

use crate::cli::ConfigInitArgs;
use crate::config::ApiConfig;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../hookdash.example.toml");

/// Render the example config, pointing it at `api_url` when given.
fn render_config(api_url: Option<&str>) -> String {
    match api_url {
        Some(url) => EXAMPLE_CONFIG.replacen(
            &format!("base_url = \"{}\"", ApiConfig::default().base_url),
            &format!("base_url = \"{}\"", url),
            1,
        ),
        None => EXAMPLE_CONFIG.to_string(),
    }
}

/// Handle `hookdash config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, render_config(args.api_url.as_deref()))?;
    tracing::debug!(path = %args.output.display(), "Wrote config file");

    Ok(format!(
        "✓ Configuration file created: {}\n  Edit api.base_url to point hookdash at your webhook service.",
        args.output.display()
    ))
}
