//! Fetch and url command implementations

use crate::api::{ApiClient, QueryParams, RequestOptions};
use crate::cli::{FetchArgs, UrlArgs};
use crate::config::DashboardConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;

/// Parse `Name: value` header arguments.
///
/// Returns `None` when no headers were given so the client applies its JSON
/// default.
fn parse_headers(raw: &[String]) -> Result<Option<HeaderMap>, Box<dyn std::error::Error>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let mut headers = HeaderMap::new();
    for entry in raw {
        let (name, value) = entry
            .split_once(':')
            .ok_or_else(|| format!("Invalid header '{}': expected 'Name: value'", entry))?;
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| format!("Invalid header name '{}': {}", name.trim(), e))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|e| format!("Invalid header value for '{}': {}", name, e))?;
        headers.append(name, value);
    }

    Ok(Some(headers))
}

fn parse_method(raw: &str) -> Result<Method, Box<dyn std::error::Error>> {
    Method::from_bytes(raw.to_uppercase().as_bytes())
        .map_err(|_| format!("Invalid HTTP method: {}", raw).into())
}

/// Handle fetch command
pub async fn handle_fetch(
    args: &FetchArgs,
    config: &DashboardConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.api)?;
    let query: QueryParams = args.query.iter().cloned().collect();

    let options = RequestOptions {
        method: parse_method(&args.method)?,
        headers: parse_headers(&args.headers)?,
        body: args.data.clone(),
    };

    let value: Value = client.fetch(&args.path, options, &query).await?;

    if args.compact {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Handle url command
pub fn handle_url(args: &UrlArgs, config: &DashboardConfig) -> String {
    let query: QueryParams = args.query.iter().cloned().collect();
    crate::api::build_api_url(&config.api.base_url, &args.path, &query)
}
