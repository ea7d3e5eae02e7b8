use gloo_net::http::Request;
use log::{debug, error};
use serde::de::DeserializeOwned;

use crate::config;

/// GETs `{backend}/api/{path}` and decodes a JSON array.
///
/// Failures are flattened into a message; callers render an empty
/// collection in that case.
pub async fn fetch_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let url = format!("{}/api/{}", config::get_backend_url(), path);
    let response = Request::get(&url).send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        format!("Request failed: {}", e)
    })?;

    if !response.ok() {
        error!("{} answered with status {}", url, response.status());
        return Err(format!("Failed to load {}", path));
    }

    let items = response.json::<Vec<T>>().await.map_err(|e| {
        error!("Failed to parse {} response: {}", path, e);
        format!("Failed to parse {}", path)
    })?;
    debug!("Loaded {} {}", items.len(), path);
    Ok(items)
}
