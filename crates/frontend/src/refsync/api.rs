use contracts::reference::ReferenceSet;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Загружает весь набор справочников одним запросом.
pub async fn fetch_reference_data() -> Result<ReferenceSet, String> {
    let response = Request::get(&api_url("/api/reference-data"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ReferenceSet>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
