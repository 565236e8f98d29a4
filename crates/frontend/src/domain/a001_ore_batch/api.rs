use contracts::api::MutationResponse;
use contracts::domain::ore_batch::{OreBatch, OreBatchDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_ore_batches() -> Result<Vec<OreBatch>, String> {
    let response = Request::get(&api_url("/api/ore-batches"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<OreBatch>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_ore_batch(dto: OreBatchDto) -> Result<MutationResponse, String> {
    let response = Request::post(&api_url("/api/ore-batches"))
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<MutationResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
