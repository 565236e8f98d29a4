//! Legacy-endpoints `/api/sales`.

use contracts::api::MutationResponse;
use contracts::domain::sale::{Sale, SaleDto, SaleStatusDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_sales() -> Result<Vec<Sale>, String> {
    let response = Request::get(&api_url("/api/sales"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Sale>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_sale(dto: SaleDto) -> Result<MutationResponse, String> {
    let response = Request::post(&api_url("/api/sales"))
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

pub async fn update_sale_status(id: i64, status: String) -> Result<MutationResponse, String> {
    let dto = SaleStatusDto { id, status };
    let response = Request::put(&api_url(&format!("/api/sales/{}", id)))
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
