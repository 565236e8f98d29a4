use contracts::api::MutationResponse;
use contracts::domain::order::{Order, OrderDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/api/orders"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_order(dto: OrderDto) -> Result<MutationResponse, String> {
    let response = Request::post(&api_url("/api/orders"))
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
