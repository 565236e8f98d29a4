use contracts::api::MutationResponse;
use contracts::domain::equipment::{EquipmentDto, EquipmentItem};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_equipment() -> Result<Vec<EquipmentItem>, String> {
    let response = Request::get(&api_url("/api/equipment"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<EquipmentItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_equipment(dto: EquipmentDto) -> Result<MutationResponse, String> {
    let response = Request::post(&api_url("/api/equipment"))
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
