use serde::{Deserialize, Serialize};

/// Отгрузка со склада (`GET /api/shipments`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: i64,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub warehouse_id: i64,
    #[serde(default)]
    pub transport_id: Option<i64>,
    pub quantity: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Тело `POST /api/shipments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentDto {
    pub order_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub transport_id: Option<i64>,
    pub quantity: f64,
}

impl ShipmentDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.warehouse_id.is_none() {
            return Err("Укажите склад отгрузки".into());
        }
        if self.quantity <= 0.0 {
            return Err("Количество должно быть больше нуля".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_requires_warehouse() {
        let dto = ShipmentDto {
            quantity: 10.0,
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = ShipmentDto {
            warehouse_id: Some(3),
            quantity: 10.0,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
