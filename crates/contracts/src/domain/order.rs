use serde::{Deserialize, Serialize};

/// Строка заказа: ссылка на партию руды плюс количество.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub ore_batch_id: i64,
    pub quantity: f64,
}

/// Заказ контрагента (`GET /api/orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub contractor_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    pub fn total_quantity(&self) -> f64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Тело `POST /api/orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDto {
    pub contractor_id: Option<i64>,
    pub lines: Vec<OrderLine>,
}

impl OrderDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.contractor_id.is_none() {
            return Err("Укажите контрагента".into());
        }
        if self.lines.is_empty() {
            return Err("Добавьте хотя бы одну строку заказа".into());
        }
        if self.lines.iter().any(|line| line.quantity <= 0.0) {
            return Err("Количество в каждой строке должно быть больше нуля".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_lines() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 10,
                "contractor_id": 2,
                "status": "Новый",
                "lines": [
                    {"ore_batch_id": 5, "quantity": 40.0},
                    {"ore_batch_id": 6, "quantity": 60.0}
                ],
                "created_at": "2025-10-11T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total_quantity(), 100.0);
    }

    #[test]
    fn dto_rejects_empty_lines() {
        let dto = OrderDto {
            contractor_id: Some(2),
            lines: vec![],
        };
        assert!(dto.validate().is_err());

        let dto = OrderDto {
            contractor_id: Some(2),
            lines: vec![OrderLine {
                ore_batch_id: 5,
                quantity: 0.0,
            }],
        };
        assert!(dto.validate().is_err());
    }
}
