use serde::{Deserialize, Serialize};

/// Партия руды на складе (`GET /api/ore-batches`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OreBatch {
    pub id: i64,
    pub ore_type_id: i64,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
    #[serde(default)]
    pub unit_id: Option<i64>,
    pub quantity: f64,
    #[serde(default)]
    pub quality: Option<f64>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl OreBatch {
    /// Остаток ниже 100 единиц считается критическим.
    pub fn is_critical(&self) -> bool {
        self.quantity < 100.0
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_critical() {
            "Критический уровень"
        } else {
            "В наличии"
        }
    }
}

/// Тело `POST /api/ore-batches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OreBatchDto {
    pub ore_type_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub quantity: f64,
    pub quality: Option<f64>,
    pub priority: Option<String>,
}

impl OreBatchDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.ore_type_id.is_none() {
            return Err("Укажите тип руды".into());
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
    fn critical_threshold() {
        let mut batch: OreBatch = serde_json::from_str(
            r#"{"id":1,"ore_type_id":7,"quantity":99.5,"created_at":"2025-10-11T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(batch.is_critical());
        assert_eq!(batch.status_text(), "Критический уровень");

        batch.quantity = 100.0;
        assert_eq!(batch.status_text(), "В наличии");
    }

    #[test]
    fn dto_requires_type_and_quantity() {
        let dto = OreBatchDto::default();
        assert!(dto.validate().is_err());

        let dto = OreBatchDto {
            ore_type_id: Some(7),
            quantity: 250.0,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
