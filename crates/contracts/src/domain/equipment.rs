use serde::{Deserialize, Serialize};

/// Единица оборудования (`GET /api/equipment`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
    pub quantity: i64,
    #[serde(default)]
    pub serial_number: Option<String>,
    /// Срок службы в месяцах.
    #[serde(default)]
    pub service_life: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

/// Тело `POST /api/equipment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentDto {
    pub category_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub quantity: i64,
    pub serial_number: Option<String>,
    pub service_life: Option<i64>,
}

impl EquipmentDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.category_id.is_none() {
            return Err("Укажите категорию оборудования".into());
        }
        if self.quantity <= 0 {
            return Err("Количество должно быть больше нуля".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_may_be_absent() {
        let item: EquipmentItem =
            serde_json::from_str(r#"{"id":2,"category_id":4,"quantity":10}"#).unwrap();
        assert!(item.serial_number.is_none());
        assert!(item.service_life.is_none());
    }

    #[test]
    fn dto_requires_category() {
        let dto = EquipmentDto {
            quantity: 5,
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
