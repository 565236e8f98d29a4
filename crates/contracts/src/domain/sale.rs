//! Продажи — legacy-вариант API (`/api/sales`).
//!
//! В отличие от остальных сущностей тип руды здесь передаётся именем,
//! а не id: так исторически устроен backend.

use serde::{Deserialize, Serialize};

pub const SALE_STATUSES: [&str; 3] = ["Оформлена", "Отгружена", "Списано"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub ore_type: String,
    #[serde(default)]
    pub buyer: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Тело `POST /api/sales`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleDto {
    pub ore_type: String,
    pub buyer: Option<String>,
    pub quantity: f64,
    pub status: String,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.ore_type.trim().is_empty() {
            return Err("Укажите тип руды".into());
        }
        if self.quantity <= 0.0 {
            return Err("Количество должно быть больше нуля".into());
        }
        Ok(())
    }
}

/// Тело `PUT /api/sales/:id` — меняется только статус.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleStatusDto {
    pub id: i64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_is_optional() {
        let sale: Sale = serde_json::from_str(
            r#"{"id":1,"ore_type":"Железная руда","quantity":100.0,"status":"Списано"}"#,
        )
        .unwrap();
        assert!(sale.buyer.is_none());
    }

    #[test]
    fn dto_requires_ore_type() {
        let dto = SaleDto {
            quantity: 50.0,
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
