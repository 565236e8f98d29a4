//! Транзакционные сущности склада.
//!
//! Все они ссылаются на элементы справочников по id и перечитываются
//! целиком после каждой мутации.

pub mod equipment;
pub mod order;
pub mod ore_batch;
pub mod sale;
pub mod shipment;

use chrono::{DateTime, Utc};

/// Разбор метки времени `created_at`, как её отдаёт backend (RFC 3339).
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_created_at("2025-10-11T12:30:00+03:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-10-11T09:30:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_created_at("вчера").is_none());
        assert!(parse_created_at("").is_none());
    }
}
