//! Утилиты форматирования значений для таблиц.

use contracts::domain::parse_created_at;

/// RFC 3339 из backend -> "ДД.ММ.ГГГГ ЧЧ:ММ". Нечитаемая метка
/// возвращается как есть.
pub fn format_created_at(raw: &str) -> String {
    match parse_created_at(raw) {
        Some(dt) => format_timestamp(dt),
        None => raw.to_string(),
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Количество без хвостовых нулей: 100.0 -> "100", 99.5 -> "99.5".
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_created_at() {
        assert_eq!(
            format_created_at("2025-10-11T12:30:00+00:00"),
            "11.10.2025 12:30"
        );
    }

    #[test]
    fn keeps_unparsable_timestamp_as_is() {
        assert_eq!(format_created_at("2025-10-11"), "2025-10-11");
    }

    #[test]
    fn formats_quantities() {
        assert_eq!(format_quantity(100.0), "100");
        assert_eq!(format_quantity(99.5), "99.5");
    }
}
