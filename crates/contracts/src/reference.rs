//! Справочные данные (единицы, склады, типы руды и т.д.)
//!
//! Весь набор приходит одним payload из `GET /api/reference-data` и
//! заменяется целиком при каждом обновлении. Инкрементального слияния нет.

use serde::{Deserialize, Serialize};

/// Элемент справочника: непрозрачный id плюс отображаемые атрибуты.
///
/// Неизменяем после загрузки; следующая загрузка заменяет весь набор.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,
}

impl ReferenceItem {
    /// Подпись для выпадающего списка: "т (t)" если есть символ, иначе имя.
    pub fn display_label(&self) -> String {
        match self.symbol.as_deref() {
            Some(s) if !s.is_empty() => format!("{} ({})", self.name, s),
            _ => self.name.clone(),
        }
    }
}

/// Категория справочника. Порядок полей в [`ReferenceSet`] совпадает
/// с порядком вариантов здесь.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCategory {
    Units,
    Warehouses,
    OreTypes,
    EquipmentCategories,
    Contractors,
    Transport,
}

/// Полный набор справочников, как его отдаёт `GET /api/reference-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    #[serde(default)]
    pub units: Vec<ReferenceItem>,
    #[serde(default)]
    pub warehouses: Vec<ReferenceItem>,
    #[serde(default)]
    pub ore_types: Vec<ReferenceItem>,
    #[serde(default)]
    pub equipment_categories: Vec<ReferenceItem>,
    #[serde(default)]
    pub contractors: Vec<ReferenceItem>,
    #[serde(default)]
    pub transport: Vec<ReferenceItem>,
}

impl ReferenceSet {
    pub fn items(&self, category: ReferenceCategory) -> &[ReferenceItem] {
        match category {
            ReferenceCategory::Units => &self.units,
            ReferenceCategory::Warehouses => &self.warehouses,
            ReferenceCategory::OreTypes => &self.ore_types,
            ReferenceCategory::EquipmentCategories => &self.equipment_categories,
            ReferenceCategory::Contractors => &self.contractors,
            ReferenceCategory::Transport => &self.transport,
        }
    }

    pub fn find(&self, category: ReferenceCategory, id: i64) -> Option<&ReferenceItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Имя элемента по id, либо "—" если id в текущем наборе отсутствует.
    pub fn name_of(&self, category: ReferenceCategory, id: i64) -> String {
        self.find(category, id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| "—".to_string())
    }

    /// Подпись элемента по id (имя + символ), либо "—".
    pub fn label_of(&self, category: ReferenceCategory, id: i64) -> String {
        self.find(category, id)
            .map(ReferenceItem::display_label)
            .unwrap_or_else(|| "—".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_payload() {
        let json = r#"{
            "units": [{"id": 1, "name": "т", "symbol": "t"}],
            "warehouses": [{"id": 3, "name": "Склад 1", "location": "Завод 1"}],
            "ore_types": [{"id": 7, "name": "Железная руда", "type": "магнетит"}],
            "equipment_categories": [],
            "contractors": [],
            "transport": []
        }"#;
        let set: ReferenceSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.units.len(), 1);
        assert_eq!(set.units[0].display_label(), "т (t)");
        assert_eq!(set.warehouses[0].location.as_deref(), Some("Завод 1"));
        assert_eq!(set.ore_types[0].kind.as_deref(), Some("магнетит"));
        assert!(set.contractors.is_empty());
    }

    #[test]
    fn missing_categories_default_to_empty() {
        let set: ReferenceSet = serde_json::from_str(r#"{"units": []}"#).unwrap();
        assert!(set.transport.is_empty());
    }

    #[test]
    fn name_lookup_falls_back_to_dash() {
        let set = ReferenceSet {
            warehouses: vec![ReferenceItem {
                id: 3,
                name: "Склад 1".into(),
                symbol: None,
                location: None,
                kind: None,
            }],
            ..Default::default()
        };
        assert_eq!(set.name_of(ReferenceCategory::Warehouses, 3), "Склад 1");
        assert_eq!(set.name_of(ReferenceCategory::Warehouses, 99), "—");
    }
}
