use contracts::domain::ore_batch::OreBatchDto;
use leptos::prelude::*;

use crate::refsync::selected_id;

pub const PRIORITIES: [&str; 3] = ["Низкий", "Средний", "Высокий"];

/// Состояние формы новой партии: все поля хранятся строками, как их
/// отдают контролы; разбор происходит при сборке DTO.
#[derive(Clone, Copy)]
pub struct OreBatchForm {
    pub ore_type_id: RwSignal<String>,
    pub warehouse_id: RwSignal<String>,
    pub unit_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub quality: RwSignal<String>,
    pub priority: RwSignal<String>,
}

impl OreBatchForm {
    pub fn new() -> Self {
        Self {
            ore_type_id: RwSignal::new(String::new()),
            warehouse_id: RwSignal::new(String::new()),
            unit_id: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            quality: RwSignal::new(String::new()),
            priority: RwSignal::new(String::new()),
        }
    }

    pub fn to_dto(&self) -> OreBatchDto {
        let priority = self.priority.get_untracked();
        OreBatchDto {
            ore_type_id: selected_id(&self.ore_type_id.get_untracked()),
            warehouse_id: selected_id(&self.warehouse_id.get_untracked()),
            unit_id: selected_id(&self.unit_id.get_untracked()),
            quantity: self
                .quantity
                .get_untracked()
                .trim()
                .parse()
                .unwrap_or(0.0),
            quality: self.quality.get_untracked().trim().parse().ok(),
            priority: (!priority.is_empty()).then_some(priority),
        }
    }

    pub fn reset(&self) {
        self.ore_type_id.set(String::new());
        self.warehouse_id.set(String::new());
        self.unit_id.set(String::new());
        self.quantity.set(String::new());
        self.quality.set(String::new());
        self.priority.set(String::new());
    }
}

impl Default for OreBatchForm {
    fn default() -> Self {
        Self::new()
    }
}
