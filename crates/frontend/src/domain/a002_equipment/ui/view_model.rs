use contracts::domain::equipment::EquipmentDto;
use leptos::prelude::*;

use crate::refsync::selected_id;

#[derive(Clone, Copy)]
pub struct EquipmentForm {
    pub category_id: RwSignal<String>,
    pub warehouse_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub serial_number: RwSignal<String>,
    pub service_life: RwSignal<String>,
}

impl EquipmentForm {
    pub fn new() -> Self {
        Self {
            category_id: RwSignal::new(String::new()),
            warehouse_id: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            serial_number: RwSignal::new(String::new()),
            service_life: RwSignal::new(String::new()),
        }
    }

    pub fn to_dto(&self) -> EquipmentDto {
        let serial = self.serial_number.get_untracked();
        EquipmentDto {
            category_id: selected_id(&self.category_id.get_untracked()),
            warehouse_id: selected_id(&self.warehouse_id.get_untracked()),
            quantity: self.quantity.get_untracked().trim().parse().unwrap_or(0),
            serial_number: (!serial.trim().is_empty()).then_some(serial),
            service_life: self.service_life.get_untracked().trim().parse().ok(),
        }
    }

    pub fn reset(&self) {
        self.category_id.set(String::new());
        self.warehouse_id.set(String::new());
        self.quantity.set(String::new());
        self.serial_number.set(String::new());
        self.service_life.set(String::new());
    }
}

impl Default for EquipmentForm {
    fn default() -> Self {
        Self::new()
    }
}
