use contracts::domain::shipment::ShipmentDto;
use leptos::prelude::*;

use crate::refsync::selected_id;

#[derive(Clone, Copy)]
pub struct ShipmentForm {
    pub order_id: RwSignal<String>,
    pub warehouse_id: RwSignal<String>,
    pub transport_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
}

impl ShipmentForm {
    pub fn new() -> Self {
        Self {
            order_id: RwSignal::new(String::new()),
            warehouse_id: RwSignal::new(String::new()),
            transport_id: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
        }
    }

    pub fn to_dto(&self) -> ShipmentDto {
        ShipmentDto {
            order_id: selected_id(&self.order_id.get_untracked()),
            warehouse_id: selected_id(&self.warehouse_id.get_untracked()),
            transport_id: selected_id(&self.transport_id.get_untracked()),
            quantity: self
                .quantity
                .get_untracked()
                .trim()
                .parse()
                .unwrap_or(0.0),
        }
    }

    pub fn reset(&self) {
        self.order_id.set(String::new());
        self.warehouse_id.set(String::new());
        self.transport_id.set(String::new());
        self.quantity.set(String::new());
    }
}

impl Default for ShipmentForm {
    fn default() -> Self {
        Self::new()
    }
}
