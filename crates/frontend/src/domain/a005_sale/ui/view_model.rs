use contracts::domain::sale::SaleDto;
use contracts::reference::{ReferenceCategory, ReferenceSet};
use leptos::prelude::*;

use crate::refsync::selected_id;

/// Форма списания. Тип руды выбирается по id справочника, но legacy-API
/// принимает имя, поэтому DTO собирается через обратный поиск.
#[derive(Clone, Copy)]
pub struct SaleForm {
    pub ore_type_id: RwSignal<String>,
    pub buyer: RwSignal<String>,
    pub quantity: RwSignal<String>,
}

impl SaleForm {
    pub fn new() -> Self {
        Self {
            ore_type_id: RwSignal::new(String::new()),
            buyer: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
        }
    }

    pub fn to_dto(&self, reference: &ReferenceSet) -> SaleDto {
        let ore_type = selected_id(&self.ore_type_id.get_untracked())
            .and_then(|id| reference.find(ReferenceCategory::OreTypes, id))
            .map(|item| item.name.clone())
            .unwrap_or_default();
        let buyer = self.buyer.get_untracked();
        SaleDto {
            ore_type,
            buyer: (!buyer.trim().is_empty()).then_some(buyer),
            quantity: self
                .quantity
                .get_untracked()
                .trim()
                .parse()
                .unwrap_or(0.0),
            status: "Списано".to_string(),
        }
    }

    pub fn reset(&self) {
        self.ore_type_id.set(String::new());
        self.buyer.set(String::new());
        self.quantity.set(String::new());
    }
}

impl Default for SaleForm {
    fn default() -> Self {
        Self::new()
    }
}
