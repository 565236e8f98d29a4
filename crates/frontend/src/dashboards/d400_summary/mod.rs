//! Сводка по складу: агрегаты считаются на клиенте из уже загруженных
//! списков, отдельного endpoint у сводки нет.

use contracts::domain::equipment::EquipmentItem;
use contracts::domain::ore_batch::OreBatch;
use contracts::domain::shipment::Shipment;
use contracts::reference::{ReferenceCategory, ReferenceSet};
use leptos::prelude::*;

use crate::refsync::SyncContext;
use crate::shared::fmt::format_quantity;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTotals {
    pub on_hand: f64,
    pub shipped: f64,
    pub critical_batches: usize,
    /// "Категория: количество" через запятую, в порядке появления.
    pub inventory: String,
}

impl SummaryTotals {
    pub fn build(
        batches: &[OreBatch],
        equipment: &[EquipmentItem],
        shipments: &[Shipment],
        reference: &ReferenceSet,
    ) -> Self {
        let mut inventory: Vec<(String, i64)> = Vec::new();
        for item in equipment {
            let name = reference.name_of(ReferenceCategory::EquipmentCategories, item.category_id);
            match inventory.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, total)) => *total += item.quantity,
                None => inventory.push((name, item.quantity)),
            }
        }

        Self {
            on_hand: batches.iter().map(|b| b.quantity).sum(),
            shipped: shipments.iter().map(|s| s.quantity).sum(),
            critical_batches: batches.iter().filter(|b| b.is_critical()).count(),
            inventory: inventory
                .into_iter()
                .map(|(name, total)| format!("{}: {}", name, total))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SummaryPage() -> impl IntoView {
    let ctx = SyncContext::use_ctx();

    let totals = Memo::new(move |_| {
        SummaryTotals::build(
            &ctx.ore_batches.get(),
            &ctx.equipment.get(),
            &ctx.shipments.get(),
            &ctx.reference.get(),
        )
    });
    let orders_count = Memo::new(move |_| ctx.orders.get().len());

    let critical = Memo::new(move |_| {
        let reference = ctx.reference.get();
        ctx.ore_batches
            .get()
            .iter()
            .filter(|batch| batch.is_critical())
            .map(|batch| {
                (
                    batch.id,
                    reference.name_of(ReferenceCategory::OreTypes, batch.ore_type_id),
                    format_quantity(batch.quantity),
                )
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Сводка"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| {
                        ctx.load_reference_data();
                        ctx.load_transactional();
                    }>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="stats">
                <div class="stat-card">
                    <div class="stat-card__value">{move || format_quantity(totals.get().on_hand)}</div>
                    <div class="stat-card__label">{"Руды на складах"}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__value">{move || format_quantity(totals.get().shipped)}</div>
                    <div class="stat-card__label">{"Отгружено"}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__value">{move || orders_count.get()}</div>
                    <div class="stat-card__label">{"Заказов"}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__value">{move || totals.get().critical_batches}</div>
                    <div class="stat-card__label">{"Критических партий"}</div>
                </div>
            </div>

            <p class="summary__inventory">
                {move || {
                    let inventory = totals.get().inventory;
                    if inventory.is_empty() {
                        "Оборудование: нет данных".to_string()
                    } else {
                        format!("Оборудование: {}", inventory)
                    }
                }}
            </p>

            <h2 class="header__subtitle">{"Партии с критическим остатком"}</h2>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"№"}</th>
                            <th class="table__header-cell">{"Тип руды"}</th>
                            <th class="table__header-cell">{"Остаток"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || critical.get().into_iter().map(|(id, ore_type, quantity)| view! {
                            <tr class="table__row table__row--critical">
                                <td class="table__cell">{id}</td>
                                <td class="table__cell">{ore_type}</td>
                                <td class="table__cell">{quantity}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reference::ReferenceItem;

    fn batch(id: i64, quantity: f64) -> OreBatch {
        OreBatch {
            id,
            ore_type_id: 7,
            warehouse_id: None,
            unit_id: None,
            quantity,
            quality: None,
            priority: None,
            created_at: String::new(),
        }
    }

    fn equipment_item(category_id: i64, quantity: i64) -> EquipmentItem {
        EquipmentItem {
            id: 0,
            category_id,
            warehouse_id: None,
            quantity,
            serial_number: None,
            service_life: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn totals_are_summed() {
        let reference = ReferenceSet {
            equipment_categories: vec![ReferenceItem {
                id: 4,
                name: "Буры".to_string(),
                symbol: None,
                location: None,
                kind: None,
            }],
            ..Default::default()
        };
        let batches = vec![batch(1, 150.0), batch(2, 50.0)];
        let equipment = vec![equipment_item(4, 3), equipment_item(4, 2)];

        let totals = SummaryTotals::build(&batches, &equipment, &[], &reference);
        assert_eq!(totals.on_hand, 200.0);
        assert_eq!(totals.critical_batches, 1);
        assert_eq!(totals.inventory, "Буры: 5");
    }

    #[test]
    fn unknown_category_shows_dash() {
        let equipment = vec![equipment_item(99, 1)];
        let totals = SummaryTotals::build(&[], &equipment, &[], &ReferenceSet::default());
        assert_eq!(totals.inventory, "—: 1");
    }
}
