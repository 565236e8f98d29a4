pub mod view_model;

use contracts::domain::ore_batch::OreBatch;
use contracts::reference::{ReferenceCategory, ReferenceItem, ReferenceSet};
use leptos::prelude::*;

use crate::refsync::{bind_selection, populate_selection, SyncContext};
use crate::shared::components::{Input, Select};
use crate::shared::dialog;
use crate::shared::fmt::{format_created_at, format_quantity};
use view_model::{OreBatchForm, PRIORITIES};

#[derive(Clone, Debug, PartialEq)]
struct OreBatchRow {
    ore_type: String,
    warehouse: String,
    quantity: String,
    unit: String,
    quality: String,
    priority: String,
    status: &'static str,
    critical: bool,
    created_at: String,
}

impl OreBatchRow {
    fn build(batch: &OreBatch, reference: &ReferenceSet) -> Self {
        Self {
            ore_type: reference.name_of(ReferenceCategory::OreTypes, batch.ore_type_id),
            warehouse: batch
                .warehouse_id
                .map(|id| reference.name_of(ReferenceCategory::Warehouses, id))
                .unwrap_or_else(|| "—".to_string()),
            quantity: format_quantity(batch.quantity),
            unit: batch
                .unit_id
                .and_then(|id| reference.find(ReferenceCategory::Units, id))
                .and_then(|unit| unit.symbol.clone())
                .unwrap_or_default(),
            quality: batch
                .quality
                .map(|q| format!("{}%", format_quantity(q)))
                .unwrap_or_else(|| "—".to_string()),
            priority: batch.priority.clone().unwrap_or_else(|| "—".to_string()),
            status: batch.status_text(),
            critical: batch.is_critical(),
            created_at: format_created_at(&batch.created_at),
        }
    }

    fn matches(&self, filter: &str) -> bool {
        [
            self.ore_type.as_str(),
            self.warehouse.as_str(),
            self.priority.as_str(),
            self.status,
        ]
        .iter()
        .any(|cell| cell.to_lowercase().contains(filter))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OreBatchPage() -> impl IntoView {
    let ctx = SyncContext::use_ctx();
    let form = OreBatchForm::new();

    let ore_type_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().ore_types,
            |item| item.id.to_string(),
            ReferenceItem::display_label,
        )
    });
    let warehouse_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().warehouses,
            |item| item.id.to_string(),
            |item| item.name.clone(),
        )
    });
    let unit_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().units,
            |item| item.id.to_string(),
            ReferenceItem::display_label,
        )
    });
    let priority_options =
        Signal::derive(move || populate_selection(&PRIORITIES, |p| p.to_string(), |p| p.to_string()));

    bind_selection(form.ore_type_id, ore_type_options);
    bind_selection(form.warehouse_id, warehouse_options);
    bind_selection(form.unit_id, unit_options);

    let save = move || {
        let dto = form.to_dto();
        if let Err(message) = dto.validate() {
            dialog::alert(&message);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::create_ore_batch(dto).await {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    form.reset();
                    ctx.load_ore_batches();
                }
                Err(e) => {
                    log::error!("Ошибка сохранения партии руды: {}", e);
                    dialog::alert(&format!("Ошибка: {}", e));
                }
            }
        });
    };

    let (search, set_search) = signal(String::new());
    let rows = Memo::new(move |_| {
        let filter = search.get().to_lowercase();
        let reference = ctx.reference.get();
        ctx.ore_batches
            .get()
            .iter()
            .map(|batch| OreBatchRow::build(batch, &reference))
            .filter(|row| filter.is_empty() || row.matches(&filter))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Партии руды"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| ctx.load_ore_batches()>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="form">
                <Select
                    label="Тип руды"
                    value=form.ore_type_id
                    options=ore_type_options
                    on_change=Callback::new(move |v| form.ore_type_id.set(v))
                />
                <Select
                    label="Склад"
                    value=form.warehouse_id
                    options=warehouse_options
                    on_change=Callback::new(move |v| form.warehouse_id.set(v))
                />
                <Select
                    label="Единица измерения"
                    value=form.unit_id
                    options=unit_options
                    on_change=Callback::new(move |v| form.unit_id.set(v))
                />
                <Input
                    label="Количество"
                    input_type="number"
                    value=form.quantity
                    on_input=Callback::new(move |v| form.quantity.set(v))
                />
                <Input
                    label="Качество, %"
                    input_type="number"
                    value=form.quality
                    on_input=Callback::new(move |v| form.quality.set(v))
                />
                <Select
                    label="Приоритет"
                    value=form.priority
                    options=priority_options
                    on_change=Callback::new(move |v| form.priority.set(v))
                />
                <button class="button button--primary" on:click=move |_| save()>
                    {"Добавить партию"}
                </button>
            </div>

            <Input
                placeholder="Поиск по таблице..."
                value=search
                on_input=Callback::new(move |v| set_search.set(v))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Тип руды"}</th>
                            <th class="table__header-cell">{"Склад"}</th>
                            <th class="table__header-cell">{"Количество"}</th>
                            <th class="table__header-cell">{"Качество"}</th>
                            <th class="table__header-cell">{"Приоритет"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                            <th class="table__header-cell">{"Создано"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| view! {
                            <tr class="table__row" class:table__row--critical=row.critical>
                                <td class="table__cell">{row.ore_type}</td>
                                <td class="table__cell">{row.warehouse}</td>
                                <td class="table__cell">{format!("{} {}", row.quantity, row.unit)}</td>
                                <td class="table__cell">{row.quality}</td>
                                <td class="table__cell">{row.priority}</td>
                                <td class="table__cell">{row.status}</td>
                                <td class="table__cell">{row.created_at}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
