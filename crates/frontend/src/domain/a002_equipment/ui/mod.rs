pub mod view_model;

use contracts::domain::equipment::EquipmentItem;
use contracts::reference::{ReferenceCategory, ReferenceSet};
use leptos::prelude::*;

use crate::refsync::{bind_selection, populate_selection, SyncContext};
use crate::shared::components::{Input, Select};
use crate::shared::dialog;
use crate::shared::fmt::format_created_at;
use view_model::EquipmentForm;

#[derive(Clone, Debug, PartialEq)]
struct EquipmentRow {
    category: String,
    warehouse: String,
    quantity: i64,
    serial_number: String,
    service_life: String,
    created_at: String,
}

impl EquipmentRow {
    fn build(item: &EquipmentItem, reference: &ReferenceSet) -> Self {
        Self {
            category: reference.name_of(ReferenceCategory::EquipmentCategories, item.category_id),
            warehouse: item
                .warehouse_id
                .map(|id| reference.name_of(ReferenceCategory::Warehouses, id))
                .unwrap_or_else(|| "—".to_string()),
            quantity: item.quantity,
            serial_number: item
                .serial_number
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            service_life: item
                .service_life
                .map(|months| format!("{} мес.", months))
                .unwrap_or_else(|| "—".to_string()),
            created_at: format_created_at(&item.created_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EquipmentPage() -> impl IntoView {
    let ctx = SyncContext::use_ctx();
    let form = EquipmentForm::new();

    let category_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().equipment_categories,
            |item| item.id.to_string(),
            |item| item.name.clone(),
        )
    });
    let warehouse_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().warehouses,
            |item| item.id.to_string(),
            |item| item.name.clone(),
        )
    });

    bind_selection(form.category_id, category_options);
    bind_selection(form.warehouse_id, warehouse_options);

    let save = move || {
        let dto = form.to_dto();
        if let Err(message) = dto.validate() {
            dialog::alert(&message);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::create_equipment(dto).await {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    form.reset();
                    ctx.load_equipment();
                }
                Err(e) => {
                    log::error!("Ошибка сохранения оборудования: {}", e);
                    dialog::alert(&format!("Ошибка: {}", e));
                }
            }
        });
    };

    let rows = Memo::new(move |_| {
        let reference = ctx.reference.get();
        ctx.equipment
            .get()
            .iter()
            .map(|item| EquipmentRow::build(item, &reference))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Оборудование"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| ctx.load_equipment()>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="form">
                <Select
                    label="Категория"
                    value=form.category_id
                    options=category_options
                    on_change=Callback::new(move |v| form.category_id.set(v))
                />
                <Select
                    label="Склад"
                    value=form.warehouse_id
                    options=warehouse_options
                    on_change=Callback::new(move |v| form.warehouse_id.set(v))
                />
                <Input
                    label="Количество"
                    input_type="number"
                    value=form.quantity
                    on_input=Callback::new(move |v| form.quantity.set(v))
                />
                <Input
                    label="Серийный номер"
                    value=form.serial_number
                    on_input=Callback::new(move |v| form.serial_number.set(v))
                />
                <Input
                    label="Срок службы, мес."
                    input_type="number"
                    value=form.service_life
                    on_input=Callback::new(move |v| form.service_life.set(v))
                />
                <button class="button button--primary" on:click=move |_| save()>
                    {"Добавить оборудование"}
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Категория"}</th>
                            <th class="table__header-cell">{"Склад"}</th>
                            <th class="table__header-cell">{"Количество"}</th>
                            <th class="table__header-cell">{"Серийный номер"}</th>
                            <th class="table__header-cell">{"Срок службы"}</th>
                            <th class="table__header-cell">{"Создано"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.category}</td>
                                <td class="table__cell">{row.warehouse}</td>
                                <td class="table__cell">{row.quantity}</td>
                                <td class="table__cell">{row.serial_number}</td>
                                <td class="table__cell">{row.service_life}</td>
                                <td class="table__cell">{row.created_at}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
