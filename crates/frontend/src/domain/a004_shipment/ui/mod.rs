pub mod view_model;

use contracts::domain::shipment::Shipment;
use contracts::reference::{ReferenceCategory, ReferenceSet};
use leptos::prelude::*;

use crate::refsync::{bind_selection, populate_selection, SyncContext};
use crate::shared::components::{Input, Select};
use crate::shared::dialog;
use crate::shared::fmt::{format_created_at, format_quantity};
use view_model::ShipmentForm;

#[derive(Clone, Debug, PartialEq)]
struct ShipmentRow {
    id: i64,
    order: String,
    warehouse: String,
    transport: String,
    quantity: String,
    status: String,
    created_at: String,
}

impl ShipmentRow {
    fn build(shipment: &Shipment, reference: &ReferenceSet) -> Self {
        Self {
            id: shipment.id,
            order: shipment
                .order_id
                .map(|id| format!("Заказ №{}", id))
                .unwrap_or_else(|| "—".to_string()),
            warehouse: reference.name_of(ReferenceCategory::Warehouses, shipment.warehouse_id),
            transport: shipment
                .transport_id
                .map(|id| reference.name_of(ReferenceCategory::Transport, id))
                .unwrap_or_else(|| "—".to_string()),
            quantity: format_quantity(shipment.quantity),
            status: if shipment.status.is_empty() {
                "—".to_string()
            } else {
                shipment.status.clone()
            },
            created_at: format_created_at(&shipment.created_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ShipmentPage() -> impl IntoView {
    let ctx = SyncContext::use_ctx();
    let form = ShipmentForm::new();

    // Заказ выбирается из транзакционного списка, склад и транспорт —
    // из справочников.
    let order_options = Signal::derive(move || {
        populate_selection(
            &ctx.orders.get(),
            |order| order.id.to_string(),
            |order| format!("Заказ №{}", order.id),
        )
    });
    let warehouse_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().warehouses,
            |item| item.id.to_string(),
            |item| item.name.clone(),
        )
    });
    let transport_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().transport,
            |item| item.id.to_string(),
            |item| item.name.clone(),
        )
    });

    bind_selection(form.order_id, order_options);
    bind_selection(form.warehouse_id, warehouse_options);
    bind_selection(form.transport_id, transport_options);

    let save = move || {
        let dto = form.to_dto();
        if let Err(message) = dto.validate() {
            dialog::alert(&message);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::create_shipment(dto).await {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    form.reset();
                    ctx.load_shipments();
                }
                Err(e) => {
                    log::error!("Ошибка сохранения отгрузки: {}", e);
                    dialog::alert(&format!("Ошибка: {}", e));
                }
            }
        });
    };

    let rows = Memo::new(move |_| {
        let reference = ctx.reference.get();
        ctx.shipments
            .get()
            .iter()
            .map(|shipment| ShipmentRow::build(shipment, &reference))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Отгрузки"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| {
                        ctx.load_orders();
                        ctx.load_shipments();
                    }>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="form">
                <Select
                    label="Заказ"
                    value=form.order_id
                    options=order_options
                    on_change=Callback::new(move |v| form.order_id.set(v))
                />
                <Select
                    label="Склад"
                    value=form.warehouse_id
                    options=warehouse_options
                    on_change=Callback::new(move |v| form.warehouse_id.set(v))
                />
                <Select
                    label="Транспорт"
                    value=form.transport_id
                    options=transport_options
                    on_change=Callback::new(move |v| form.transport_id.set(v))
                />
                <Input
                    label="Количество"
                    input_type="number"
                    value=form.quantity
                    on_input=Callback::new(move |v| form.quantity.set(v))
                />
                <button class="button button--primary" on:click=move |_| save()>
                    {"Оформить отгрузку"}
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"№"}</th>
                            <th class="table__header-cell">{"Заказ"}</th>
                            <th class="table__header-cell">{"Склад"}</th>
                            <th class="table__header-cell">{"Транспорт"}</th>
                            <th class="table__header-cell">{"Количество"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                            <th class="table__header-cell">{"Создана"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.id}</td>
                                <td class="table__cell">{row.order}</td>
                                <td class="table__cell">{row.warehouse}</td>
                                <td class="table__cell">{row.transport}</td>
                                <td class="table__cell">{row.quantity}</td>
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
