pub mod view_model;

use contracts::domain::order::Order;
use contracts::reference::{ReferenceCategory, ReferenceSet};
use leptos::prelude::*;

use crate::refsync::{bind_selection, populate_selection, SyncContext};
use crate::shared::components::{Input, Select};
use crate::shared::dialog;
use crate::shared::fmt::{format_created_at, format_quantity};
use view_model::{OrderForm, OrderLineDraft};

#[derive(Clone, Debug, PartialEq)]
struct OrderRow {
    id: i64,
    contractor: String,
    lines: usize,
    total: String,
    status: String,
    created_at: String,
}

impl OrderRow {
    fn build(order: &Order, reference: &ReferenceSet) -> Self {
        Self {
            id: order.id,
            contractor: reference.name_of(ReferenceCategory::Contractors, order.contractor_id),
            lines: order.lines.len(),
            total: format_quantity(order.total_quantity()),
            status: if order.status.is_empty() {
                "—".to_string()
            } else {
                order.status.clone()
            },
            created_at: format_created_at(&order.created_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderPage() -> impl IntoView {
    let ctx = SyncContext::use_ctx();
    let form = OrderForm::new();

    let contractor_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().contractors,
            |item| item.id.to_string(),
            |item| item.name.clone(),
        )
    });
    // Опции строк заказа строятся из транзакционного списка партий,
    // а не из справочников.
    let batch_options = Signal::derive(move || {
        let reference = ctx.reference.get();
        populate_selection(
            &ctx.ore_batches.get(),
            |batch| batch.id.to_string(),
            |batch| {
                format!(
                    "Партия №{} — {}",
                    batch.id,
                    reference.name_of(ReferenceCategory::OreTypes, batch.ore_type_id)
                )
            },
        )
    });

    bind_selection(form.contractor_id, contractor_options);

    // Каждое обновление списка партий заново сверяет все строки формы.
    Effect::new(move |_| {
        let options = batch_options.get();
        form.refresh_dependent_rows(&options);
    });

    let save = move || {
        let dto = form.to_dto();
        if let Err(message) = dto.validate() {
            dialog::alert(&message);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::create_order(dto).await {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    form.reset();
                    ctx.load_orders();
                }
                Err(e) => {
                    log::error!("Ошибка сохранения заказа: {}", e);
                    dialog::alert(&format!("Ошибка: {}", e));
                }
            }
        });
    };

    let rows = Memo::new(move |_| {
        let reference = ctx.reference.get();
        ctx.orders
            .get()
            .iter()
            .map(|order| OrderRow::build(order, &reference))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Заказы"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| {
                        ctx.load_ore_batches();
                        ctx.load_orders();
                    }>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="form">
                <Select
                    label="Контрагент"
                    value=form.contractor_id
                    options=contractor_options
                    on_change=Callback::new(move |v| form.contractor_id.set(v))
                />

                <div class="form__lines">
                    <For
                        each=move || form.lines.get()
                        key=|line| line.key
                        children=move |line: OrderLineDraft| {
                            view! {
                                <div class="form__line">
                                    <Select
                                        label="Партия руды"
                                        value=line.ore_batch_id
                                        options=batch_options
                                        on_change=Callback::new(move |v| line.ore_batch_id.set(v))
                                    />
                                    <Input
                                        label="Количество"
                                        input_type="number"
                                        value=line.quantity
                                        on_input=Callback::new(move |v| line.quantity.set(v))
                                    />
                                    <button
                                        class="button button--ghost"
                                        on:click=move |_| form.remove_line(line.key)
                                    >
                                        {"Убрать"}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="form__actions">
                    <button class="button button--secondary" on:click=move |_| form.add_line()>
                        {"Добавить строку"}
                    </button>
                    <button class="button button--primary" on:click=move |_| save()>
                        {"Создать заказ"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"№"}</th>
                            <th class="table__header-cell">{"Контрагент"}</th>
                            <th class="table__header-cell">{"Строк"}</th>
                            <th class="table__header-cell">{"Всего"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                            <th class="table__header-cell">{"Создан"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.id}</td>
                                <td class="table__cell">{row.contractor}</td>
                                <td class="table__cell">{row.lines}</td>
                                <td class="table__cell">{row.total}</td>
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
