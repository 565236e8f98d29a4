pub mod view_model;

use contracts::domain::sale::{Sale, SALE_STATUSES};
use contracts::reference::ReferenceItem;
use leptos::prelude::*;

use crate::refsync::{bind_selection, populate_selection, SyncContext};
use crate::shared::components::{Input, Select};
use crate::shared::dialog;
use crate::shared::fmt::{format_created_at, format_quantity};
use view_model::SaleForm;

#[component]
#[allow(non_snake_case)]
pub fn SalePage() -> impl IntoView {
    let ctx = SyncContext::use_ctx();
    let form = SaleForm::new();

    let (sales, set_sales) = signal::<Vec<Sale>>(Vec::new());
    let (selected, set_selected) = signal::<Option<i64>>(None);
    let status_value = RwSignal::new(String::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::fetch_sales().await {
                Ok(items) => set_sales.set(items),
                Err(e) => log::error!("Ошибка загрузки продаж: {}", e),
            }
        });
    };

    let ore_type_options = Signal::derive(move || {
        populate_selection(
            &ctx.reference.get().ore_types,
            |item| item.id.to_string(),
            ReferenceItem::display_label,
        )
    });
    let status_options = Signal::derive(move || {
        populate_selection(&SALE_STATUSES, |s| s.to_string(), |s| s.to_string())
    });

    bind_selection(form.ore_type_id, ore_type_options);

    // Списание подтверждается до валидации, как и в старой версии.
    let confirm_sale = move || {
        if !dialog::confirm("Подтвердить списание руды?") {
            return;
        }
        let dto = form.to_dto(&ctx.reference.get_untracked());
        if let Err(message) = dto.validate() {
            dialog::alert(&message);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::create_sale(dto).await {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    form.reset();
                    fetch();
                }
                Err(e) => {
                    log::error!("Ошибка списания: {}", e);
                    dialog::alert(&format!("Ошибка: {}", e));
                }
            }
        });
    };

    let update_status = move || {
        let Some(id) = selected.get_untracked() else {
            dialog::alert("Выберите продажу в таблице");
            return;
        };
        let status = status_value.get_untracked();
        if status.is_empty() {
            dialog::alert("Выберите статус");
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match super::api::update_sale_status(id, status).await {
                Ok(resp) => {
                    dialog::alert(&resp.message);
                    fetch();
                }
                Err(e) => {
                    log::error!("Ошибка обновления статуса: {}", e);
                    dialog::alert(&format!("Ошибка: {}", e));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Продажи"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
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
                <Input
                    label="Покупатель"
                    value=form.buyer
                    on_input=Callback::new(move |v| form.buyer.set(v))
                />
                <Input
                    label="Количество"
                    input_type="number"
                    value=form.quantity
                    on_input=Callback::new(move |v| form.quantity.set(v))
                />
                <button class="button button--primary" on:click=move |_| confirm_sale()>
                    {"Подтвердить списание"}
                </button>
            </div>

            <div class="form">
                <Select
                    label="Статус выбранной продажи"
                    value=status_value
                    options=status_options
                    on_change=Callback::new(move |v| status_value.set(v))
                />
                <button class="button button--secondary" on:click=move |_| update_status()>
                    {"Обновить статус"}
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Дата"}</th>
                            <th class="table__header-cell">{"Покупатель"}</th>
                            <th class="table__header-cell">{"Тип руды"}</th>
                            <th class="table__header-cell">{"Количество"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sales.get().into_iter().map(|sale| {
                            let id = sale.id;
                            let is_selected = move || selected.get() == Some(id);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=is_selected
                                    on:click=move |_| set_selected.set(Some(id))
                                >
                                    <td class="table__cell">{format_created_at(&sale.created_at)}</td>
                                    <td class="table__cell">{sale.buyer.clone().unwrap_or_else(|| "Не указан".to_string())}</td>
                                    <td class="table__cell">{sale.ore_type.clone()}</td>
                                    <td class="table__cell">{format_quantity(sale.quantity)}</td>
                                    <td class="table__cell">{sale.status.clone()}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
