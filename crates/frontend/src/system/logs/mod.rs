use contracts::system::LogEntry;
use gloo_net::http::Request;
use leptos::prelude::*;

use crate::shared::api_utils::api_url;

async fn fetch_logs() -> Result<Vec<LogEntry>, String> {
    let response = Request::get(&api_url("/api/logs"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<LogEntry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[component]
#[allow(non_snake_case)]
pub fn LogsPage() -> impl IntoView {
    let (entries, set_entries) = signal::<Vec<LogEntry>>(Vec::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_logs().await {
                Ok(items) => set_entries.set(items),
                Err(e) => log::error!("Ошибка загрузки логов: {}", e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Журнал действий"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Дата"}</th>
                            <th class="table__header-cell">{"Пользователь"}</th>
                            <th class="table__header-cell">{"Действие"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || entries.get().into_iter().map(|entry| view! {
                            <tr class="table__row">
                                <td class="table__cell">{entry.date}</td>
                                <td class="table__cell">{entry.user}</td>
                                <td class="table__cell">{entry.action}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
