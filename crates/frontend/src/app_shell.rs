//! Application Shell - корневой layout приложения
//!
//! Header + Sidebar + активная страница. Активная страница хранится в
//! [`AppGlobalContext`] и синхронизируется с `?active=` в URL.

use crate::dashboards::d400_summary::SummaryPage;
use crate::domain::a001_ore_batch::ui::OreBatchPage;
use crate::domain::a002_equipment::ui::EquipmentPage;
use crate::domain::a003_order::ui::OrderPage;
use crate::domain::a004_shipment::ui::ShipmentPage;
use crate::domain::a005_sale::ui::SalePage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::refsync::SyncContext;
use crate::system::logs::LogsPage;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let shell = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let ctx = SyncContext::use_ctx();

    shell.init_router_integration();

    // Справочники грузятся один раз на старте, до транзакционных списков.
    ctx.bootstrap();

    // Переключение страницы перечитывает её данные, как переключение
    // вкладок в исходном приложении. Запросы не отменяются; опоздавший
    // ответ просто применится последним.
    Effect::new(move |_| match shell.active_page.get().as_str() {
        "a001_ore_batch" => ctx.load_ore_batches(),
        "a002_equipment" => ctx.load_equipment(),
        "a003_order" => {
            ctx.load_ore_batches();
            ctx.load_orders();
        }
        "a004_shipment" => {
            ctx.load_orders();
            ctx.load_shipments();
        }
        "d400_summary" => ctx.load_transactional(),
        _ => {}
    });

    view! {
        <div class="app">
            <Header />
            <div class="app__body">
                <Sidebar />
                <main class="app__content">
                    {move || match shell.active_page.get().as_str() {
                        "a001_ore_batch" => view! { <OreBatchPage /> }.into_any(),
                        "a002_equipment" => view! { <EquipmentPage /> }.into_any(),
                        "a003_order" => view! { <OrderPage /> }.into_any(),
                        "a004_shipment" => view! { <ShipmentPage /> }.into_any(),
                        "a005_sale" => view! { <SalePage /> }.into_any(),
                        "logs" => view! { <LogsPage /> }.into_any(),
                        _ => view! { <SummaryPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
