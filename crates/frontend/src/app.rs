use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::refsync::SyncContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Оболочка и контекст синхронизации раздаются всему приложению.
    provide_context(AppGlobalContext::new());
    provide_context(SyncContext::new());

    view! {
        <AppShell />
    }
}
