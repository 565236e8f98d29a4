use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::page_label;
use leptos::prelude::*;
use web_sys::window;

fn toggle_theme() {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.class_list().toggle("dark");
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let shell = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header class="topbar">
            <button
                class="button button--ghost topbar__burger"
                on:click=move |_| shell.toggle_sidebar()
            >
                {"☰"}
            </button>
            <span class="topbar__title">{"Управление складом руды"}</span>
            <span class="topbar__page">
                {move || page_label(&shell.active_page.get())}
            </span>
            <button
                class="button button--ghost topbar__theme"
                on:click=move |_| toggle_theme()
            >
                {"Тема"}
            </button>
        </header>
    }
}
