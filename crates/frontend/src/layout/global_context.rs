use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    active: Option<String>,
}

/// Глобальное состояние оболочки: активная страница и видимость сайдбара.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new("d400_summary".to_string()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_page(&self, key: &str) {
        self.active_page.set(key.to_string());
    }

    pub fn toggle_sidebar(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Синхронизация активной страницы с `?active=...` в URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Ok(query) = serde_qs::from_str::<PageQuery>(search.trim_start_matches('?')) {
            if let Some(active) = query.active {
                if !active.is_empty() {
                    self.active_page.set(active);
                }
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let query = serde_qs::to_string(&PageQuery {
                active: Some(this.active_page.get()),
            })
            .unwrap_or_default();
            let new_url = format!("?{}", query);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
