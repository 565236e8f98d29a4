//! Sidebar component with grouped menu items

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (key, label)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Дашборды",
            items: vec![("d400_summary", "Сводка")],
        },
        MenuGroup {
            label: "Склад",
            items: vec![
                ("a001_ore_batch", "Партии руды"),
                ("a002_equipment", "Оборудование"),
            ],
        },
        MenuGroup {
            label: "Документы",
            items: vec![
                ("a003_order", "Заказы"),
                ("a004_shipment", "Отгрузки"),
                ("a005_sale", "Продажи"),
            ],
        },
        MenuGroup {
            label: "Система",
            items: vec![("logs", "Журнал действий")],
        },
    ]
}

pub fn page_label(key: &str) -> &'static str {
    for group in menu_groups() {
        for (item_key, label) in group.items {
            if item_key == key {
                return label;
            }
        }
    }
    "Сводка"
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || !shell.left_open.get()>
            {menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(key, label)| {
                                    let is_active =
                                        move || shell.active_page.get() == key;
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=is_active
                                            on:click=move |_| shell.open_page(key)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
