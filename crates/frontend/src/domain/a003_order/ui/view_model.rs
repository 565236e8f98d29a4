use contracts::domain::order::{OrderDto, OrderLine};
use leptos::prelude::*;

use crate::refsync::selection::reconcile_rows;
use crate::refsync::selected_id;

/// Строка заказа в форме. Выбор партии в каждой строке живёт независимо
/// от остальных строк.
#[derive(Clone, Copy)]
pub struct OrderLineDraft {
    pub key: usize,
    pub ore_batch_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
}

#[derive(Clone, Copy)]
pub struct OrderForm {
    pub contractor_id: RwSignal<String>,
    pub lines: RwSignal<Vec<OrderLineDraft>>,
    next_key: RwSignal<usize>,
}

impl OrderForm {
    pub fn new() -> Self {
        let form = Self {
            contractor_id: RwSignal::new(String::new()),
            lines: RwSignal::new(Vec::new()),
            next_key: RwSignal::new(0),
        };
        form.add_line();
        form
    }

    pub fn add_line(&self) {
        let key = self.next_key.get_untracked();
        self.next_key.set(key + 1);
        self.lines.update(|lines| {
            lines.push(OrderLineDraft {
                key,
                ore_batch_id: RwSignal::new(String::new()),
                quantity: RwSignal::new(String::new()),
            })
        });
    }

    pub fn remove_line(&self, key: usize) {
        self.lines.update(|lines| lines.retain(|line| line.key != key));
    }

    /// Повторная сверка каждой строки с актуальным списком партий.
    /// Записи идут только в строки, чьё значение пропало из списка;
    /// выбор остальных строк не затрагивается.
    pub fn refresh_dependent_rows(&self, options: &[(String, String)]) {
        let lines = self.lines.get_untracked();
        let previous: Vec<String> = lines
            .iter()
            .map(|line| line.ore_batch_id.get_untracked())
            .collect();
        for (line, value) in lines.iter().zip(reconcile_rows(&previous, options)) {
            if line.ore_batch_id.get_untracked() != value {
                line.ore_batch_id.set(value);
            }
        }
    }

    /// Строки без выбранной партии в DTO не попадают.
    pub fn to_dto(&self) -> OrderDto {
        OrderDto {
            contractor_id: selected_id(&self.contractor_id.get_untracked()),
            lines: self
                .lines
                .get_untracked()
                .iter()
                .filter_map(|line| {
                    let ore_batch_id = selected_id(&line.ore_batch_id.get_untracked())?;
                    Some(OrderLine {
                        ore_batch_id,
                        quantity: line.quantity.get_untracked().trim().parse().unwrap_or(0.0),
                    })
                })
                .collect(),
        }
    }

    pub fn reset(&self) {
        self.contractor_id.set(String::new());
        self.lines.set(Vec::new());
        self.add_line();
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}
