//! Чистая логика выбора: построение опций и сверка прежнего значения.
//!
//! Не зависит от DOM — проверяется обычными unit-тестами.

use leptos::prelude::*;

/// Значение опции "Не выбрано". Всегда первая опция любого связанного списка.
pub const SENTINEL_VALUE: &str = "";

pub const SENTINEL_LABEL: &str = "Не выбрано";

/// Строит опции `(значение, подпись)` для выпадающего списка:
/// сначала опция-заглушка, затем по одной опции на элемент в исходном
/// порядке. Дубликаты из источника сохраняются как есть.
pub fn populate_selection<T>(
    items: &[T],
    id_of: impl Fn(&T) -> String,
    label_of: impl Fn(&T) -> String,
) -> Vec<(String, String)> {
    let mut options = Vec::with_capacity(items.len() + 1);
    options.push((SENTINEL_VALUE.to_string(), SENTINEL_LABEL.to_string()));
    for item in items {
        options.push((id_of(item), label_of(item)));
    }
    options
}

/// Сверяет прежний выбор с новым набором опций.
///
/// Значение, присутствующее в наборе, сохраняется; отсутствующее молча
/// заменяется заглушкой. Потеря выбора здесь намеренно наблюдаема.
pub fn reconcile_selection(previous: &str, options: &[(String, String)]) -> String {
    if previous != SENTINEL_VALUE && options.iter().any(|(value, _)| value == previous) {
        previous.to_string()
    } else {
        SENTINEL_VALUE.to_string()
    }
}

/// Сверка для составных строк (строки заказа с собственным селектором):
/// каждая строка сверяется независимо, чужие строки не затрагиваются.
pub fn reconcile_rows(previous: &[String], options: &[(String, String)]) -> Vec<String> {
    previous
        .iter()
        .map(|value| reconcile_selection(value, options))
        .collect()
}

/// id из значения контрола. Заглушка и нечисловой мусор дают `None`.
pub fn selected_id(value: &str) -> Option<i64> {
    if value == SENTINEL_VALUE {
        return None;
    }
    value.parse().ok()
}

/// Привязывает значение контрола к реактивному набору опций: при каждой
/// смене набора прежний выбор сверяется заново. Записи идут только при
/// фактической смене значения, чтобы не будить подписчиков впустую.
pub fn bind_selection(value: RwSignal<String>, options: Signal<Vec<(String, String)>>) {
    Effect::new(move |_| {
        let opts = options.get();
        let current = value.get_untracked();
        let next = reconcile_selection(&current, &opts);
        if next != current {
            value.set(next);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reference::ReferenceItem;

    fn unit(id: i64, name: &str, symbol: &str) -> ReferenceItem {
        ReferenceItem {
            id,
            name: name.to_string(),
            symbol: Some(symbol.to_string()),
            location: None,
            kind: None,
        }
    }

    #[test]
    fn options_are_sentinel_plus_items_in_order() {
        let units = vec![unit(1, "т", "t"), unit(2, "кг", "kg")];
        let options = populate_selection(
            &units,
            |u| u.id.to_string(),
            ReferenceItem::display_label,
        );
        assert_eq!(
            options,
            vec![
                ("".to_string(), "Не выбрано".to_string()),
                ("1".to_string(), "т (t)".to_string()),
                ("2".to_string(), "кг (kg)".to_string()),
            ]
        );
    }

    #[test]
    fn single_unit_payload_gives_two_options() {
        let units = vec![unit(1, "t", "t")];
        let options = populate_selection(
            &units,
            |u| u.id.to_string(),
            ReferenceItem::display_label,
        );
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].0, SENTINEL_VALUE);
        assert_eq!(options[1].1, "t (t)");
    }

    #[test]
    fn duplicates_from_source_are_kept() {
        let units = vec![unit(1, "т", "t"), unit(1, "т", "t")];
        let options = populate_selection(&units, |u| u.id.to_string(), |u| u.name.clone());
        assert_eq!(options.len(), 3);
        assert_eq!(options[1], options[2]);
    }

    #[test]
    fn present_value_is_preserved() {
        let options = vec![
            ("".to_string(), "Не выбрано".to_string()),
            ("5".to_string(), "Партия 5".to_string()),
        ];
        assert_eq!(reconcile_selection("5", &options), "5");
    }

    #[test]
    fn missing_value_falls_back_to_sentinel() {
        let options = vec![
            ("".to_string(), "Не выбрано".to_string()),
            ("1".to_string(), "Партия 1".to_string()),
        ];
        assert_eq!(reconcile_selection("5", &options), SENTINEL_VALUE);
    }

    #[test]
    fn sentinel_stays_sentinel() {
        let options = vec![("".to_string(), "Не выбрано".to_string())];
        assert_eq!(reconcile_selection("", &options), SENTINEL_VALUE);
    }

    #[test]
    fn selected_id_treats_sentinel_as_none() {
        assert_eq!(selected_id(""), None);
        assert_eq!(selected_id("abc"), None);
        assert_eq!(selected_id("42"), Some(42));
    }

    #[test]
    fn rows_are_reconciled_independently() {
        let options = vec![
            ("".to_string(), "Не выбрано".to_string()),
            ("2".to_string(), "Партия 2".to_string()),
        ];
        let rows = vec!["2".to_string(), "5".to_string(), "".to_string()];
        assert_eq!(
            reconcile_rows(&rows, &options),
            vec!["2".to_string(), "".to_string(), "".to_string()]
        );
    }
}
