use leptos::prelude::*;

/// Select component with label support
///
/// Опции перерисовываются целиком при каждой смене набора, поэтому
/// дубликаты значений из источника допустимы. Первой опцией набор
/// обязан содержать заглушку "Не выбрано".
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(into)]
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=disabled
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| {
                            let val_clone = val.clone();
                            let is_selected = move || value.get() == val_clone;
                            view! {
                                <option value=val selected=is_selected>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
