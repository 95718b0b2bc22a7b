use leptos::prelude::*;

/// Select over a closed vocabulary of `(code, label)` pairs
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: Option<String>,
    /// Currently selected code
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__group">
            {label.map(|l| view! { <span class="form__label">{l}</span> })}
            <select
                class="form__select"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(code, text)| {
                        view! {
                            <option value=code selected=move || value.get() == code>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
