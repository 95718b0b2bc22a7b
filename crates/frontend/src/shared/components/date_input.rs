use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` string, empty when unset
#[component]
pub fn DateInput(
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__group">
            {label.map(|l| view! { <span class="form__label">{l}</span> })}
            <input
                type="date"
                class="form__input"
                prop:value=value
                disabled=move || disabled.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
