use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
        }
    }
}

/// Button that swaps its content for a spinner while `busy` is set
#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    /// Shown instead of the children while busy, e.g. "Updating..."
    #[prop(optional, into)]
    busy_label: Option<String>,
    #[prop(optional, into)]
    busy: Signal<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    on_click: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let busy_label = busy_label.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <button
            type="button"
            class=variant.class()
            disabled=move || disabled.get() || busy.get()
            on:click=move |_| on_click.run(())
        >
            {move || {
                if busy.get() {
                    let label = busy_label.clone();
                    view! {
                        <span class="button__spinner"></span>
                        <span>{label}</span>
                    }.into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
