use leptos::prelude::*;

/// KPI card; `value` is `None` while the series is loading
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Accent modifier, e.g. "cyan" -> `stat-card--cyan`
    #[prop(optional)]
    accent: Option<&'static str>,
    #[prop(optional, into)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = match accent {
        Some(accent) => format!("stat-card stat-card--{}", accent),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
