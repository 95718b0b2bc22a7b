use contracts::dashboards::d100_revenue_overview::FilterState;
use contracts::enums::{ProductCategory, Region};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_revenue_overview::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Button, ButtonVariant, Select};
use crate::shared::config::get_config;
use crate::shared::load_guard::RequestGeneration;

fn region_options() -> Vec<(&'static str, &'static str)> {
    Region::all()
        .into_iter()
        .map(|r| (r.code(), r.display_name()))
        .collect()
}

fn category_options() -> Vec<(&'static str, &'static str)> {
    ProductCategory::all()
        .into_iter()
        .map(|c| (c.code(), c.display_name()))
        .collect()
}

/// Badge text for the filters currently applied, `None` when all are default
fn active_badge(filters: &FilterState) -> Option<String> {
    match filters.active_count() {
        0 => None,
        1 => Some("1 filter active".to_string()),
        n => Some(format!("{} filters active", n)),
    }
}

/// Filter bar: date, region and category selection
///
/// Emits a complete `FilterState` after a simulated round-trip. Pressing
/// Apply or Clear again while a round-trip is pending supersedes it.
#[component]
pub fn FilterBar(on_change: Callback<FilterState>) -> impl IntoView {
    let date = RwSignal::new(String::new());
    let region = RwSignal::new(Region::All.code().to_string());
    let category = RwSignal::new(ProductCategory::All.code().to_string());
    let pending = RwSignal::new(false);
    let applied = RwSignal::new(FilterState::default());
    let error = RwSignal::new(None::<String>);
    let generation = RequestGeneration::new();

    let submit = {
        let generation = generation.clone();
        move |filters: FilterState, delay_ms: u32| {
            error.set(None);
            pending.set(true);
            let ticket = generation.begin();

            spawn_local(async move {
                if let Some(filters) = api::settle_filters(filters, ticket, delay_ms).await {
                    log::info!(
                        "filters applied: region={} category={} date={:?}",
                        filters.region,
                        filters.category,
                        filters.date
                    );
                    applied.set(filters);
                    on_change.run(filters);
                    pending.set(false);
                }
            });
        }
    };

    let on_apply = {
        let submit = submit.clone();
        Callback::new(move |_: ()| {
            let parsed = FilterState::parse(
                Some(date.get_untracked().as_str()),
                &region.get_untracked(),
                &category.get_untracked(),
            );
            match parsed {
                Ok(filters) => submit(filters, get_config().loading.apply_filters_delay_ms),
                Err(e) => {
                    log::error!("Rejected filter selection: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_clear = Callback::new(move |_: ()| {
        date.set(String::new());
        region.set(Region::All.code().to_string());
        category.set(ProductCategory::All.code().to_string());
        submit(
            FilterState::default(),
            get_config().loading.clear_filters_delay_ms,
        );
    });

    on_cleanup(move || generation.invalidate());

    view! {
        <div class="filter-bar">
            <div class="filter-bar__title">
                "Filters:"
                {move || active_badge(&applied.get()).map(|text| view! {
                    <span class="badge badge--primary">{text}</span>
                })}
            </div>

            <div class="filter-bar__controls">
                <DateInput
                    label="Date"
                    value=date
                    on_change=Callback::new(move |v: String| date.set(v))
                    disabled=pending
                />
                <Select
                    label="Region"
                    value=region
                    on_change=Callback::new(move |v: String| region.set(v))
                    options=region_options()
                    disabled=pending
                />
                <Select
                    label="Category"
                    value=category
                    on_change=Callback::new(move |v: String| category.set(v))
                    options=category_options()
                    disabled=pending
                />
                <Button busy=pending busy_label="Updating..." on_click=on_apply>
                    "Apply Filters"
                </Button>
                <Button variant=ButtonVariant::Outline disabled=pending on_click=on_clear>
                    "Clear"
                </Button>
            </div>

            {move || error.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}
        </div>
    }
}
