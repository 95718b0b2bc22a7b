use contracts::dashboards::d100_revenue_overview::{FilterState, RevenueSeriesResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::filter_bar::FilterBar;
use super::revenue_chart::RevenueChart;
use super::summary_cards::SummaryCards;
use crate::dashboards::d100_revenue_overview::api;
use crate::shared::config::get_config;
use crate::shared::load_guard::RequestGeneration;
use crate::shared::page_frame::PageFrame;

/// Revenue overview page: filter bar, KPI cards and the revenue chart
///
/// Reloads the series whenever the filters or the time range change. Only
/// the most recent load may write `series`; older ones are dropped.
#[component]
pub fn RevenueOverviewDashboard() -> impl IntoView {
    let config = get_config();

    let filters = RwSignal::new(FilterState::default());
    let time_range = RwSignal::new(config.chart.default_time_range);
    let series = RwSignal::new(None::<RevenueSeriesResponse>);
    let loading = RwSignal::new(false);
    let generation = RequestGeneration::new();

    // Load data when range or filters change
    Effect::new({
        let generation = generation.clone();
        move |_| {
            let range = time_range.get();
            let current = filters.get();
            loading.set(true);

            let ticket = generation.begin();
            let delay_ms = config.loading.chart_delay_ms;

            spawn_local(async move {
                if let Some(response) =
                    api::load_revenue_series(range, current, ticket.clone(), delay_ms).await
                {
                    ticket.apply(response, |response| {
                        series.set(Some(response));
                        loading.set(false);
                    });
                }
            });
        }
    });

    on_cleanup(move || generation.invalidate());

    let summary = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            series.get().map(|s| s.summary)
        }
    });

    view! {
        <PageFrame entity="d100_revenue_overview">
            <div class="page__header">
                <h2 class="page__title">"Dashboard"</h2>
            </div>

            <div class="page__content">
                <SummaryCards summary=summary time_range=time_range />
                <FilterBar on_change=Callback::new(move |next: FilterState| filters.set(next)) />
                <RevenueChart
                    series=series
                    loading=loading
                    time_range=time_range
                />
            </div>
        </PageFrame>
    }
}
