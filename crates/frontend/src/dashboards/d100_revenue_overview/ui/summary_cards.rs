use contracts::dashboards::d100_revenue_overview::SeriesSummary;
use contracts::enums::TimeRange;
use leptos::prelude::*;

use crate::shared::chart_format::{format_money, format_revenue, format_thousands};
use crate::shared::components::stat_card::StatCard;

/// Card subtitle naming the window the totals cover
fn range_subtitle(range: TimeRange) -> String {
    format!("Last {} days", range.days())
}

/// KPI cards derived from the series currently on screen
#[component]
pub fn SummaryCards(
    /// `None` while a load is pending
    #[prop(into)]
    summary: Signal<Option<SeriesSummary>>,
    #[prop(into)]
    time_range: Signal<TimeRange>,
) -> impl IntoView {
    let revenue = Signal::derive(move || summary.get().map(|s| format_revenue(s.total_revenue)));
    let orders = Signal::derive(move || {
        summary
            .get()
            .map(|s| format_thousands(i64::try_from(s.total_orders).unwrap_or(i64::MAX)))
    });
    let average = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.average_order_value.map(format_money).unwrap_or_else(|| "—".to_string()))
    });
    let subtitle = Signal::derive(move || Some(range_subtitle(time_range.get())));

    view! {
        <div class="stat-cards">
            <StatCard label="Total Revenue" value=revenue accent="blue" subtitle=subtitle />
            <StatCard label="Number of Sales" value=orders accent="pink" subtitle=subtitle />
            <StatCard label="Average Order Value" value=average accent="purple" subtitle=subtitle />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_subtitle() {
        assert_eq!(range_subtitle(TimeRange::Week), "Last 7 days");
        assert_eq!(range_subtitle(TimeRange::Year), "Last 365 days");
    }
}
