use crate::dashboards::RevenueOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <RevenueOverviewDashboard />
        </main>
    }
}
