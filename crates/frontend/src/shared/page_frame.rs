//! PageFrame — root wrapper for a dashboard page.
//!
//! Sets `id="{entity}--dashboard"` and `data-page-category="dashboard"` so a
//! page can be found from the DOM inspector.

use leptos::prelude::*;

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// Entity part of the id, e.g. `"d100_revenue_overview"`
    entity: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div
            id=page_id(entity)
            class=full_class
            data-page-category=PAGE_CAT_DASHBOARD
        >
            {children()}
        </div>
    }
}

pub fn page_id(entity: &str) -> String {
    format!("{entity}--{PAGE_CAT_DASHBOARD}")
}
