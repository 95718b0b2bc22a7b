pub mod dashboard;
pub mod filter_bar;
pub mod plot;
pub mod revenue_chart;
pub mod summary_cards;

pub use dashboard::RevenueOverviewDashboard;
pub use plot::ChartType;
