pub mod d100_revenue_overview;

pub use d100_revenue_overview::ui::RevenueOverviewDashboard;
