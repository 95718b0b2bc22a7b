pub mod dto;
pub mod error;
pub mod summary;

pub use dto::*;
pub use error::DashboardError;
pub use summary::SeriesSummary;
