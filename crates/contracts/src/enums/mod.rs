pub mod product_category;
pub mod region;
pub mod time_range;

pub use product_category::ProductCategory;
pub use region::Region;
pub use time_range::TimeRange;
