pub mod chart_format;
pub mod components;
pub mod config;
pub mod load_guard;
pub mod page_frame;
