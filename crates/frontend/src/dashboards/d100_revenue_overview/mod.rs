pub mod api;
pub mod generator;
pub mod ui;
