pub mod button;
pub mod select;

pub use button::{Button, ButtonVariant};
pub use select::Select;
