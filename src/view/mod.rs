pub mod layout;
pub mod model;
pub mod render;
pub mod widget;

pub use layout::build_layout;
pub use model::{DashboardModel, Selections};
pub use widget::{Style, Widget};
