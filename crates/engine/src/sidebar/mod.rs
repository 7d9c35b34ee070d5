pub mod navigator;
pub mod render;
pub mod state;

pub use navigator::{SCROLL_STATE_KEY, SidebarEvent, SidebarNavigator};
pub use render::render_markup;
pub use state::{NodeId, NodeView, SidebarState};
