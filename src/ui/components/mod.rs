//! Reusable UI components

pub mod grouped_list_component;
pub mod grouped_list_item_component;
pub mod logs_panel;
pub mod main_nav_component;
pub mod scrollbar_helper;
pub mod status_bar;

// Component exports
pub use grouped_list_component::{GroupedList, ItemCallback};
pub use grouped_list_item_component::{emphasis_for, Category, Emphasis, GroupedListItem};
pub use logs_panel::LogsPanel;
pub use main_nav_component::{Greeting, MainNav, NavRoute, NavState, ROUTES};
pub use status_bar::StatusBar;
