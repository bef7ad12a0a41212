//! Constants used throughout the application
//!
//! This module centralizes UI text, colours and layout limits so the
//! components and the configuration agree on them.

use ratatui::style::Color;

/// Version label shown in the navigation drawer footer
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Query parameter that keeps the navigation drawer open
pub const MENU_QUERY_PARAM: &str = "menu";

// Greeting texts
pub const GREETING_ANONYMOUS_NAME: &str = "stranger";
pub const GREETING_LOGIN: &str = "Login";
pub const GREETING_LOGOUT: &str = "Logout";

// Page titles
pub const TITLE_LIST: &str = "List";
pub const TITLE_CATEGORIES: &str = "Categories";
pub const TITLE_NOT_FOUND: &str = "Not found";
pub const TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Empty states
pub const EMPTY_LIST: &str = "Nothing on the list. Add items under [list] in listkeeper.toml.";
pub const EMPTY_LOGS: &str = "No logs available";

// Status bar hints
pub const STATUS_HINTS: &str = "m: menu • space: check • d: remove • b/f: back/forward • G: logs • q: quit";
pub const STATUS_HINTS_NAV: &str = "↑/↓: move • enter: open • l: login/logout • esc: close • b/f: back/forward • G: logs";

// Urgency accents
/// Accent colour for moderate urgency
pub const ACCENT_MODERATE: Color = Color::Rgb(0xed, 0xce, 0x5e);
/// Accent colour for severe urgency
pub const ACCENT_SEVERE: Color = Color::Rgb(0xbe, 0x30, 0x2d);

// UI Layout Constants
/// Minimum navigation drawer width in columns
pub const NAV_MIN_WIDTH: u16 = 20;
/// Maximum navigation drawer width in columns
pub const NAV_MAX_WIDTH: u16 = 60;
/// Default navigation drawer width in columns
pub const NAV_DEFAULT_WIDTH: u16 = 30;
/// Minimum main area width left visible beside the open drawer
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Columns at the left edge that open the drawer on click
pub const NAV_SWIPE_AREA_WIDTH: u16 = 1;

// Config messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
