//! Location handling for the application shell.
//!
//! The navigation drawer keeps its open state in the `menu` query parameter,
//! so toggling it is a regular navigation and the back/forward keys undo it.

pub mod history;
pub mod location;

pub use history::{History, HistoryError, Subscription};
pub use location::Location;

use crate::constants::MENU_QUERY_PARAM;
use std::rc::Rc;

/// Shared zero-argument callable that flips the drawer's open indicator
pub type NavToggle = Rc<dyn Fn()>;

/// Whether the navigation drawer should be open at `location`
pub fn should_main_nav_be_open(location: &Location) -> bool {
    location.has_query_param(MENU_QUERY_PARAM)
}

/// Flip the `menu` query parameter on the current location by pushing a new entry
pub fn toggle_main_nav(history: &History) {
    let current = history.location();
    let next = if should_main_nav_be_open(&current) {
        current.without_query_param(MENU_QUERY_PARAM)
    } else {
        current.with_query_flag(MENU_QUERY_PARAM)
    };
    log::debug!("routing: toggle main nav {} -> {}", current, next);
    history.push(next);
}

/// Wrap [`toggle_main_nav`] as an injectable [`NavToggle`]
pub fn nav_toggle(history: History) -> NavToggle {
    Rc::new(move || toggle_main_nav(&history))
}
