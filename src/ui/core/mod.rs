//! Core UI functionality for listkeeper.
//!
//! # Module Components
//!
//! - [`actions`] - Messages components send to the app shell
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal input polling
//!
//! Components turn input into [`Action`]s; the app shell applies them to the
//! store and the routing collaborators, then hands fresh props back to the
//! components before the next render.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
