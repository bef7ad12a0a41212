//! listkeeper - a terminal shopping list
//!
//! A grouped, checkable list of things to buy with a slide-out navigation
//! drawer, built with Ratatui. The drawer's open state lives in the current
//! location, so opening and closing it is undone with back/forward like any
//! other navigation.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`routing`] - Locations, navigation history and the drawer toggle
//! * [`auth`] - In-memory session and the login/logout actions
//! * [`store`] - The in-memory shopping list
//! * [`ui`] - Terminal user interface components

/// Session handling for the navigation drawer greeting
pub mod auth;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Shopping list entries and users
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Locations and navigation history
pub mod routing;

/// In-memory shopping list
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{Entry, Urgency, User};
