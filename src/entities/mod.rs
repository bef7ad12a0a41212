//! Domain models shared by the store, the session and the UI.

pub mod item;
pub mod user;

pub use item::{Entry, Urgency};
pub use user::User;
