//! Session handling.
//!
//! Components read the signed-in user through [`AuthProvider`] and change the
//! session only through [`SessionAction`]s, so they never hold session state
//! themselves.

use crate::entities::User;
use std::cell::RefCell;
use std::rc::Rc;

/// Read-only view of the current session
pub trait AuthProvider {
    fn current_user(&self) -> Option<User>;
}

/// Zero-argument session side effect (login or logout)
pub type SessionAction = Rc<dyn Fn()>;

/// Session kept in memory for the lifetime of the process.
///
/// Logging in signs in as the configured display name.
#[derive(Clone)]
pub struct LocalSession {
    user: Rc<RefCell<Option<User>>>,
    display_name: String,
}

impl LocalSession {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            display_name: display_name.into(),
        }
    }

    /// Start with a signed-in session
    #[must_use]
    pub fn signed_in(self) -> Self {
        self.login();
        self
    }

    pub fn login(&self) {
        log::info!("auth: logged in as {}", self.display_name);
        *self.user.borrow_mut() = Some(User::new(self.display_name.clone()));
    }

    pub fn logout(&self) {
        if let Some(user) = self.user.borrow_mut().take() {
            log::info!("auth: {} logged out", user.display_name);
        }
    }

    pub fn login_action(&self) -> SessionAction {
        let session = self.clone();
        Rc::new(move || session.login())
    }

    pub fn logout_action(&self) -> SessionAction {
        let session = self.clone();
        Rc::new(move || session.logout())
    }
}

impl AuthProvider for LocalSession {
    fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }
}
