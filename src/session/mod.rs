//! Client-held authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` value exists per application load. The [`resolver`] produces
//! it at mount and mutates it on login/logout; route guards only read it.
//!
//! DESIGN
//! ======
//! Fields are private and every constructor pairs "authenticated" with a user,
//! so an authenticated session without a user cannot be built. The session is
//! handed around through an injectable [`SessionContext`] rather than a global.


pub mod resolver;

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::User;

pub use resolver::SessionResolver;

/// Current authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}

impl Session {
    /// Initial state at mount: nothing known yet.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Optimistic state from the local mirror, awaiting backend confirmation.
    #[must_use]
    pub fn provisional(user: User) -> Self {
        Self { user: Some(user), loading: true }
    }

    /// Confirmed signed-in state.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Confirmed signed-out state.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// What the resolver does when the backend cannot be asked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionFailurePolicy {
    /// Any failure, transient or not, signs the user out locally.
    #[default]
    ClearOnFailure,
    /// Transport failures and timeouts keep a provisional cached user.
    /// Authoritative answers still clear.
    KeepOptimistic,
}

/// Injectable holder of the current [`Session`].
pub trait SessionContext {
    fn snapshot(&self) -> Session;
    fn replace(&self, session: Session);
}

/// Single-threaded [`SessionContext`]; clones observe the same session.
#[derive(Clone, Debug, Default)]
pub struct LocalSession {
    inner: Rc<RefCell<Session>>,
}

impl LocalSession {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { inner: Rc::new(RefCell::new(session)) }
    }
}

impl SessionContext for LocalSession {
    fn snapshot(&self) -> Session {
        self.inner.borrow().clone()
    }

    fn replace(&self, session: Session) {
        *self.inner.borrow_mut() = session;
    }
}
