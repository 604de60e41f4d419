//! Reactive session context and the per-app service constructors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionHandle`] at mount. The resolver writes it, the
//! header and route guards read it. Reads inside views and effects are
//! tracked, so the UI follows every publish.
//!
//! DESIGN
//! ======
//! The resolver and the profile oracle are cheap value types, so components
//! build them from the provided `ClientConfig` when needed instead of sharing
//! one instance through context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use careerconnect::config::ClientConfig;
use careerconnect::nav::NavRole;
use careerconnect::profile::ProfileOracle;
use careerconnect::session::{Session, SessionContext, SessionResolver};
use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::util::storage::LocalStorage;
use crate::util::timer::BrowserTimer;

pub type WebResolver = SessionResolver<BrowserApi, LocalStorage, BrowserTimer>;
pub type WebOracle = ProfileOracle<BrowserApi, BrowserTimer>;

/// Session resolver wired to the browser transport, storage and timer.
#[must_use]
pub fn web_resolver(config: &ClientConfig) -> WebResolver {
    SessionResolver::new(BrowserApi::new(config), LocalStorage, BrowserTimer, config)
}

/// Profile oracle wired to the browser transport and timer.
#[must_use]
pub fn web_oracle(config: &ClientConfig) -> WebOracle {
    ProfileOracle::new(BrowserApi::new(config), BrowserTimer, config)
}

/// Reactive [`SessionContext`] over an `RwSignal<Session>`.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle(RwSignal<Session>);

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(Session::pending()))
    }

    /// Tracked read for views and effects.
    #[must_use]
    pub fn get(&self) -> Session {
        self.0.get()
    }

    /// Tracked read of the header navigation role.
    #[must_use]
    pub fn role(&self) -> NavRole {
        self.0.with(NavRole::from_session)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext for SessionHandle {
    fn snapshot(&self) -> Session {
        self.0.get_untracked()
    }

    fn replace(&self, session: Session) {
        self.0.set(session);
    }
}

/// Header greeting for the signed-in user.
#[must_use]
pub fn display_name(session: &Session) -> Option<String> {
    let user = session.user()?;
    if user.full_name.is_empty() { Some(user.email.clone()) } else { Some(user.full_name.clone()) }
}

/// Avatar badge letter: first letter of the display name, uppercased.
#[must_use]
pub fn avatar_initial(session: &Session) -> char {
    session
        .user()
        .and_then(|u| u.initial().or_else(|| u.email.chars().next()))
        .map_or('?', |c| c.to_ascii_uppercase())
}
