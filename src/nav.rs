//! Role-driven navigation and navigation commands.
//!
//! DESIGN
//! ======
//! The header menu is a pure mapping from role to an ordered static list, and
//! decision functions return a [`NavIntent`] for the caller to execute instead
//! of touching the browser location themselves.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::routes::AppRoute;
use crate::session::Session;
use crate::types::UserType;

/// Audience a menu is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRole {
    JobSeeker,
    Employer,
    Anonymous,
}

impl NavRole {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        match session.user().map(|u| u.user_type) {
            Some(UserType::JobSeeker) => Self::JobSeeker,
            Some(UserType::Employer) => Self::Employer,
            None => Self::Anonymous,
        }
    }
}

/// One header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    pub label: &'static str,
}

impl NavItem {
    #[must_use]
    pub fn path(&self) -> String {
        self.route.path()
    }

    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        AppRoute::parse(current_path) == Some(self.route)
    }
}

const ANONYMOUS_ITEMS: [NavItem; 2] = [
    NavItem { route: AppRoute::SignIn, label: "Log In" },
    NavItem { route: AppRoute::SignUp, label: "Sign Up" },
];

const JOB_SEEKER_ITEMS: [NavItem; 4] = [
    NavItem { route: AppRoute::Dashboard, label: "Dashboard" },
    NavItem { route: AppRoute::Profile, label: "Profile" },
    NavItem { route: AppRoute::Jobs, label: "Find Jobs" },
    NavItem { route: AppRoute::Applications, label: "My Applications" },
];

const EMPLOYER_ITEMS: [NavItem; 4] = [
    NavItem { route: AppRoute::Dashboard, label: "Dashboard" },
    NavItem { route: AppRoute::Profile, label: "Profile" },
    NavItem { route: AppRoute::PostJob, label: "Post Job" },
    NavItem { route: AppRoute::ManageJobs, label: "Manage Jobs" },
];

/// Ordered header links for `role`.
#[must_use]
pub fn nav_items(role: NavRole) -> &'static [NavItem] {
    match role {
        NavRole::JobSeeker => &JOB_SEEKER_ITEMS,
        NavRole::Employer => &EMPLOYER_ITEMS,
        NavRole::Anonymous => &ANONYMOUS_ITEMS,
    }
}

/// How a navigation is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// In-app navigation that adds a history entry.
    Push,
    /// In-app navigation replacing the current history entry.
    Replace,
    /// Full document load (drops all in-memory client state).
    FullReload,
}

/// A navigation command returned by decision code and executed by the view layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavIntent {
    pub path: String,
    pub mode: NavMode,
}

impl NavIntent {
    #[must_use]
    pub fn push(route: AppRoute) -> Self {
        Self { path: route.path(), mode: NavMode::Push }
    }

    #[must_use]
    pub fn replace(route: AppRoute) -> Self {
        Self { path: route.path(), mode: NavMode::Replace }
    }

    #[must_use]
    pub fn full_reload(route: AppRoute) -> Self {
        Self { path: route.path(), mode: NavMode::FullReload }
    }
}
