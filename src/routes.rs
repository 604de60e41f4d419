//! Client route table and per-route access tiers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes are a closed set so guards, redirects and the header can refer to
//! them by variant instead of by string.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, signed in or not.
    Public,
    /// Signed-in users.
    Authenticated,
    /// Signed-in users whose profile has been completed.
    ProfileRequired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    SignIn,
    SignUp,
    CompleteProfile,
    Dashboard,
    Profile,
    ProfileEdit,
    ProfileEditSkills,
    Jobs,
    PostJob,
    ManageJobs,
    JobDetail(i64),
    JobApplications(i64),
    JobCandidates(i64),
    Applications,
}

impl AppRoute {
    /// Match a location path (query and fragment are ignored).
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["signin"] => Self::SignIn,
            ["signup"] => Self::SignUp,
            ["complete-profile"] => Self::CompleteProfile,
            ["dashboard"] => Self::Dashboard,
            ["profile"] => Self::Profile,
            ["profile", "edit"] => Self::ProfileEdit,
            ["profile", "edit", "skills"] => Self::ProfileEditSkills,
            ["jobs"] => Self::Jobs,
            ["jobs", "post"] => Self::PostJob,
            ["jobs", "manage"] => Self::ManageJobs,
            ["jobs", id] => Self::JobDetail(id.parse().ok()?),
            ["jobs", id, "applications"] => Self::JobApplications(id.parse().ok()?),
            ["jobs", id, "candidates"] => Self::JobCandidates(id.parse().ok()?),
            ["applications"] => Self::Applications,
            _ => return None,
        };
        Some(route)
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::SignIn => "/signin".to_owned(),
            Self::SignUp => "/signup".to_owned(),
            Self::CompleteProfile => "/complete-profile".to_owned(),
            Self::Dashboard => "/dashboard".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::ProfileEdit => "/profile/edit".to_owned(),
            Self::ProfileEditSkills => "/profile/edit/skills".to_owned(),
            Self::Jobs => "/jobs".to_owned(),
            Self::PostJob => "/jobs/post".to_owned(),
            Self::ManageJobs => "/jobs/manage".to_owned(),
            Self::JobDetail(id) => format!("/jobs/{id}"),
            Self::JobApplications(id) => format!("/jobs/{id}/applications"),
            Self::JobCandidates(id) => format!("/jobs/{id}/candidates"),
            Self::Applications => "/applications".to_owned(),
        }
    }

    #[must_use]
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Home | Self::SignIn | Self::SignUp | Self::Jobs | Self::JobDetail(_) => RouteAccess::Public,
            Self::CompleteProfile | Self::Profile | Self::ProfileEdit | Self::ProfileEditSkills => {
                RouteAccess::Authenticated
            }
            Self::Dashboard
            | Self::PostJob
            | Self::ManageJobs
            | Self::Applications
            | Self::JobApplications(_)
            | Self::JobCandidates(_) => RouteAccess::ProfileRequired,
        }
    }

    /// The auth forms render full-screen without the site header.
    #[must_use]
    pub fn shows_header(&self) -> bool {
        !matches!(self, Self::SignIn | Self::SignUp)
    }
}

/// Header visibility for a raw location path; unknown paths keep the header.
#[must_use]
pub fn shows_header(path: &str) -> bool {
    AppRoute::parse(path).map_or(true, |route| route.shows_header())
}
