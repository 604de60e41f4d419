//! Guarded feature sections and the not-found page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile, job and application screens are served by other backend
//! endpoints. This module only places them behind the right access tier by
//! parsing the current location into an `AppRoute`.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use careerconnect::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::guard::Guarded;

fn section_title(route: AppRoute) -> String {
    match route {
        AppRoute::Home => "Home".to_owned(),
        AppRoute::SignIn => "Sign in".to_owned(),
        AppRoute::SignUp => "Sign up".to_owned(),
        AppRoute::CompleteProfile => "Complete your profile".to_owned(),
        AppRoute::Dashboard => "Dashboard".to_owned(),
        AppRoute::Profile => "Your profile".to_owned(),
        AppRoute::ProfileEdit => "Edit profile".to_owned(),
        AppRoute::ProfileEditSkills => "Edit skills".to_owned(),
        AppRoute::Jobs => "Find jobs".to_owned(),
        AppRoute::PostJob => "Post a job".to_owned(),
        AppRoute::ManageJobs => "Manage jobs".to_owned(),
        AppRoute::JobDetail(id) => format!("Job #{id}"),
        AppRoute::JobApplications(id) => format!("Applications for job #{id}"),
        AppRoute::JobCandidates(id) => format!("Recommended candidates for job #{id}"),
        AppRoute::Applications => "My applications".to_owned(),
    }
}

/// Heading for `path`, or `None` when no route matches.
fn section_heading(path: &str) -> Option<String> {
    AppRoute::parse(path).map(section_title)
}

/// Section page for whatever route the current location names.
///
/// The router reuses this view when only a path parameter changes, so the
/// route is tracked: a new route remounts the guard and the heading.
#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| AppRoute::parse(&location.pathname.get()));

    move || match route.get() {
        None => view! { <NotFoundPage/> }.into_any(),
        Some(route) => view! {
            <Guarded route=route>
                <section class="page">
                    <h1>{section_title(route)}</h1>
                </section>
            </Guarded>
        }
        .into_any(),
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Page not found"</h1>
            <a href=AppRoute::Home.path()>"Back to home"</a>
        </section>
    }
}
