//! Public landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use careerconnect::routes::AppRoute;
use careerconnect::session::Session;
use leptos::prelude::*;

use crate::state::session::SessionHandle;

/// Hero call-to-action for the current session: label and target path.
fn primary_action(session: &Session) -> (&'static str, String) {
    if session.is_authenticated() {
        ("Go to Dashboard", AppRoute::Dashboard.path())
    } else {
        ("Get Started", AppRoute::SignUp.path())
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let action = move || primary_action(&session.get());

    view! {
        <section class="hero">
            <h1>"Find the right job. Hire the right people."</h1>
            <p>"CareerConnect matches job seekers with employers."</p>
            <a class="button button--primary" href=move || action().1>
                {move || action().0}
            </a>
            <a class="button" href=AppRoute::Jobs.path()>"Browse Jobs"</a>
        </section>
    }
}
