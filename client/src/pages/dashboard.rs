//! Dashboard: the signed-in landing route, reached only with a completed profile.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use careerconnect::nav::{NavItem, NavRole, nav_items};
use careerconnect::routes::AppRoute;
use leptos::prelude::*;

use crate::state::session::{SessionHandle, display_name};

/// Role shortcuts shown as cards, minus the dashboard itself.
fn quick_links(role: NavRole) -> Vec<NavItem> {
    nav_items(role).iter().copied().filter(|item| item.route != AppRoute::Dashboard).collect()
}

fn greeting(name: Option<String>) -> String {
    match name {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        <section class="page dashboard">
            <h1>{move || greeting(display_name(&session.get()))}</h1>
            <div class="dashboard__cards">
                {move || {
                    quick_links(session.role())
                        .into_iter()
                        .map(|item| view! { <a class="dashboard__card" href=item.path()>{item.label}</a> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
