//! Site header with role-driven navigation and the account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. It reads the session optimistically:
//! a cached user shows the signed-in menu before the backend confirms it. The
//! header is hidden on the full-screen sign-in and sign-up forms.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use careerconnect::config::ClientConfig;
use careerconnect::nav::{NavItem, NavRole, nav_items};
use careerconnect::routes::{AppRoute, shows_header};
use careerconnect::session::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{SessionHandle, avatar_initial, display_name};
use crate::state::ui::MenuState;

/// `block` plus `block--flag` when `on`.
fn modifier(block: &str, flag: &str, on: bool) -> String {
    if on { format!("{block} {block}--{flag}") } else { block.to_owned() }
}

fn link_class(item: &NavItem, current_path: &str) -> String {
    modifier("site-header__link", "active", item.is_active(current_path))
}

/// Whether to show the account menu instead of a loading placeholder.
fn menu_ready(session: &Session) -> bool {
    !session.is_loading() || session.is_authenticated()
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let menu = RwSignal::new(MenuState::default());
    let location = use_location();

    Effect::new(move || {
        location.pathname.track();
        menu.update(MenuState::close);
    });

    let on_logout = move |_| {
        menu.update(MenuState::close);
        logout(&config, session);
    };

    let links = move || {
        let current = location.pathname.get();
        nav_items(session.role())
            .iter()
            .map(|item| {
                view! {
                    <a href=item.path() class=link_class(item, &current)>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || modifier("site-header", "hidden", !shows_header(&location.pathname.get()))>
            <a href=AppRoute::Home.path() class="site-header__brand">
                "Career"
                <span>"Connect"</span>
            </a>
            <button class="site-header__toggle" on:click=move |_| menu.update(MenuState::toggle_mobile)>
                "Menu"
            </button>
            <nav class=move || modifier("site-header__nav", "open", menu.get().mobile_open)>
                {move || if menu_ready(&session.get()) {
                    links().into_any()
                } else {
                    view! { <span class="site-header__loading">"Loading..."</span> }.into_any()
                }}
            </nav>
            <div class=move || modifier("site-header__account", "hidden", session.role() == NavRole::Anonymous)>
                <button class="site-header__avatar" on:click=move |_| menu.update(MenuState::toggle_profile)>
                    {move || avatar_initial(&session.get()).to_string()}
                </button>
                <div class=move || modifier("site-header__dropdown", "open", menu.get().profile_open)>
                    <p class="site-header__name">{move || display_name(&session.get()).unwrap_or_default()}</p>
                    <a href=AppRoute::Dashboard.path()>"Dashboard"</a>
                    <a href=AppRoute::Profile.path()>"Profile"</a>
                    <button class="site-header__logout" on:click=on_logout>"Sign out"</button>
                </div>
            </div>
        </header>
    }
}

/// Sign out and reload. Logout always ends in a full document load.
fn logout(config: &ClientConfig, session: SessionHandle) {
    #[cfg(feature = "csr")]
    {
        let resolver = crate::state::session::web_resolver(config);
        leptos::task::spawn_local(async move {
            let intent = resolver.logout(&session).await;
            crate::util::auth::full_reload(&intent.path);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session);
    }
}
