//! Sign-in page: email + password against the session backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through the core `sign_in` flow, which validates locally, logs in,
//! records the session and decides the landing page. Arriving with
//! `?registered=true` shows the post-registration banner.

use careerconnect::account::registration_notice;
use careerconnect::config::ClientConfig;
use careerconnect::routes::AppRoute;
use careerconnect::validation::SignInForm;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionHandle;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let notice = move || query.with(|q| registration_notice(q.get("registered").as_deref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let form = SignInForm { email: email.get(), password: password.get() };
        submit(&config, session, form, error, busy, navigate.clone());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__back" href=AppRoute::Home.path()>"Back to home"</a>
                <h1>"Sign in to CareerConnect"</h1>
                <Show when=move || notice().is_some()>
                    <p class="auth-message auth-message--success">{move || notice().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=AppRoute::SignUp.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

fn submit<F>(
    config: &ClientConfig,
    session: SessionHandle,
    form: SignInForm,
    error: RwSignal<String>,
    busy: RwSignal<bool>,
    navigate: F,
) where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    {
        let resolver = crate::state::session::web_resolver(config);
        leptos::task::spawn_local(async move {
            match careerconnect::account::sign_in(&resolver, &session, &form).await {
                Ok(intent) => crate::util::auth::follow(&navigate, &intent),
                Err(e) => {
                    error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session, form, error, navigate);
        busy.set(false);
    }
}
