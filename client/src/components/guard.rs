//! Route guard component wrapping protected pages.
//!
//! ARCHITECTURE
//! ============
//! One `RouteGuard` per mounted instance lives in a signal. An effect claims
//! the single profile check once the session settles and runs it as a
//! cancellable task; a second effect follows any redirect the guard decides.
//! Unmounting cancels the in-flight check so a late answer never commits.

use careerconnect::cancel::CancelToken;
use careerconnect::config::ClientConfig;
use careerconnect::guard::{RouteGuard, RouteGuardResult};
use careerconnect::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionHandle;
use crate::util::auth::follow;

/// Render `children` only when the guard for `route` allows it.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let guard = RwSignal::new(RouteGuard::for_route(route, config.profile_policy));
    let in_flight = StoredValue::new(None::<CancelToken>);

    Effect::new(move || {
        let current = session.get();
        let Some(Some(user_id)) = guard.try_update(|g| g.begin_profile_check(&current)) else {
            return;
        };
        start_profile_check(&config, user_id, guard, in_flight);
    });

    Effect::new(move || {
        let result = guard.with(|g| g.result(&session.get()));
        if let Some(intent) = result.redirect() {
            follow(&navigate, &intent);
        }
    });

    on_cleanup(move || {
        if let Some(token) = in_flight.get_value() {
            token.cancel();
        }
    });

    let retry = move |_| guard.update(RouteGuard::retry_profile_check);

    view! {
        {move || match guard.with(|g| g.result(&session.get())) {
            RouteGuardResult::Allow => children().into_any(),
            RouteGuardResult::Pending => view! { <div class="route-status">"Loading..."</div> }.into_any(),
            RouteGuardResult::ProfileUnavailable => {
                view! {
                    <div class="route-status route-status--error">
                        <p>"We couldn't check your profile right now."</p>
                        <button class="button" on:click=retry>"Try again"</button>
                    </div>
                }
                    .into_any()
            }
            RouteGuardResult::RedirectToSignIn | RouteGuardResult::RedirectToProfileCompletion => ().into_any(),
        }}
    }
}

fn start_profile_check(
    config: &ClientConfig,
    user_id: i64,
    guard: RwSignal<RouteGuard>,
    in_flight: StoredValue<Option<CancelToken>>,
) {
    #[cfg(feature = "csr")]
    {
        let oracle = crate::state::session::web_oracle(config);
        let (check, token) = careerconnect::cancel::cancellable(async move { oracle.check_profile(user_id).await });
        in_flight.set_value(Some(token));
        leptos::task::spawn_local(async move {
            if let Some(outcome) = check.await {
                guard.update(|g| g.commit_profile_check(outcome));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, user_id, guard, in_flight);
    }
}
