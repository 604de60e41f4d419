//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the client config and the single session handle, starts
//! session resolution once at mount, and lays out the header above the
//! routed pages. Protected routes are wrapped in `Guarded` with their access
//! tier; the auth forms are public.

use careerconnect::routes::AppRoute;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::Guarded;
use crate::components::header::Header;
use crate::config::web_config;
use crate::pages::{
    complete_profile::{CompleteProfilePage, EditProfilePage},
    dashboard::DashboardPage,
    home::HomePage,
    section::{NotFoundPage, SectionPage},
    signin::SignInPage,
    signup::SignUpPage,
};
use crate::state::session::SessionHandle;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = web_config();
    let session = SessionHandle::new();
    provide_context(config.clone());
    provide_context(session);

    resolve_session(&config, session);

    view! {
        <Title text="CareerConnect"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route
                        path=StaticSegment("complete-profile")
                        view=|| view! { <Guarded route=AppRoute::CompleteProfile><CompleteProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded route=AppRoute::Dashboard><DashboardPage/></Guarded> }
                    />
                    <Route path=StaticSegment("profile") view=SectionPage/>
                    <Route
                        path=(StaticSegment("profile"), StaticSegment("edit"))
                        view=|| view! { <Guarded route=AppRoute::ProfileEdit><EditProfilePage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("profile"), StaticSegment("edit"), StaticSegment("skills"))
                        view=SectionPage
                    />
                    <Route path=StaticSegment("jobs") view=SectionPage/>
                    <Route path=(StaticSegment("jobs"), StaticSegment("post")) view=SectionPage/>
                    <Route path=(StaticSegment("jobs"), StaticSegment("manage")) view=SectionPage/>
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=SectionPage/>
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("id"), StaticSegment("applications"))
                        view=SectionPage
                    />
                    <Route
                        path=(StaticSegment("jobs"), ParamSegment("id"), StaticSegment("candidates"))
                        view=SectionPage
                    />
                    <Route path=StaticSegment("applications") view=SectionPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Resolve the session once per app load.
fn resolve_session(config: &careerconnect::config::ClientConfig, session: SessionHandle) {
    #[cfg(feature = "csr")]
    {
        let resolver = crate::state::session::web_resolver(config);
        leptos::task::spawn_local(async move {
            let resolved = resolver.resolve(&session).await;
            log::debug!("session resolved (authenticated: {})", resolved.is_authenticated());
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, session);
    }
}
