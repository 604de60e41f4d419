//! Executing navigation intents from the session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards, logout and sign-in return `NavIntent` values. Every page and
//! component carries them out through [`follow`] so redirects behave the same
//! everywhere: in-app pushes and replaces go through the router, full reloads
//! through `window.location`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use careerconnect::nav::{NavIntent, NavMode};
use leptos_router::NavigateOptions;

/// Router options for an in-app navigation; `None` for a full reload.
#[must_use]
pub fn navigate_options(mode: NavMode) -> Option<NavigateOptions> {
    match mode {
        NavMode::Push => Some(NavigateOptions::default()),
        NavMode::Replace => Some(NavigateOptions { replace: true, ..NavigateOptions::default() }),
        NavMode::FullReload => None,
    }
}

/// Carry out `intent` with the router's `navigate` or a document load.
pub fn follow<F>(navigate: &F, intent: &NavIntent)
where
    F: Fn(&str, NavigateOptions),
{
    match navigate_options(intent.mode) {
        Some(options) => navigate(&intent.path, options),
        None => full_reload(&intent.path),
    }
}

/// Load `path` as a new document, dropping all in-memory client state.
pub fn full_reload(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::warn!("navigation to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
