//! Reactive application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the single authentication state for the app load; `ui`
//! holds header menu chrome.

pub mod session;
pub mod ui;
