//! # careerconnect
//!
//! Client-side session core for the CareerConnect job portal: resolves who
//! the user is at startup, gates protected routes on authentication and
//! profile completeness, and drives the sign-in and sign-up flows.
//!
//! The crate has no browser dependency. The `careerconnect-web` crate wires it
//! into Leptos and supplies browser implementations of the [`api::AuthApi`],
//! [`cache::Storage`] and [`timer::Timer`] seams. The `native` feature adds a
//! `reqwest` transport and a `tokio` timer.

pub mod account;
pub mod api;
pub mod cache;
pub mod cancel;
pub mod config;
pub mod guard;
pub mod nav;
pub mod profile;
pub mod routes;
pub mod session;
pub mod timer;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_helpers;
