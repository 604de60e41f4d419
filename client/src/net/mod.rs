//! Networking for the CareerConnect REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the core `AuthApi` seam with `gloo-net`. Wire types and
//! the error model come from the core crate.

pub mod api;
