//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `header` renders the role-driven site navigation; `guard` wraps protected
//! routes in the two-stage authorization gate. Both read the session from
//! Leptos context.

pub mod guard;
pub mod header;
