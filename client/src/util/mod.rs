//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (navigation, `localStorage`,
//! timers) from page and component logic so the core seams stay testable.

pub mod auth;
pub mod storage;
pub mod timer;
