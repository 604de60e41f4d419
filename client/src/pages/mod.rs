//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates access control to
//! `components::guard`. Feature sections backed by other backend endpoints
//! render through `section`.

pub mod complete_profile;
pub mod dashboard;
pub mod home;
pub mod section;
pub mod signin;
pub mod signup;
