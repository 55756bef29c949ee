//! Shared UI components.

pub mod dashboard_layout;
pub mod footer;
pub mod navbar;
pub mod require_auth;
