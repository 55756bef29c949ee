//! Token storage and session lifecycle.
//!
//! DESIGN
//! ======
//! `tokens` is the only place credentials are persisted; `session` is the
//! only place they are created or destroyed. UI code never touches either
//! token directly.

pub mod session;
pub mod tokens;
