//! Protected seller dashboard pages. Every route here sits behind
//! `RequireAuth` in the router.

pub mod artisan;
pub mod events;
pub mod food;
pub mod home;
pub mod packages;
pub mod settings;
pub mod statistics;
pub mod tickets;
pub mod transport;
