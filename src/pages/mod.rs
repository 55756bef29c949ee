//! Route-level page components.

pub mod dashboard;
pub mod hotels;
pub mod index;
pub mod login;
pub mod not_found;
pub mod products;
