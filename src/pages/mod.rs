//! Route-level page components.

pub mod about;
pub mod home;
pub mod menu;
pub mod reservations;
