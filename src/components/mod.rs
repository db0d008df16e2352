//! Reusable view components.

pub mod about;
pub mod booking_form;
pub mod card;
pub mod header;
pub mod hero;
pub mod menu_showcase;
pub mod toast;
