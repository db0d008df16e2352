//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`booking`, `carousel`) so individual components
//! can depend on small focused models, and so the form/carousel logic can be
//! unit tested natively without a browser.

pub mod booking;
pub mod carousel;
