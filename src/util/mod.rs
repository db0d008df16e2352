//! Small browser-environment helpers shared across components.

pub mod browser;
