//! TUI module for the interactive group dashboard
//!
//! The dashboard is split into a pure state model (`dashboard::model`)
//! and an iocraft view (`dashboard::view`) that renders it fullscreen.

pub mod components;
pub mod dashboard;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use theme::Theme;
