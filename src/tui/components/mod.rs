//! Shared TUI components
//!
//! Reusable UI pieces for the dashboard: header and footer bars, the
//! inline search input, and toast notifications.

pub mod footer;
pub mod header;
pub mod search_box;
pub mod toast;

pub use footer::{Footer, FooterProps, Shortcut};
pub use header::{Header, HeaderProps};
pub use search_box::{InlineSearchBox, InlineSearchBoxProps};
pub use toast::{Toast, ToastLevel, render_toast};
