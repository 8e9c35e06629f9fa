//! Shared UI crate for Alarmdash. Spreadsheet loading, report math and every
//! view live here; the `web` and `desktop` crates only supply routing.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod report;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme. The desktop shell embeds the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
