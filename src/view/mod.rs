// file: src/view/mod.rs
// description: text rendering for the dashboard and profile routes
// reference: internal module structure

pub mod dashboard;
pub mod profile;
pub mod route;

pub use dashboard::DashboardView;
pub use profile::ProfileView;
pub use route::Route;

use chrono::{Datelike, Utc};
use colored::Colorize;

pub fn footer() -> String {
    format!("© {} Front-End Assignment", Utc::now().year())
        .dimmed()
        .to_string()
}

/// Top navigation with the active route highlighted.
pub fn nav_bar(active: Route) -> String {
    Route::ALL
        .iter()
        .map(|route| {
            let label = format!("{} ({})", route.title(), route.path());
            if *route == active {
                label.bold().underline().to_string()
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub(crate) fn loading_card(what: &str) -> String {
    format!("Loading {}…", what)
}

pub(crate) fn error_card(message: &str) -> String {
    format!("Error: {}", message).red().to_string()
}
