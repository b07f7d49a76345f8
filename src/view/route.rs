// file: src/view/route.rs
// description: the two navigable views and their paths

use crate::error::{DashboardError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Profile,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Dashboard, Route::Profile];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Profile => "/profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

impl FromStr for Route {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Route::from_path(s)
            .ok_or_else(|| DashboardError::Validation(format!("No view at path: {}", s)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
