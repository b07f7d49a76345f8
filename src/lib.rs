// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod table;
pub mod utils;
pub mod view;

pub use api::{ApiClient, LoadState, ViewLifetime};
pub use config::{ApiConfig, Config, DashboardConfig, StorageConfig};
pub use error::{DashboardError, Result};
pub use models::{Comment, User};
pub use state::{KeyValueStore, STORAGE_KEY, ViewAction, ViewState, ViewStateStore};
pub use table::{
    FilterCriteria, PageSize, PageSpec, SortColumn, SortDirection, SortSpec, TablePage,
    TableViewPipeline,
};
pub use utils::Validator;
pub use view::{DashboardView, ProfileView, Route};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _state = ViewState::default();
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
    }
}
