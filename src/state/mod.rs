// file: src/state/mod.rs
// description: persisted dashboard view state module exports
// reference: internal module structure

pub mod store;
pub mod view_state;

pub use store::{KeyValueStore, ViewStateStore};
pub use view_state::{ViewAction, ViewState};

/// Key under which the dashboard keeps its view state.
pub const STORAGE_KEY: &str = "comments-dashboard-state-v1";
