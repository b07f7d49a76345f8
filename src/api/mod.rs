// file: src/api/mod.rs
// description: remote data source client and view-scoped fetch cancellation
// reference: internal module structure

pub mod client;
pub mod lifetime;

pub use client::ApiClient;
pub use lifetime::{LoadState, ViewLifetime};
