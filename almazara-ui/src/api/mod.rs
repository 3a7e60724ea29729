//! Browser side of the mill REST API
//!
//! HTTP calls with `gloo-net` plus the local storage that keeps the API
//! address, the session and display preferences between visits.

pub mod client;
pub mod storage;

pub use client::{create, delete, fetch_profile, list, login, logout, update};
pub use storage::{get_api_base, get_page_size, set_api_base, set_page_size, LocalStorageStore};
