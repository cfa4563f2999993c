//! Restaurant search server
//!
//! Serves the app shell, the PLZ search form and the restaurant listing as
//! server-rendered HTML, plus a small JSON API over the restaurant catalog.

pub mod app;
pub mod components;
pub mod config;
pub mod handlers;
pub mod response;

pub use app::{router, AppState};
pub use config::Config;
