//! View layer for Skycast
//!
//! View models hold the single source of truth for what each screen shows;
//! `render` turns that state into text and `shell` drives the interactive
//! loop. Network work runs on the shared tokio runtime and reports back over
//! mpsc channels.

pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;
pub mod shell;

pub use app_services::AppServices;
