//! Vigifeu Fire Safety Maintenance System
//!
//! A Rust REST JSON API for a fire-safety equipment maintenance company:
//! clients, installed safety equipment, material templates and the
//! compliance date-calculation engine driving the dashboard and the
//! action calendar.

use std::sync::Arc;

pub mod api;
pub mod compliance;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
