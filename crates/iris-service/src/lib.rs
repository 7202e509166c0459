//! Iris Inference Service
//!
//! Loads one classifier at startup and answers `POST /predict` with the
//! predicted species of a single flower.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::{CorsConfig, ServiceConfig};
pub use routes::{create_router, AppError};
pub use state::AppState;
