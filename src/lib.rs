pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod feed;
pub mod models;
pub mod observability;
pub mod tasks;

pub use client::TumblrClient;
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
