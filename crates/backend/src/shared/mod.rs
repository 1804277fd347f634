pub mod app_state;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod request_logger;
