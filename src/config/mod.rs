//! Application configuration

mod app_config;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig, ENV_PREFIX};
