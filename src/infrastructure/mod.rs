//! Infrastructure layer - Storage, services, logging and metrics

pub mod album;
pub mod logging;
pub mod observability;
