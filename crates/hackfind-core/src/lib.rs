//! Shared domain types and configuration for hackfind.
//!
//! Holds the coordinate and place-description types flowing through the
//! lookup pipeline, the normalized event record returned to callers, the
//! filter strictness axis, and env-driven application configuration.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod event;
pub mod place;
pub mod strictness;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use event::{EventRecord, NO_DESCRIPTION, UNNAMED_EVENT};
pub use place::{Coordinate, PlaceDescription};
pub use strictness::{parse_strictness, Strictness};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
