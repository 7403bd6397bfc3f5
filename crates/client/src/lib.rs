//! REST client for the CineWeb backend.
//!
//! [`CinemaApi`] wraps the backend's JSON endpoints with [`reqwest`];
//! the [`Gateway`] trait is what the console's pages depend on.

pub mod api;
pub mod config;
pub mod gateway;

pub use api::{ApiError, CinemaApi};
pub use config::{ClientConfig, ConfigError};
pub use gateway::Gateway;
