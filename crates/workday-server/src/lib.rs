//! HTTP service for the workday business-date calculation.
//!
//! One read endpoint (`GET /calculate`) over [`workday_engine`], plus a
//! liveness probe. Holidays come from an upstream JSON list, fetched per year
//! and cached inside [`provider::HolidayApiProvider`].

pub mod config;
pub mod error;
pub mod provider;
pub mod rest;

pub use config::ServerConfig;
pub use error::ApiError;
pub use provider::HolidayApiProvider;
pub use rest::{create_router, AppState};
