//! Error types for workday-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkdayError {
    #[error("Holiday source unavailable: {0}")]
    HolidaySource(String),
}

pub type Result<T> = std::result::Result<T, WorkdayError>;
