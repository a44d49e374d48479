//! Error types for daygrid-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid time of day '{0}': expected HH:MM between 00:00 and 23:59")]
    InvalidTimeOfDay(String),

    #[error("Invalid weekday {0}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(u8),
}

pub type Result<T> = std::result::Result<T, EngineError>;
