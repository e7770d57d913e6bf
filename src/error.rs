//! Error types for the staff engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition an engine operation can fail on. Data problems never
//! surface here: a missing staff member or an unrecognized enum value
//! degrades to a placeholder instead.

use thiserror::Error;

/// The main error type for the staff engine.
///
/// Query, schedule and configuration operations all return this error type.
///
/// # Example
///
/// ```
/// use staff_engine::error::EngineError;
///
/// let error = EngineError::UnknownWeekday {
///     key: "Funday".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown weekday: Funday");
/// assert!(error.is_invalid_argument());
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A page size of zero was requested.
    #[error("Invalid page size {page_size}: page size must be greater than zero")]
    InvalidPageSize {
        /// The rejected page size.
        page_size: usize,
    },

    /// A weekday key was not one of the seven canonical weekday names.
    #[error("Unknown weekday: {key}")]
    UnknownWeekday {
        /// The key that was not recognized.
        key: String,
    },

    /// A week offset moves the displayed week outside the representable
    /// calendar.
    #[error("Week offset {week_offset} is out of range")]
    WeekOutOfRange {
        /// The rejected offset, in weeks.
        week_offset: i64,
    },

    /// A sort key does not name a sortable field of the record type.
    #[error("Unknown sort key: {key}")]
    UnknownSortKey {
        /// The key that was not recognized.
        key: String,
    },

    /// A search field does not name a field of the record type.
    #[error("Unknown field: {field}")]
    UnknownField {
        /// The field that was not recognized.
        field: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A dataset document could not be parsed.
    #[error("Failed to parse {dataset} dataset: {message}")]
    DatasetParseError {
        /// Which dataset failed (e.g., "staff").
        dataset: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by a bad argument to a query or
    /// schedule operation, as opposed to configuration or dataset loading
    /// failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidPageSize { .. }
                | EngineError::UnknownWeekday { .. }
                | EngineError::WeekOutOfRange { .. }
                | EngineError::UnknownSortKey { .. }
                | EngineError::UnknownField { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
