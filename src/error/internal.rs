use std::num::TryFromIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored or observed integer does not fit the type it is converted to.
    ///
    /// Raised at the persistence boundary when a column holds a negative level or reset
    /// count, or an observed value exceeds the column range.
    #[error("Value {value} for '{field}' is out of range: {source}")]
    IntOutOfRange {
        /// Name of the field being converted
        field: &'static str,
        /// The offending value
        value: i64,
        /// The underlying conversion error
        #[source]
        source: TryFromIntError,
    },

    /// Failure to convert a Unix timestamp to a Discord timestamp
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
