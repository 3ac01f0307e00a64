use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse an integer from a String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse integer from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored list column does not hold a JSON array of strings
    ///
    /// Rows are normalized before they are written, so this means the database
    /// was modified outside the application.
    #[error("Column {column} of game {appid} is not a JSON string array: {source}")]
    MalformedListColumn {
        /// Appid of the offending row
        appid: i64,
        /// Name of the list column
        column: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Password hashing or verification failed for a reason other than a mismatch
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Token signing failed
    #[error("Failed to sign token: {0}")]
    TokenSigning(String),
}
