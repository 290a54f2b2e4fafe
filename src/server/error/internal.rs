use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored column holds a value outside its enumeration.
    ///
    /// Rows are only written after validation, so this points at data written by
    /// something other than this service. Results in a 500 Internal Server Error.
    #[error("Stored {column} value '{value}' is not recognised")]
    UnknownStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The unrecognised value
        value: String,
    },

    /// A record written inside this request could not be read back.
    #[error("{0} not found after write")]
    MissingAfterWrite(&'static str),

    /// A repository reported a write outcome the operation cannot produce.
    #[error("Unexpected write outcome while writing {0}")]
    UnexpectedWriteOutcome(&'static str),
}
