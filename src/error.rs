use thiserror::Error;

/// Failure to understand a validator response payload.
///
/// This is the only error a parse call reports. It is always fatal to that
/// call, and the index it was parsing into is left untouched.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Response is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Unrecognized response: no validation uri and no SOAP fault found")]
    Unrecognized,

    #[error("SOAP fault carries no fault text")]
    EmptyFault,

    #[error("SOAP fault has no line reference: {fault}")]
    FaultWithoutLine { fault: String },
}

impl ParseError {
    /// Whether the payload was recognized as a SOAP fault
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            ParseError::EmptyFault | ParseError::FaultWithoutLine { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ParseError>;
