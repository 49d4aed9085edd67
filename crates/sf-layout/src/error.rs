//! Error types for sf-layouts-core.

/// Result type alias for layout extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for layout extraction.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if a request came back with a failure or never completed.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Fetch { .. })
    }

    /// Returns true if a response body did not have the expected shape.
    pub fn is_decode_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode(_))
    }

    /// Returns true if the output directory or a spreadsheet could not be written.
    pub fn is_write_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Write(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required input was empty.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// An input failed validation before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request failed; `message` carries the status text.
    #[error("Error fetching data: {message}")]
    Fetch { status: Option<u16>, message: String },

    /// The response body was not the expected JSON.
    #[error("Error decoding response: {0}")]
    Decode(String),

    /// Output could not be created or written.
    #[error("Error writing output: {0}")]
    Write(String),
}

impl From<sf_layouts_client::Error> for Error {
    fn from(err: sf_layouts_client::Error) -> Self {
        let kind = if err.is_decode_error() {
            ErrorKind::Decode(err.to_string())
        } else {
            ErrorKind::Fetch {
                status: err.status(),
                message: err.to_string(),
            }
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::with_source(ErrorKind::Write(err.to_string()), err)
    }
}
