//! Error types for the waifu.im image catalog.

/// Error kinds for fetching an item from the image catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum WaifuErrorKind {
    /// The request could not be sent or the body could not be read.
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// The catalog answered with a non-success status.
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// The response contained no images.
    #[display("Response contained no images")]
    EmptyResult,

    /// The client could not be constructed.
    #[display("Client configuration error: {}", _0)]
    Configuration(String),
}

/// Image catalog error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Waifu Error: {} at line {} in {}", kind, line, file)]
pub struct WaifuError {
    /// The error kind
    pub kind: WaifuErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl WaifuError {
    /// Create a new WaifuError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use lagrange_error::{WaifuError, WaifuErrorKind};
    ///
    /// let err = WaifuError::new(WaifuErrorKind::EmptyResult);
    /// assert_eq!(err.kind, WaifuErrorKind::EmptyResult);
    /// ```
    #[track_caller]
    pub fn new(kind: WaifuErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
