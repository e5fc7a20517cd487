//! Rating widget error types.

/// Conditions under which a widget refuses an operation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum WidgetErrorKind {
    /// The component id does not belong to any widget control.
    #[display("Unknown control: {}", _0)]
    UnknownControl(String),
}

/// Widget error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Widget Error: {} at line {} in {}", kind, line, file)]
pub struct WidgetError {
    /// The error kind
    pub kind: WidgetErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl WidgetError {
    /// Create a new WidgetError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WidgetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
