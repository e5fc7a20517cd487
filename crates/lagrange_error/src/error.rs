//! Top-level error wrapper types.

use crate::{ConfigError, WaifuError, WidgetError};

/// The foundation error enum shared by all Lagrange crates.
///
/// # Examples
///
/// ```
/// use lagrange_error::{LagrangeError, WaifuError, WaifuErrorKind};
///
/// let waifu_err = WaifuError::new(WaifuErrorKind::EmptyResult);
/// let err: LagrangeError = waifu_err.into();
/// assert!(format!("{}", err).contains("Waifu Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LagrangeErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Image catalog error
    #[from(WaifuError)]
    Waifu(WaifuError),
    /// Rating widget error
    #[from(WidgetError)]
    Widget(WidgetError),
}

/// Lagrange error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lagrange_error::{LagrangeResult, ConfigError};
///
/// fn might_fail() -> LagrangeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lagrange Error: {}", _0)]
pub struct LagrangeError(Box<LagrangeErrorKind>);

impl LagrangeError {
    /// Create a new error from a kind.
    pub fn new(kind: LagrangeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LagrangeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LagrangeErrorKind
impl<T> From<T> for LagrangeError
where
    T: Into<LagrangeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lagrange operations.
pub type LagrangeResult<T> = std::result::Result<T, LagrangeError>;
