//! Discord-specific error types.
//!
//! This module provides error handling for the Discord integration, including
//! Serenity API errors, connection issues, and failures inside cog handlers.

use derive_getters::Getters;
use lagrange_error::LagrangeError;

/// Discord error variants.
///
/// Represents different error conditions that can occur during Discord operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Serenity API error (e.g., HTTP error, gateway error, rate limit).
    #[display("Serenity API error: {_0}")]
    SerenityError(String),

    /// Connection to Discord gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Slash command registration failed.
    #[display("Command registration failed: {_0}")]
    RegistrationFailed(String),

    /// Bot configuration was rejected.
    #[display("Configuration error: {_0}")]
    Configuration(String),

    /// Fetching an item for a widget failed.
    #[display("Fetch failed: {_0}")]
    FetchFailed(String),

    /// A widget operation failed.
    #[display("Widget error: {_0}")]
    WidgetFailed(String),

    /// No cog handles the interaction.
    #[display("Unhandled interaction: {_0}")]
    Unhandled(String),
}

/// Discord error with source location tracking.
///
/// Captures the error kind along with the file and line where the error occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    kind: DiscordErrorKind,
    line: u32,
    file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use lagrange_discord::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::Unhandled("ping".into()));
    /// assert!(err.to_string().contains("Unhandled interaction: ping"));
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;

impl From<serenity::Error> for DiscordError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        DiscordError::new(DiscordErrorKind::SerenityError(err.to_string()))
    }
}

impl From<LagrangeError> for DiscordError {
    #[track_caller]
    fn from(err: LagrangeError) -> Self {
        use lagrange_error::LagrangeErrorKind;

        let kind = match err.kind() {
            LagrangeErrorKind::Waifu(e) => DiscordErrorKind::FetchFailed(e.to_string()),
            LagrangeErrorKind::Widget(e) => DiscordErrorKind::WidgetFailed(e.to_string()),
            LagrangeErrorKind::Config(e) => DiscordErrorKind::Configuration(e.to_string()),
        };
        DiscordError::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lagrange_error::{ConfigError, WaifuError, WaifuErrorKind, WidgetError, WidgetErrorKind};

    #[test]
    fn fetch_errors_become_fetch_failed() {
        let err: DiscordError =
            LagrangeError::from(WaifuError::new(WaifuErrorKind::EmptyResult)).into();
        assert!(matches!(err.kind(), DiscordErrorKind::FetchFailed(_)));
    }

    #[test]
    fn widget_errors_become_widget_failed() {
        let err: DiscordError = LagrangeError::from(WidgetError::new(
            WidgetErrorKind::UnknownControl("lagrange:nope".into()),
        ))
        .into();
        match err.kind() {
            DiscordErrorKind::WidgetFailed(message) => assert!(message.contains("lagrange:nope")),
            other => panic!("expected WidgetFailed, got {other:?}"),
        }
    }

    #[test]
    fn config_errors_keep_their_kind() {
        let err: DiscordError = LagrangeError::from(ConfigError::new("bad token")).into();
        match err.kind() {
            DiscordErrorKind::Configuration(message) => assert!(message.contains("bad token")),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn registration_failure_names_its_cause() {
        let err = DiscordError::new(DiscordErrorKind::RegistrationFailed("401".into()));
        assert!(err.to_string().contains("Command registration failed: 401"));
    }
}
