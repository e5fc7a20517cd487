//! Chat user identifiers.

use serde::{Deserialize, Serialize};

/// Snowflake id of a chat user.
///
/// # Examples
///
/// ```
/// use lagrange_core::UserId;
///
/// let user = UserId::new(80351110224678912);
/// assert_eq!(user.mention(), "<@80351110224678912>");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps a raw snowflake.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw snowflake value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Mention markup that pings the user when rendered.
    pub fn mention(self) -> String {
        format!("<@{}>", self.0)
    }
}
