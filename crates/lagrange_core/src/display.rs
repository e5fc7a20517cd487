//! Platform-neutral rendering of the rating widget.

use crate::{RatingWidget, UserId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Title of every rating widget embed.
pub const WIDGET_TITLE: &str = "Smash or Pass";

/// Custom emoji shown on the smash button and next to the smashers list.
pub const SMASH_EMOJI: &str = "<:smash:1276874474628583497>";

/// Custom emoji shown on the pass button and next to the passers list.
pub const PASS_EMOJI: &str = "<:pass:1276874515296813118>";

/// Emoji shown on the cycle button.
pub const CYCLE_EMOJI: &str = "🔁";

/// Embed content for one render of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DisplayPayload {
    /// Embed title.
    title: String,
    /// Embed body (markdown).
    description: String,
    /// Accent color as `0xRRGGBB`, when the item reported a usable one.
    accent: Option<u32>,
    /// Image shown in the embed.
    image_url: String,
}

impl DisplayPayload {
    /// Creates a payload from its parts.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        accent: Option<u32>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            accent,
            image_url: image_url.into(),
        }
    }
}

/// Comma-joined mentions, empty for an empty set.
///
/// # Examples
///
/// ```
/// use lagrange_core::{UserId, mention_list};
/// use std::collections::BTreeSet;
///
/// let users: BTreeSet<UserId> = [UserId::new(2), UserId::new(1)].into();
/// assert_eq!(mention_list(&users), "<@1>, <@2>");
/// assert_eq!(mention_list(&BTreeSet::new()), "");
/// ```
pub fn mention_list(users: &BTreeSet<UserId>) -> String {
    users
        .iter()
        .map(|user| user.mention())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the widget's current item and votes.
pub fn render_widget(widget: &RatingWidget) -> DisplayPayload {
    let item = widget.current();
    let description = [
        format!("> [#{}]({})", item.id(), item.source_link()),
        format!("{} **Smashers:** {}", SMASH_EMOJI, mention_list(widget.smashers())),
        format!("{} **Passers:** {}", PASS_EMOJI, mention_list(widget.passers())),
    ]
    .join("\n");

    let accent = parse_accent(item.dominant_color());
    if accent.is_none() {
        warn!(
            item_id = *item.id(),
            color = %item.dominant_color(),
            "Unparseable dominant color, rendering without accent"
        );
    }

    DisplayPayload::new(WIDGET_TITLE, description, accent, item.url().clone())
}

/// Parses a color string into `0xRRGGBB`.
///
/// Accepts `#rrggbb`, `0xrrggbb`, `0x#rrggbb`, bare `rrggbb` and
/// `rgb(r, g, b)`. Channel values in `rgb()` may be percentages.
///
/// # Examples
///
/// ```
/// use lagrange_core::parse_accent;
///
/// assert_eq!(parse_accent("#336699"), Some(0x336699));
/// assert_eq!(parse_accent("rgb(51, 102, 153)"), Some(0x336699));
/// assert_eq!(parse_accent("teal"), None);
/// ```
pub fn parse_accent(value: &str) -> Option<u32> {
    let value = value.trim();

    if let Some(args) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb(args);
    }

    let hex = value
        .strip_prefix("0x#")
        .or_else(|| value.strip_prefix("0x"))
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn parse_rgb(args: &str) -> Option<u32> {
    let channels = args
        .split(',')
        .map(|part| parse_channel(part.trim()))
        .collect::<Option<Vec<u32>>>()?;

    match channels.as_slice() {
        [r, g, b] => Some((r << 16) | (g << 8) | b),
        _ => None,
    }
}

fn parse_channel(part: &str) -> Option<u32> {
    if let Some(percent) = part.strip_suffix('%') {
        let percent: f64 = percent.trim().parse().ok()?;
        if !(0.0..=100.0).contains(&percent) {
            return None;
        }
        return Some((percent / 100.0 * 255.0).round() as u32);
    }

    let value: u32 = part.parse().ok()?;
    (value <= 255).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_prefixes_are_accepted() {
        assert_eq!(parse_accent("#336699"), Some(0x336699));
        assert_eq!(parse_accent("0x336699"), Some(0x336699));
        assert_eq!(parse_accent("0x#336699"), Some(0x336699));
        assert_eq!(parse_accent("336699"), Some(0x336699));
        assert_eq!(parse_accent("  #ABCDEF "), Some(0xABCDEF));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(parse_accent("#3366"), None);
        assert_eq!(parse_accent("#33669Z"), None);
        assert_eq!(parse_accent(""), None);
        assert_eq!(parse_accent("#+12345"), None);
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(parse_accent("rgb(0, 0, 0)"), Some(0));
        assert_eq!(parse_accent("rgb(255,255,255)"), Some(0xFFFFFF));
        assert_eq!(parse_accent("rgb(100%, 0%, 0%)"), Some(0xFF0000));
        assert_eq!(parse_accent("rgb(256, 0, 0)"), None);
        assert_eq!(parse_accent("rgb(1, 2)"), None);
    }
}
