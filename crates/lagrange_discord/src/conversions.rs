//! Conversions from core display types to Serenity builders.

use lagrange_core::{CYCLE_EMOJI, Control, DisplayPayload, PASS_EMOJI, SMASH_EMOJI};
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed};
use serenity::model::application::ButtonStyle;
use serenity::model::channel::ReactionType;
use serenity::model::colour::Colour;
use tracing::warn;

/// Builds the embed for a rendered widget.
pub fn embed_from_payload(payload: &DisplayPayload) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(payload.title())
        .description(payload.description())
        .image(payload.image_url());

    match payload.accent() {
        Some(accent) => embed.colour(Colour::new(*accent)),
        None => embed,
    }
}

/// Style, emoji markup and fallback label of a control's button.
pub fn button_appearance(control: Control) -> (ButtonStyle, &'static str, &'static str) {
    match control {
        Control::Smash => (ButtonStyle::Success, SMASH_EMOJI, "Smash"),
        Control::Pass => (ButtonStyle::Danger, PASS_EMOJI, "Pass"),
        Control::Cycle => (ButtonStyle::Secondary, CYCLE_EMOJI, "Next"),
    }
}

/// Builds the button for one control.
///
/// Falls back to a text label when the emoji markup cannot be parsed.
pub fn control_button(control: Control) -> CreateButton {
    let (style, emoji, label) = button_appearance(control);
    let button = CreateButton::new(control.custom_id()).style(style);

    match ReactionType::try_from(emoji) {
        Ok(reaction) => button.emoji(reaction),
        Err(e) => {
            warn!(%control, error = ?e, "Invalid button emoji, using label");
            button.label(label)
        }
    }
}

/// The row of widget controls, in button order.
pub fn control_row() -> CreateActionRow {
    CreateActionRow::Buttons(Control::ALL.into_iter().map(control_button).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_emojis_parse() {
        for control in Control::ALL {
            let (_, emoji, _) = button_appearance(control);
            assert!(ReactionType::try_from(emoji).is_ok(), "{control}: {emoji}");
        }
    }

    #[test]
    fn custom_emoji_keeps_its_id() {
        match ReactionType::try_from(SMASH_EMOJI).unwrap() {
            ReactionType::Custom { id, name, .. } => {
                assert_eq!(id.get(), 1276874474628583497);
                assert_eq!(name.as_deref(), Some("smash"));
            }
            other => panic!("expected custom emoji, got {other:?}"),
        }
    }
}
