//! Core types for the Lagrange bot.
//!
//! This crate holds everything about the smash-or-pass widget that does not
//! depend on a chat platform or an HTTP client:
//!
//! - [`Item`] - one image record from the catalog
//! - [`RatingWidget`] - vote sets, owner and lifecycle of one widget message
//! - [`ItemSource`] - fetch/render contract implemented by catalog backends
//! - [`Control`] and [`dispatch`] - button ids and the handler table behind them
//! - [`DisplayPayload`] - platform-neutral embed content

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod control;
mod display;
mod item;
mod source;
mod user;
mod widget;

pub use control::{CYCLE_DENIED_NOTICE, Control, EXPIRED_NOTICE, Reply, dispatch};
pub use display::{
    CYCLE_EMOJI, DisplayPayload, PASS_EMOJI, SMASH_EMOJI, WIDGET_TITLE, mention_list,
    parse_accent, render_widget,
};
pub use item::Item;
pub use source::ItemSource;
pub use user::UserId;
pub use widget::{Choice, ChooseOutcome, CycleOutcome, RatingWidget, WidgetState};
