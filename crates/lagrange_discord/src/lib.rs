//! Discord integration for Lagrange.
//!
//! This crate runs the bot on Serenity and hosts its cogs:
//! - **Anime**: `/waifu`, the smash-or-pass rating widget
//! - **Meta**: `/botinfo` and `/userinfo`
//!
//! # Architecture
//!
//! ## Integration Layer
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: Event handler routing interactions to cogs
//! - **error**: Discord-specific error types
//!
//! ## Feature Layer
//! - **cog**: the `Cog` trait every feature module implements
//! - **anime**, **meta**: the cogs
//! - **registry**: live widgets and their inactivity timers
//! - **conversions**: core display types to Serenity builders
//!
//! # Usage
//!
//! ```rust,ignore
//! use lagrange_discord::LagrangeBot;
//!
//! let mut bot = LagrangeBot::new(token, Arc::new(source), timeout).await?;
//! bot.start().await?;
//! ```

#![warn(missing_docs)]

mod anime;
mod client;
mod cog;
mod conversions;
mod error;
mod handler;
mod meta;
mod registry;

pub use anime::{Anime, REQUIRED_PERMISSIONS, WAIFU_COMMAND, missing_permissions};
pub use client::LagrangeBot;
pub use cog::{Cog, Cogs, all_commands, command_owner, component_owner};
pub use conversions::{button_appearance, control_button, control_row, embed_from_payload};
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::LagrangeHandler;
pub use meta::{BOTINFO_COMMAND, BotInformation, Meta, USERINFO_COMMAND, Userinfo, format_uptime};
pub use registry::{DEFAULT_WIDGET_TIMEOUT, SharedWidget, WidgetEntry, WidgetRegistry};
