//! Lagrange - a Discord bot with a smash-or-pass widget and meta commands.
//!
//! The binary wires the workspace crates together:
//!
//! - `lagrange-error` - Error types
//! - `lagrange-core` - Rating widget, items and rendering
//! - `lagrange-waifu` - waifu.im client
//! - `lagrange-discord` - Serenity client and cogs
//!
//! This crate holds configuration loading and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{DiscordConfig, LagrangeConfig, WaifuConfig, WidgetConfig};
pub use logging::init_logging;
