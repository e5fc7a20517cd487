//! Error types for the Lagrange bot.
//!
//! This crate provides the foundation error types used throughout the Lagrange workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lagrange_error::{LagrangeResult, WaifuError, WaifuErrorKind};
//!
//! fn fetch_item() -> LagrangeResult<String> {
//!     Err(WaifuError::new(WaifuErrorKind::EmptyResult))?
//! }
//!
//! match fetch_item() {
//!     Ok(item) => println!("Got: {}", item),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod waifu;
mod widget;

pub use config::ConfigError;
pub use error::{LagrangeError, LagrangeErrorKind, LagrangeResult};
pub use waifu::{WaifuError, WaifuErrorKind};
pub use widget::{WidgetError, WidgetErrorKind};
