//! waifu.im image catalog integration.
//!
//! Provides the HTTP client for the `/search` endpoint and [`WaifuSource`],
//! the [`ItemSource`](lagrange_core::ItemSource) the smash-or-pass widget
//! draws from.
//!
//! # Example
//!
//! ```rust,ignore
//! use lagrange_waifu::{WaifuImClient, WaifuSource};
//!
//! let client = WaifuImClient::new(std::env::var("WAIFU_TOKEN")?)?;
//! let item = client.fetch_item().await?;
//! println!("#{} {}", item.id(), item.url());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod models;
mod source;

pub use client::{WAIFU_IM_BASE_URL, WaifuImClient, parse_search_response};
pub use models::{WaifuImImage, WaifuImSearchResponse, WaifuImTag};
pub use source::WaifuSource;
