//! JSON models for waifu.im responses.
//!
//! Only the fields the bot reads are declared; serde skips the rest.

use derive_getters::Getters;
use lagrange_core::Item;
use serde::{Deserialize, Serialize};

/// Body of a `GET /search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct WaifuImSearchResponse {
    /// Matching images, best match first.
    images: Vec<WaifuImImage>,
}

impl WaifuImSearchResponse {
    /// Consumes the response and returns its first image.
    pub fn into_first(self) -> Option<WaifuImImage> {
        self.images.into_iter().next()
    }
}

/// One image record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct WaifuImImage {
    /// Catalog id.
    image_id: u64,
    /// CDN link to the full image.
    url: String,
    /// Original artwork location, when known.
    #[serde(default)]
    source: Option<String>,
    /// Dominant color, e.g. `#bbb7b2`.
    dominant_color: String,
    /// File extension including the dot.
    #[serde(default)]
    extension: Option<String>,
    /// Whether the image is rated NSFW.
    #[serde(default)]
    is_nsfw: bool,
    /// Width in pixels.
    #[serde(default)]
    width: Option<u32>,
    /// Height in pixels.
    #[serde(default)]
    height: Option<u32>,
    /// Tags attached to the image.
    #[serde(default)]
    tags: Vec<WaifuImTag>,
}

/// Tag attached to an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct WaifuImTag {
    /// Tag name, e.g. `waifu`.
    name: String,
    /// Whether the tag itself is NSFW.
    #[serde(default)]
    is_nsfw: bool,
}

impl From<WaifuImImage> for Item {
    fn from(image: WaifuImImage) -> Self {
        Item::new(image.image_id, image.url, image.source, image.dominant_color)
    }
}
