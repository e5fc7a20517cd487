//! waifu.im as a rating widget item source.

use crate::WaifuImClient;
use async_trait::async_trait;
use lagrange_core::{DisplayPayload, Item, ItemSource, RatingWidget, render_widget};
use lagrange_error::LagrangeResult;

/// Item source backed by the waifu.im search endpoint.
#[derive(Debug, Clone)]
pub struct WaifuSource {
    client: WaifuImClient,
}

impl WaifuSource {
    /// Wraps a client.
    pub fn new(client: WaifuImClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &WaifuImClient {
        &self.client
    }
}

#[async_trait]
impl ItemSource for WaifuSource {
    async fn fetch(&self) -> LagrangeResult<Item> {
        Ok(self.client.fetch_item().await?)
    }

    fn render(&self, widget: &RatingWidget) -> DisplayPayload {
        render_widget(widget)
    }
}
