//! Discord bot client setup and lifecycle management.
//!
//! This module provides the LagrangeBot struct which manages the Discord client
//! connection, the loaded cogs and graceful shutdown.

use crate::{
    Anime, Cogs, DiscordError, DiscordErrorKind, Meta, WidgetRegistry, handler::LagrangeHandler,
};
use lagrange_core::ItemSource;
use serenity::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Main Discord bot client for Lagrange.
///
/// # Example
/// ```no_run
/// use lagrange_discord::LagrangeBot;
/// use lagrange_waifu::{WaifuImClient, WaifuSource};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let source = WaifuSource::new(WaifuImClient::new(std::env::var("WAIFU_TOKEN")?)?);
///
///     let mut bot = LagrangeBot::new(token, Arc::new(source), Duration::from_secs(500)).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct LagrangeBot {
    /// Serenity client instance
    client: Client,
    /// Widgets shown by the Anime cog
    registry: WidgetRegistry,
}

impl LagrangeBot {
    /// The cogs every Lagrange bot loads.
    pub fn default_cogs(source: Arc<dyn ItemSource>, registry: WidgetRegistry) -> Cogs {
        vec![Arc::new(Anime::new(source, registry)), Arc::new(Meta::new())]
    }

    /// Create a new LagrangeBot instance.
    ///
    /// # Arguments
    /// * `token` - Discord bot token from the Discord Developer Portal
    /// * `source` - Catalog the smash-or-pass widget draws from
    /// * `widget_timeout` - Inactivity period before a widget detaches its buttons
    ///
    /// # Errors
    /// Returns an error if the Serenity client fails to initialize.
    #[instrument(skip(token, source), fields(token_len = token.len()))]
    pub async fn new(
        token: String,
        source: Arc<dyn ItemSource>,
        widget_timeout: Duration,
    ) -> Result<Self, DiscordError> {
        info!("Initializing Lagrange Discord bot");

        let registry = WidgetRegistry::new(widget_timeout);
        let handler = LagrangeHandler::new(Self::default_cogs(source, registry.clone()));
        let intents = LagrangeHandler::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");

        Ok(Self { client, registry })
    }

    /// Start the Discord bot.
    ///
    /// This method blocks until the bot is shut down (e.g., via Ctrl+C).
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting Discord bot");

        let shard_manager = Arc::clone(&self.client.shard_manager);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                return;
            }
            info!("Ctrl+C received, shutting down shards");
            shard_manager.shutdown_all().await;
        });

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        info!(live_widgets = self.registry.len(), "Discord bot stopped");
        Ok(())
    }

    /// Widgets currently shown by the bot.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }
}
