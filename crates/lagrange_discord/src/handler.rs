//! Serenity event handler that routes interactions to cogs.

use crate::cog::{self, Cogs};
use crate::{DiscordError, DiscordErrorKind, DiscordResult};
use async_trait::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::GatewayIntents;
use tracing::{debug, error, info, instrument, warn};

/// Event handler for the Lagrange bot.
///
/// Registers the slash commands of every cog once the gateway is ready, then
/// forwards each command and component interaction to the cog that owns it.
pub struct LagrangeHandler {
    cogs: Cogs,
}

impl LagrangeHandler {
    /// Creates a handler over the given cogs.
    pub fn new(cogs: Cogs) -> Self {
        Self { cogs }
    }

    /// Gateway intents the handler needs.
    ///
    /// Only guild metadata is needed: interactions arrive regardless of
    /// intents, and the guild cache backs `/botinfo`.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    /// The loaded cogs.
    pub fn cogs(&self) -> &Cogs {
        &self.cogs
    }

    /// Replaces the global slash commands with those of the loaded cogs.
    ///
    /// Returns how many commands were registered.
    async fn register_commands(&self, ctx: &Context) -> DiscordResult<usize> {
        let commands = cog::all_commands(&self.cogs);
        let count = commands.len();
        Command::set_global_commands(&ctx.http, commands)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::RegistrationFailed(e.to_string())))?;
        Ok(count)
    }
}

#[async_trait]
impl EventHandler for LagrangeHandler {
    #[instrument(skip_all, fields(user = %ready.user.name))]
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(guilds = ready.guilds.len(), "Connected to Discord");

        match self.register_commands(&ctx).await {
            Ok(count) => info!(count, "Registered global slash commands"),
            Err(e) => error!(error = %e, "Failed to register slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                let name = command.data.name.as_str();
                let Some(owner) = cog::command_owner(&self.cogs, name) else {
                    warn!(command = name, "No cog handles command");
                    return;
                };

                debug!(cog = owner.name(), command = name, "Routing command");
                if let Err(e) = owner.handle_command(&ctx, &command).await {
                    error!(cog = owner.name(), command = name, error = %e, "Command failed");
                }
            }
            Interaction::Component(component) => {
                let custom_id = component.data.custom_id.as_str();
                let Some(owner) = cog::component_owner(&self.cogs, custom_id) else {
                    warn!(custom_id, "No cog handles component");
                    return;
                };

                debug!(cog = owner.name(), custom_id, "Routing component");
                if let Err(e) = owner.handle_component(&ctx, &component).await {
                    error!(cog = owner.name(), custom_id, error = %e, "Component failed");
                }
            }
            other => debug!(kind = ?other.kind(), "Ignoring interaction"),
        }
    }
}
