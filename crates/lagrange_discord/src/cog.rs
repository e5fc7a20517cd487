//! Cogs: feature modules that contribute commands and interaction handlers.
//!
//! The handler keeps a list of cogs, registers the union of their slash
//! commands on startup and hands each incoming interaction to the first cog
//! that claims it.

use crate::DiscordResult;
use async_trait::async_trait;
use serenity::builder::CreateCommand;
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use std::sync::Arc;

/// A feature module of the bot.
#[async_trait]
pub trait Cog: Send + Sync {
    /// Display name, used in logs.
    fn name(&self) -> &'static str;

    /// Names of the slash commands this cog answers.
    fn command_names(&self) -> Vec<&'static str>;

    /// Slash command definitions to register.
    fn commands(&self) -> Vec<CreateCommand>;

    /// Answers a slash command whose name is in [`command_names`](Self::command_names).
    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction)
    -> DiscordResult<()>;

    /// Whether a component custom id belongs to this cog.
    fn owns_component(&self, _custom_id: &str) -> bool {
        false
    }

    /// Answers a component interaction this cog owns.
    async fn handle_component(
        &self,
        _ctx: &Context,
        _component: &ComponentInteraction,
    ) -> DiscordResult<()> {
        Ok(())
    }
}

/// The cogs loaded into a bot.
pub type Cogs = Vec<Arc<dyn Cog>>;

/// The cog that answers the slash command `name`.
pub fn command_owner<'a>(cogs: &'a [Arc<dyn Cog>], name: &str) -> Option<&'a Arc<dyn Cog>> {
    cogs.iter().find(|cog| cog.command_names().contains(&name))
}

/// The cog that owns the component `custom_id`.
pub fn component_owner<'a>(
    cogs: &'a [Arc<dyn Cog>],
    custom_id: &str,
) -> Option<&'a Arc<dyn Cog>> {
    cogs.iter().find(|cog| cog.owns_component(custom_id))
}

/// Slash command definitions of all cogs.
pub fn all_commands(cogs: &[Arc<dyn Cog>]) -> Vec<CreateCommand> {
    cogs.iter().flat_map(|cog| cog.commands()).collect()
}
