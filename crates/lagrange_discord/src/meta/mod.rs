//! The Meta cog: information about the bot and about users.
//!
//! Meta has no commands of its own. It is the union of two sub-cogs,
//! [`BotInformation`] and [`Userinfo`], registered as one module.

mod botinfo;
mod userinfo;

pub use botinfo::{BOTINFO_COMMAND, BotInformation, format_uptime};
pub use userinfo::{USERINFO_COMMAND, Userinfo};

use crate::{Cog, DiscordError, DiscordErrorKind, DiscordResult, cog};
use async_trait::async_trait;
use serenity::builder::CreateCommand;
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use std::sync::Arc;

/// Bot and user information commands.
pub struct Meta {
    parts: Vec<Arc<dyn Cog>>,
}

impl Meta {
    /// Composes the meta cog from its sub-cogs.
    pub fn new() -> Self {
        Self {
            parts: vec![Arc::new(BotInformation::new()), Arc::new(Userinfo)],
        }
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cog for Meta {
    fn name(&self) -> &'static str {
        "Meta"
    }

    fn command_names(&self) -> Vec<&'static str> {
        self.parts
            .iter()
            .flat_map(|part| part.command_names())
            .collect()
    }

    fn commands(&self) -> Vec<CreateCommand> {
        cog::all_commands(&self.parts)
    }

    async fn handle_command(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> DiscordResult<()> {
        match cog::command_owner(&self.parts, &command.data.name) {
            Some(part) => part.handle_command(ctx, command).await,
            None => Err(DiscordError::new(DiscordErrorKind::Unhandled(
                command.data.name.clone(),
            ))),
        }
    }
}
