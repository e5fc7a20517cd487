//! `/botinfo`: who the bot is and how long it has been up.

use crate::{Cog, DiscordResult};
use async_trait::async_trait;
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, InstallationContext, InteractionContext};
use std::time::{Duration, Instant};
use tracing::instrument;

/// Name of the bot information command.
pub const BOTINFO_COMMAND: &str = "botinfo";

/// Formats an uptime as `1d 2h 3m 4s`, dropping leading zero units.
///
/// # Examples
///
/// ```
/// use lagrange_discord::format_uptime;
/// use std::time::Duration;
///
/// assert_eq!(format_uptime(Duration::from_secs(93_784)), "1d 2h 3m 4s");
/// assert_eq!(format_uptime(Duration::from_secs(65)), "1m 5s");
/// ```
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let units = [
        (secs / 86_400, "d"),
        (secs % 86_400 / 3_600, "h"),
        (secs % 3_600 / 60, "m"),
        (secs % 60, "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .skip_while(|(value, unit)| *value == 0 && *unit != "s")
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();
    parts.join(" ")
}

/// `/botinfo`: name, version, guild count and uptime.
pub struct BotInformation {
    started_at: Instant,
}

impl BotInformation {
    /// Starts the uptime clock.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for BotInformation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cog for BotInformation {
    fn name(&self) -> &'static str {
        "BotInformation"
    }

    fn command_names(&self) -> Vec<&'static str> {
        vec![BOTINFO_COMMAND]
    }

    fn commands(&self) -> Vec<CreateCommand> {
        vec![
            CreateCommand::new(BOTINFO_COMMAND)
                .description("Show information about the bot")
                .integration_types(vec![InstallationContext::Guild, InstallationContext::User])
                .contexts(vec![
                    InteractionContext::Guild,
                    InteractionContext::BotDm,
                    InteractionContext::PrivateChannel,
                ]),
        ]
    }

    #[instrument(skip_all, fields(user_id = %command.user.id))]
    async fn handle_command(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> DiscordResult<()> {
        let (name, avatar) = {
            let me = ctx.cache.current_user();
            (me.name.clone(), me.face())
        };

        let embed = CreateEmbed::new()
            .title(name)
            .thumbnail(avatar)
            .field("Version", env!("CARGO_PKG_VERSION"), true)
            .field("Guilds", ctx.cache.guild_count().to_string(), true)
            .field("Uptime", format_uptime(self.started_at.elapsed()), true);

        command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new().embed(embed),
                ),
            )
            .await?;
        Ok(())
    }
}
