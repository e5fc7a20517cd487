//! `/userinfo`: account details of a user.

use crate::{Cog, DiscordResult};
use async_trait::async_trait;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::client::Context;
use serenity::model::application::{
    CommandInteraction, CommandOptionType, InstallationContext, InteractionContext, ResolvedValue,
};
use serenity::model::user::User;
use tracing::{debug, instrument};

/// Name of the user information command.
pub const USERINFO_COMMAND: &str = "userinfo";

const USER_OPTION: &str = "user";

/// `/userinfo [user]`: id, account age and avatar of a user.
pub struct Userinfo;

impl Userinfo {
    fn target(command: &CommandInteraction) -> User {
        command
            .data
            .options()
            .into_iter()
            .find_map(|option| match option.value {
                ResolvedValue::User(user, _) if option.name == USER_OPTION => Some(user.clone()),
                _ => None,
            })
            .unwrap_or_else(|| command.user.clone())
    }
}

#[async_trait]
impl Cog for Userinfo {
    fn name(&self) -> &'static str {
        "Userinfo"
    }

    fn command_names(&self) -> Vec<&'static str> {
        vec![USERINFO_COMMAND]
    }

    fn commands(&self) -> Vec<CreateCommand> {
        vec![
            CreateCommand::new(USERINFO_COMMAND)
                .description("Show information about a user")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::User,
                        USER_OPTION,
                        "User to look up (defaults to you)",
                    )
                    .required(false),
                )
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
        let user = Self::target(command);
        debug!(target_id = %user.id, "Looking up user");

        let created = user.id.created_at().unix_timestamp();
        let embed = CreateEmbed::new()
            .title(user.tag())
            .thumbnail(user.face())
            .field("ID", user.id.to_string(), true)
            .field("Mention", format!("<@{}>", user.id), true)
            .field("Bot", if user.bot { "Yes" } else { "No" }, true)
            .field("Created", format!("<t:{created}:F> (<t:{created}:R>)"), false);

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
