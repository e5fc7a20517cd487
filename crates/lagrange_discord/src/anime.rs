//! The Anime cog: the `waifu` smash-or-pass command.
//!
//! `/waifu` fetches an item, replies with the rendered widget and its three
//! buttons, and registers the widget under the reply's message id. Button
//! presses are routed through [`lagrange_core::dispatch`].

use crate::conversions::{control_row, embed_from_payload};
use crate::{Cog, DiscordResult, WidgetRegistry};
use async_trait::async_trait;
use lagrange_core::{Control, EXPIRED_NOTICE, ItemSource, RatingWidget, Reply, UserId, dispatch};
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use serenity::client::Context;
use serenity::http::Http;
use serenity::model::application::{
    CommandInteraction, ComponentInteraction, InstallationContext, InteractionContext,
};
use serenity::model::permissions::Permissions;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Name of the smash-or-pass slash command.
pub const WAIFU_COMMAND: &str = "waifu";

/// Permissions the bot needs in the channel to show a widget.
pub const REQUIRED_PERMISSIONS: Permissions = Permissions::USE_EXTERNAL_EMOJIS
    .union(Permissions::EMBED_LINKS)
    .union(Permissions::ATTACH_FILES);

const FETCH_FAILED_NOTICE: &str = "Could not fetch an image right now, try again later.";

/// Permissions from [`REQUIRED_PERMISSIONS`] missing from `granted`.
///
/// `None` means the platform did not report permissions; nothing is considered missing.
pub fn missing_permissions(granted: Option<Permissions>) -> Permissions {
    match granted {
        Some(granted) => REQUIRED_PERMISSIONS.difference(granted),
        None => Permissions::empty(),
    }
}

/// Smash-or-pass cog.
pub struct Anime {
    source: Arc<dyn ItemSource>,
    registry: WidgetRegistry,
}

impl Anime {
    /// Creates the cog drawing items from `source`.
    pub fn new(source: Arc<dyn ItemSource>, registry: WidgetRegistry) -> Self {
        Self { source, registry }
    }

    /// Live widgets of this cog.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    fn waifu_command() -> CreateCommand {
        CreateCommand::new(WAIFU_COMMAND)
            .description("Smash or pass on a random waifu")
            .integration_types(vec![InstallationContext::Guild, InstallationContext::User])
            .contexts(vec![
                InteractionContext::Guild,
                InteractionContext::BotDm,
                InteractionContext::PrivateChannel,
            ])
    }

    #[instrument(
        skip(self, ctx, command),
        fields(user_id = %command.user.id, channel_id = %command.channel_id)
    )]
    async fn waifu(&self, ctx: &Context, command: &CommandInteraction) -> DiscordResult<()> {
        let missing = missing_permissions(command.app_permissions);
        if !missing.is_empty() {
            let names = missing.get_permission_names().join(", ");
            warn!(missing = %names, "Missing permissions for widget");
            let message = CreateInteractionResponseMessage::new()
                .content(format!("I need the following permissions here: {}", names))
                .ephemeral(true);
            command
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await?;
            return Ok(());
        }

        command.defer(&ctx.http).await?;

        let item = match self.source.fetch().await {
            Ok(item) => item,
            Err(e) => {
                error!(error = %e, "Failed to fetch item for new widget");
                command
                    .edit_response(
                        &ctx.http,
                        EditInteractionResponse::new().content(FETCH_FAILED_NOTICE),
                    )
                    .await?;
                return Err(e.into());
            }
        };

        let owner = UserId::new(command.user.id.get());
        let widget = RatingWidget::new(item, Some(owner));
        let payload = self.source.render(&widget);

        let message = command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new()
                    .embed(embed_from_payload(&payload))
                    .components(vec![control_row()]),
            )
            .await?;

        self.registry.insert(message.id, widget);
        info!(message_id = %message.id, "Widget started");

        let http = Arc::clone(&ctx.http);
        let command = command.clone();
        let channel_id = message.channel_id;
        let message_id = message.id;
        self.registry.watch(message_id, move || async move {
            detach_controls(&http, &command, channel_id, message_id).await;
        });

        Ok(())
    }

    #[instrument(
        skip(self, ctx, component),
        fields(user_id = %component.user.id, message_id = %component.message.id)
    )]
    async fn on_control(
        &self,
        ctx: &Context,
        component: &ComponentInteraction,
        control: Control,
    ) -> DiscordResult<()> {
        let Some(entry) = self.registry.get(component.message.id) else {
            debug!("Control pressed on unknown or expired widget");
            return respond(ctx, component, Reply::Ephemeral(EXPIRED_NOTICE.to_string())).await;
        };

        let mut entry = entry.lock().await;
        entry.touch();

        let user = UserId::new(component.user.id.get());
        let reply = match dispatch(control, entry.widget_mut(), user, self.source.as_ref()).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Failed to cycle widget");
                respond(ctx, component, Reply::Ephemeral(FETCH_FAILED_NOTICE.to_string()))
                    .await?;
                return Err(e.into());
            }
        };

        respond(ctx, component, reply).await
    }
}

/// Sends the interaction response matching `reply`.
async fn respond(
    ctx: &Context,
    component: &ComponentInteraction,
    reply: Reply,
) -> DiscordResult<()> {
    let response = match reply {
        Reply::Update(payload) => CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new().embed(embed_from_payload(&payload)),
        ),
        Reply::Acknowledge => CreateInteractionResponse::Acknowledge,
        Reply::Ephemeral(text) => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(text)
                .ephemeral(true),
        ),
    };

    component.create_response(&ctx.http, response).await?;
    Ok(())
}

/// Removes the buttons from an expired widget message.
///
/// Tries the interaction webhook first since it works in DMs and user
/// installs, then falls back to a channel edit once the token has lapsed.
async fn detach_controls(
    http: &Http,
    command: &CommandInteraction,
    channel_id: serenity::model::id::ChannelId,
    message_id: serenity::model::id::MessageId,
) {
    let via_token = command
        .edit_response(http, EditInteractionResponse::new().components(Vec::new()))
        .await;

    let Err(token_err) = via_token else {
        return;
    };
    debug!(error = %token_err, "Interaction token edit failed, editing via channel");

    let builder = serenity::builder::EditMessage::new().components(Vec::new());
    if let Err(e) = channel_id.edit_message(http, message_id, builder).await {
        warn!(message_id = %message_id, error = %e, "Failed to detach widget controls");
    }
}

#[async_trait]
impl Cog for Anime {
    fn name(&self) -> &'static str {
        "Anime"
    }

    fn command_names(&self) -> Vec<&'static str> {
        vec![WAIFU_COMMAND]
    }

    fn commands(&self) -> Vec<CreateCommand> {
        vec![Self::waifu_command()]
    }

    async fn handle_command(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> DiscordResult<()> {
        self.waifu(ctx, command).await
    }

    fn owns_component(&self, custom_id: &str) -> bool {
        custom_id.parse::<Control>().is_ok()
    }

    async fn handle_component(
        &self,
        ctx: &Context,
        component: &ComponentInteraction,
    ) -> DiscordResult<()> {
        let control: Control = component
            .data
            .custom_id
            .parse()
            .map_err(lagrange_error::LagrangeError::from)?;
        self.on_control(ctx, component, control).await
    }
}
