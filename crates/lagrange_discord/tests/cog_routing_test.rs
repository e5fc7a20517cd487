use async_trait::async_trait;
use lagrange_core::{Control, DisplayPayload, Item, ItemSource, RatingWidget, render_widget};
use lagrange_discord::{
    Anime, BOTINFO_COMMAND, Cogs, LagrangeBot, Meta, USERINFO_COMMAND, WAIFU_COMMAND,
    WidgetRegistry, all_commands, command_owner, component_owner,
};
use lagrange_error::LagrangeResult;
use std::sync::Arc;

struct FixedSource;

#[async_trait]
impl ItemSource for FixedSource {
    async fn fetch(&self) -> LagrangeResult<Item> {
        Ok(Item::new(1, "https://x/1.png", None, "#336699"))
    }

    fn render(&self, widget: &RatingWidget) -> DisplayPayload {
        render_widget(widget)
    }
}

fn cogs() -> Cogs {
    LagrangeBot::default_cogs(Arc::new(FixedSource), WidgetRegistry::default())
}

#[test]
fn commands_route_to_their_cog() {
    let cogs = cogs();

    assert_eq!(command_owner(&cogs, WAIFU_COMMAND).unwrap().name(), "Anime");
    assert_eq!(command_owner(&cogs, BOTINFO_COMMAND).unwrap().name(), "Meta");
    assert_eq!(command_owner(&cogs, USERINFO_COMMAND).unwrap().name(), "Meta");
    assert!(command_owner(&cogs, "ping").is_none());
}

#[test]
fn widget_controls_route_to_anime() {
    let cogs = cogs();

    for control in Control::ALL {
        assert_eq!(
            component_owner(&cogs, control.custom_id()).unwrap().name(),
            "Anime"
        );
    }
    assert!(component_owner(&cogs, "other:button").is_none());
}

#[test]
fn meta_exposes_both_sub_cogs() {
    use lagrange_discord::Cog;

    let meta = Meta::new();
    assert_eq!(meta.command_names(), vec![BOTINFO_COMMAND, USERINFO_COMMAND]);
    assert_eq!(meta.commands().len(), 2);
}

#[test]
fn every_command_is_registered_once() {
    assert_eq!(all_commands(&cogs()).len(), 3);

    let anime = Anime::new(Arc::new(FixedSource), WidgetRegistry::default());
    assert!(anime.registry().is_empty());
}
