use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::{
    application::interaction::Interaction,
    id::{Id, marker::ChannelMarker},
};

use crate::{context::Context, services::groups::GroupService, utils::embed};
use std::sync::Arc;

use super::{respond, respond_group_error};

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "edit", desc = "Edit a group's message or placeholder")]
pub struct EditGroupCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,

    #[command(desc = "New message (literal \\n for a newline)")]
    pub message: Option<String>,

    #[command(desc = "New menu placeholder")]
    pub placeholder: Option<String>,
}

impl EditGroupCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        match GroupService::edit_text(
            &ctx,
            &self.id,
            self.message.as_deref(),
            self.placeholder.as_deref(),
        )
        .await
        {
            Ok(group) => {
                let description = format!(
                    "`{}` updated. Run `/groups render force:true` to refresh the message.",
                    group.group_id
                );
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Group updated", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "move", desc = "Move a group to another channel")]
pub struct MoveGroupCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,

    #[command(
        desc = "Target channel",
        channel_types = "guild_text guild_announcement"
    )]
    pub channel: Id<ChannelMarker>,
}

impl MoveGroupCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        match GroupService::move_channel(&ctx, &self.id, self.channel.get()).await {
            Ok(group) => {
                let description = format!(
                    "`{}` now renders in <#{}>; the next render pass sends a fresh message there.",
                    group.group_id,
                    self.channel.get()
                );
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Group moved", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "limits", desc = "Set how many options can be picked at once")]
pub struct GroupLimitsCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,

    #[command(desc = "Minimum selections", min_value = 1, max_value = 25)]
    pub min: i64,

    #[command(desc = "Maximum selections, negative for all", max_value = 25)]
    pub max: i64,
}

impl GroupLimitsCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        match GroupService::set_cardinality(&ctx, &self.id, self.min, self.max).await {
            Ok(group) => {
                let max_text = if self.max < 0 {
                    "all options".to_string()
                } else {
                    self.max.to_string()
                };
                let description = format!(
                    "`{}` now allows between {} and {} selections.",
                    group.group_id, self.min, max_text
                );
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Limits updated", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}
