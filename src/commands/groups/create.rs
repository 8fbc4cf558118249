use anyhow::Context as _;
use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::{
    application::interaction::Interaction,
    id::{Id, marker::ChannelMarker},
};

use crate::{
    context::Context,
    dbs::mongo::models::role_group::GroupMode,
    services::groups::{GroupService, NewGroup},
    utils::embed,
};
use std::sync::Arc;

use super::{respond, respond_group_error};

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "create", desc = "Create a role-selection group")]
pub struct CreateGroupCommand {
    #[command(desc = "Group identifier, lowercase snake_case")]
    pub id: String,

    #[command(desc = "Rendering mode")]
    pub mode: GroupMode,

    #[command(desc = "Message shown above the selector (literal \\n for a newline)")]
    pub message: String,

    #[command(
        desc = "Channel the group renders into",
        channel_types = "guild_text guild_announcement"
    )]
    pub channel: Id<ChannelMarker>,

    #[command(desc = "Placeholder shown on an empty menu")]
    pub placeholder: Option<String>,

    #[command(desc = "Minimum selections, default 1", min_value = 1, max_value = 25)]
    pub min: Option<i64>,

    #[command(desc = "Maximum selections, negative for all, default 1", max_value = 25)]
    pub max: Option<i64>,
}

impl CreateGroupCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        let guild_id = interaction.guild_id.context("failed to parse guild_id")?;

        let new = NewGroup {
            group_id: self.id.clone(),
            mode: self.mode,
            placeholder: self.placeholder.clone(),
            message: self.message.clone(),
            guild_id: guild_id.get(),
            channel_id: self.channel.get(),
            min_values: self.min.unwrap_or(1),
            max_values: self.max.unwrap_or(1),
        };

        match GroupService::create(&ctx, new).await {
            Ok(group) => {
                let description = format!(
                    "`{}` will render in <#{}> on the next render pass. Add options with \
                     `/groups option-add`.",
                    group.group_id, group.channel_id
                );
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Group created", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}
