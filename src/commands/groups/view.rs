use anyhow::Context as _;
use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::application::interaction::Interaction;

use crate::{context::Context, services::groups::GroupService, utils::embed};
use std::sync::Arc;

use super::{respond, respond_group_error};
use crate::services::groups::GroupError;

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "delete", desc = "Delete a role-selection group")]
pub struct DeleteGroupCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,
}

impl DeleteGroupCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        match GroupService::delete(&ctx, &self.id).await {
            Ok(group) => {
                let description = format!(
                    "`{}` deleted. Its rendered message (if any) was left in place.",
                    group.group_id
                );
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Group deleted", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "list", desc = "List role-selection groups")]
pub struct ListGroupsCommand {}

impl ListGroupsCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        let guild_id = interaction.guild_id.context("failed to parse guild_id")?;
        let groups = GroupService::list(&ctx, guild_id.get()).await;

        let description = if groups.is_empty() {
            "No groups yet. Create one with `/groups create`.".to_string()
        } else {
            groups
                .iter()
                .map(|group| {
                    format!(
                        "`{}` — {} in <#{}>, {} options",
                        group.group_id,
                        group.mode.value(),
                        group.channel_id,
                        group.options.len()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        respond(
            &ctx,
            &interaction,
            embed::command_ok_embed("Role-selection groups", &description)?,
        )
        .await
    }
}

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "view", desc = "Show one group in detail")]
pub struct ViewGroupCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,
}

impl ViewGroupCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        let Some(group) = GroupService::get(&ctx, &self.id).await else {
            return respond_group_error(
                &ctx,
                &interaction,
                &GroupError::NotFound(self.id.clone()),
            )
            .await;
        };

        let max_text = if group.max_values < 0 {
            "all".to_string()
        } else {
            group.max_values.to_string()
        };
        let mut lines = vec![
            format!(
                "mode `{}` — channel <#{}> — pick {}..{}",
                group.mode.value(),
                group.channel_id,
                group.min_values,
                max_text
            ),
            match group.message_id {
                Some(id) => format!("rendered as message `{id}`"),
                None => "not rendered yet".to_string(),
            },
        ];
        for opt in &group.options {
            lines.push(format!(
                "• {} → <@&{}>{}",
                opt.label,
                opt.value,
                opt.description
                    .as_deref()
                    .map(|d| format!(" ({d})"))
                    .unwrap_or_default()
            ));
        }

        respond(
            &ctx,
            &interaction,
            embed::command_ok_embed(&format!("Group `{}`", group.group_id), &lines.join("\n"))?,
        )
        .await
    }
}
