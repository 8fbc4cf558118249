use anyhow::Context as _;
use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::application::interaction::Interaction;

use crate::{context::Context, services::role_selection::RoleSelectionService, utils::embed};
use std::sync::Arc;

use super::respond;

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "render", desc = "Send or refresh the role-selection messages")]
pub struct RenderGroupsCommand {
    #[command(desc = "Edit existing messages in place instead of skipping them")]
    pub force: Option<bool>,
}

impl RenderGroupsCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        let guild_id = interaction.guild_id.context("failed to parse guild_id")?;

        let summary =
            RoleSelectionService::render_all(&ctx, guild_id, self.force.unwrap_or_default()).await;

        let description = format!(
            "{} sent, {} edited, {} already up to date, {} failed (see logs).",
            summary.sent, summary.edited, summary.skipped, summary.failed
        );
        let embed = if summary.failed == 0 {
            embed::command_ok_embed("Render pass complete", &description)?
        } else {
            embed::command_fail_embed(&description)?
        };
        respond(&ctx, &interaction, embed).await
    }
}
