use twilight_interactions::command::{CommandModel, CreateCommand};
use twilight_model::{
    application::interaction::Interaction,
    id::{Id, marker::RoleMarker},
};

use crate::{
    context::Context,
    dbs::mongo::models::role_group::RoleGroupOption,
    services::groups::GroupService,
    utils::embed,
};
use std::sync::Arc;

use super::{respond, respond_group_error};

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "option-add", desc = "Add a selectable role to a group")]
pub struct OptionAddCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,

    #[command(desc = "Role granted by this option")]
    pub role: Id<RoleMarker>,

    #[command(desc = "Option label")]
    pub label: String,

    #[command(desc = "Menu sub-text, or button style keyword in button mode")]
    pub description: Option<String>,

    #[command(desc = "Emoji shown beside the label")]
    pub emoji: Option<String>,
}

impl OptionAddCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        let option = RoleGroupOption {
            label: self.label.clone(),
            description: self.description.clone(),
            value: self.role.get(),
            emoji: self.emoji.clone(),
        };

        match GroupService::add_option(&ctx, &self.id, option).await {
            Ok(group) => {
                let description = format!(
                    "`{}` now offers **{}** (<@&{}>).",
                    group.group_id, self.label, self.role
                );
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Option added", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "option-remove", desc = "Remove a selectable role from a group")]
pub struct OptionRemoveCommand {
    #[command(desc = "Group identifier", autocomplete = true)]
    pub id: String,

    #[command(desc = "Role to remove")]
    pub role: Id<RoleMarker>,
}

impl OptionRemoveCommand {
    pub async fn run(&self, ctx: Arc<Context>, interaction: Interaction) -> anyhow::Result<()> {
        match GroupService::remove_option(&ctx, &self.id, self.role.get()).await {
            Ok(group) => {
                let description =
                    format!("<@&{}> removed from `{}`.", self.role, group.group_id);
                respond(
                    &ctx,
                    &interaction,
                    embed::command_ok_embed("Option removed", &description)?,
                )
                .await
            }
            Err(e) => respond_group_error(&ctx, &interaction, &e).await,
        }
    }
}
