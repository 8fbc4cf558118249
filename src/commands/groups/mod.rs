use anyhow::Context as _;
use twilight_interactions::command::{CommandModel, CreateCommand, DescLocalizations};
use twilight_model::{
    application::{
        command::{CommandOptionChoice, CommandOptionChoiceValue},
        interaction::{
            Interaction,
            application_command::{CommandData, CommandOptionValue},
        },
    },
    channel::message::Embed,
    http::interaction::{InteractionResponse, InteractionResponseData, InteractionResponseType},
};

use crate::{
    context::Context,
    handle_ephemeral,
    services::groups::{GroupError, GroupService},
};
use std::sync::Arc;

pub mod create;
pub mod edit;
pub mod option;
pub mod render;
pub mod view;

use create::CreateGroupCommand;
use edit::{EditGroupCommand, GroupLimitsCommand, MoveGroupCommand};
use option::{OptionAddCommand, OptionRemoveCommand};
use render::RenderGroupsCommand;
use view::{DeleteGroupCommand, ListGroupsCommand, ViewGroupCommand};

#[derive(CommandModel, CreateCommand, Debug)]
#[command(name = "groups", desc_localizations = "groups_desc")]
pub enum GroupsCommand {
    #[command(name = "create")]
    Create(CreateGroupCommand),
    #[command(name = "edit")]
    Edit(EditGroupCommand),
    #[command(name = "move")]
    Move(MoveGroupCommand),
    #[command(name = "limits")]
    Limits(GroupLimitsCommand),
    #[command(name = "delete")]
    Delete(DeleteGroupCommand),
    #[command(name = "list")]
    List(ListGroupsCommand),
    #[command(name = "view")]
    View(ViewGroupCommand),
    #[command(name = "option-add")]
    OptionAdd(OptionAddCommand),
    #[command(name = "option-remove")]
    OptionRemove(OptionRemoveCommand),
    #[command(name = "render")]
    Render(RenderGroupsCommand),
}

fn groups_desc() -> DescLocalizations {
    DescLocalizations::new(
        "Manage role-selection groups",
        [("pt-BR", "Gerir grupos de seleção de roles")],
    )
}

impl GroupsCommand {
    pub async fn handle(ctx: Arc<Context>, interaction: Interaction, data: CommandData) {
        handle_ephemeral!(ctx.http, interaction, "GroupsCommand", {
            let command = GroupsCommand::from_interaction(data.into())
                .context("failed to parse command data")?;

            match command {
                GroupsCommand::Create(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::Edit(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::Move(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::Limits(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::Delete(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::List(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::View(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::OptionAdd(command) => command.run(ctx.clone(), interaction).await,
                GroupsCommand::OptionRemove(command) => {
                    command.run(ctx.clone(), interaction).await
                }
                GroupsCommand::Render(command) => command.run(ctx.clone(), interaction).await,
            }?;
        });
    }

    pub async fn autocomplete(ctx: Arc<Context>, interaction: Interaction, data: CommandData) {
        if let Err(e) = async {
            let focused = extract_focused(&data).context("parse focused field failed")?;
            let guild_id = interaction.guild_id.context("parse guild_id failed")?;

            let mut choices = Vec::with_capacity(25);

            if focused.0 == "id" {
                let prefix = focused.1.to_ascii_lowercase();
                choices.extend(
                    GroupService::list(&ctx, guild_id.get())
                        .await
                        .into_iter()
                        .filter(|group| group.group_id.starts_with(&prefix))
                        .take(25)
                        .map(|group| CommandOptionChoice {
                            name: group.group_id.clone(),
                            value: CommandOptionChoiceValue::String(group.group_id),
                            name_localizations: None,
                        }),
                );
            }

            let response = InteractionResponse {
                kind: InteractionResponseType::ApplicationCommandAutocompleteResult,
                data: Some(InteractionResponseData {
                    choices: Some(choices),
                    ..InteractionResponseData::default()
                }),
            };

            ctx.http
                .interaction(interaction.application_id)
                .create_response(interaction.id, &interaction.token, &response)
                .await?;

            Ok::<_, anyhow::Error>(())
        }
        .await
        {
            tracing::error!(error = %e, "autocomplete handler failed");
        }
    }
}

fn extract_focused(cmd: &CommandData) -> Option<(&str, &str)> {
    for opt in &cmd.options {
        if let CommandOptionValue::SubCommand(sub_opts) = &opt.value {
            for nested in sub_opts {
                if let CommandOptionValue::Focused(user_input, _) = &nested.value {
                    return Some((nested.name.as_str(), user_input.as_str()));
                }
            }
        }
    }
    None
}

pub(crate) async fn respond(
    ctx: &Arc<Context>,
    interaction: &Interaction,
    embed: Embed,
) -> anyhow::Result<()> {
    ctx.http
        .interaction(interaction.application_id)
        .update_response(&interaction.token)
        .embeds(Some(&[embed]))
        .await?;
    Ok(())
}

pub(crate) async fn respond_group_error(
    ctx: &Arc<Context>,
    interaction: &Interaction,
    error: &GroupError,
) -> anyhow::Result<()> {
    respond(
        ctx,
        interaction,
        crate::utils::embed::command_fail_embed(&error.to_string())?,
    )
    .await
}
