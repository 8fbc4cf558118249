use std::mem;
use twilight_model::application::interaction::{Interaction, InteractionData, InteractionType};

use crate::{
    commands::groups::GroupsCommand, context::Context,
    services::role_selection::RoleSelectionService,
};
use std::sync::Arc;

pub async fn handle(ctx: Arc<Context>, interaction: Interaction) {
    let Some(user) = interaction.author() else {
        return;
    };
    if user.bot | user.system.unwrap_or_default() {
        return;
    }

    let mut interaction = interaction;

    let data = match mem::take(&mut interaction.data) {
        Some(InteractionData::ApplicationCommand(data)) => {
            if interaction.kind == InteractionType::ApplicationCommandAutocomplete {
                if &*data.name == "groups" {
                    GroupsCommand::autocomplete(ctx, interaction, *data).await;
                }
                return;
            }
            *data
        }
        Some(InteractionData::MessageComponent(data)) => {
            RoleSelectionService::handle_component(ctx, interaction, *data).await;
            return;
        }
        _ => {
            tracing::warn!("ignoring unsupported interaction");
            return;
        }
    };

    match &*data.name {
        "groups" => {
            GroupsCommand::handle(ctx, interaction, data).await;
        }
        _ => {}
    }
}
