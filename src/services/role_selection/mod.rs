pub mod custom_id;
pub mod injector;
pub mod renderer;
pub mod resolver;

use std::sync::Arc;

use anyhow::Context as _;
use twilight_model::application::interaction::{
    Interaction, message_component::MessageComponentInteractionData,
};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, GuildMarker, RoleMarker, UserMarker},
};

use crate::{
    configs::TOURIST_SCOPE,
    context::Context,
    defer_interaction,
    services::{
        config::ConfigService,
        courses::CourseService,
        groups::{GroupService, validate::is_text_channel},
    },
};

pub use custom_id::ComponentId;
pub use injector::{EffectiveGroup, MessageStore, build_effective_groups};
pub use renderer::{RenderError, RenderPlan};

/// Outcome counters of one render pass, reported back to the invoking
/// admin as a whole; per-group detail goes to the log only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub sent: u32,
    pub edited: u32,
    pub skipped: u32,
    pub failed: u32,
}

enum RenderOutcome {
    Sent,
    Edited,
    Skipped,
}

pub struct RoleSelectionService;

impl RoleSelectionService {
    /// One render pass over every effective group. Groups fail one at a
    /// time: a bad channel or an over-limit grid is logged and counted,
    /// never aborting the rest of the pass.
    pub async fn render_all(
        ctx: &Arc<Context>,
        guild_id: Id<GuildMarker>,
        force_edit: bool,
    ) -> RenderSummary {
        let groups = build_effective_groups(ctx, guild_id.get()).await;
        let mut summary = RenderSummary::default();

        for effective in &groups {
            match Self::render_group(ctx, effective, force_edit).await {
                Ok(RenderOutcome::Sent) => summary.sent += 1,
                Ok(RenderOutcome::Edited) => summary.edited += 1,
                Ok(RenderOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        group_id = %effective.group.group_id,
                        error = %e,
                        "failed to render role group"
                    );
                }
            }
        }

        summary
    }

    async fn render_group(
        ctx: &Arc<Context>,
        effective: &EffectiveGroup,
        force_edit: bool,
    ) -> anyhow::Result<RenderOutcome> {
        let group = &effective.group;
        let channel_id: Id<ChannelMarker> = Id::new(group.channel_id);

        match ctx.cache.channel(channel_id) {
            Some(channel) if is_text_channel(channel.kind) => {}
            _ => anyhow::bail!("channel {channel_id} is missing or not a text channel"),
        }

        let plan = renderer::plan(group)?;

        let existing = match group.message_id {
            Some(message_id) => {
                let message_id = Id::new(message_id);
                ctx.http
                    .message(channel_id, message_id)
                    .await
                    .is_ok()
                    .then_some(message_id)
            }
            None => None,
        };

        match renderer::decide_action(existing.is_some(), force_edit) {
            renderer::RenderAction::Skip => return Ok(RenderOutcome::Skipped),
            renderer::RenderAction::Edit => {
                let message_id = existing.context("edit decided without a message")?;
                ctx.http
                    .update_message(channel_id, message_id)
                    .content(Some(&plan.content))
                    .components(Some(&plan.components))
                    .await?;
                return Ok(RenderOutcome::Edited);
            }
            renderer::RenderAction::Send => {}
        }

        let message = ctx
            .http
            .create_message(channel_id)
            .content(&plan.content)
            .components(&plan.components)
            .await?
            .model()
            .await?;

        Self::store_message_id(ctx, &effective.store, message.id.get()).await;
        Ok(RenderOutcome::Sent)
    }

    async fn store_message_id(ctx: &Arc<Context>, store: &MessageStore, message_id: u64) {
        match store {
            MessageStore::GroupRow { group_id } => {
                GroupService::set_message_id(ctx, group_id, message_id).await;
            }
            MessageStore::ConfigKey { key } => {
                if let Err(e) = ConfigService::upsert(ctx, key, &message_id.to_string()).await {
                    tracing::warn!(key, message_id, error = %e, "failed to persist rendered message id");
                }
            }
            MessageStore::CoursePanel { channel_id, year } => {
                CourseService::set_panel_message(ctx, *channel_id, *year, message_id).await;
            }
        }
    }

    /// Applies a selection event end to end. Returns whether the member's
    /// roles were updated; every failure path collapses to `false` for the
    /// caller and the specifics go to the log.
    pub async fn apply_selection(
        ctx: &Arc<Context>,
        guild_id: Id<GuildMarker>,
        user_id: Id<UserMarker>,
        current_roles: &[Id<RoleMarker>],
        component: &ComponentId,
        selected: &[u64],
    ) -> bool {
        let group_id = component.group_id();

        let result = async {
            let groups = build_effective_groups(ctx, guild_id.get()).await;
            let exclusive_csv =
                ConfigService::get_scoped(ctx, TOURIST_SCOPE, "exclusive_groups").await;
            let exclusive = resolver::exclusive_group_ids(exclusive_csv.as_deref());

            let Some(domain) =
                resolver::exclusivity_domain(group_id, &groups, &exclusive, selected)
            else {
                tracing::warn!(group_id, "selection against unknown group");
                return Ok(false);
            };

            let current: Vec<u64> = current_roles.iter().map(|id| id.get()).collect();
            let Some(next) = resolver::compute_roles(&current, selected, &domain) else {
                tracing::warn!(group_id, ?selected, "selection outside the group's domain");
                return Ok(false);
            };

            let role_ids: Vec<Id<RoleMarker>> = next.into_iter().map(Id::new).collect();

            // Single set-operation: the member never passes through an
            // intermediate role state.
            ctx.http
                .update_guild_member(guild_id, user_id)
                .roles(&role_ids)
                .await?;

            Ok::<bool, anyhow::Error>(true)
        }
        .await;

        match result {
            Ok(applied) => applied,
            Err(e) => {
                tracing::error!(group_id, ?selected, error = %e, "failed to apply role selection");
                false
            }
        }
    }

    /// Entry point for button and menu interactions claimed by the
    /// selection engine. The user only ever sees a generic success or
    /// failure acknowledgment.
    pub async fn handle_component(
        ctx: Arc<Context>,
        interaction: Interaction,
        data: MessageComponentInteractionData,
    ) {
        let Some(component) = ComponentId::parse(&data.custom_id) else {
            return;
        };

        if let Err(e) = async {
            let guild_id = interaction.guild_id.context("component outside a guild")?;
            let member = interaction
                .member
                .as_ref()
                .context("component interaction without member")?;
            let user_id = interaction
                .author_id()
                .context("component interaction without author")?;

            defer_interaction!(ctx.http, &interaction, true).await?;

            let selected: Option<Vec<u64>> = match &component {
                ComponentId::Button { role_id, .. } => Some(vec![*role_id]),
                ComponentId::Menu { .. } => data
                    .values
                    .iter()
                    .map(|value| value.parse::<u64>().ok())
                    .collect(),
            };

            let applied = match selected {
                Some(selected) => {
                    Self::apply_selection(
                        &ctx,
                        guild_id,
                        user_id,
                        &member.roles,
                        &component,
                        &selected,
                    )
                    .await
                }
                None => {
                    tracing::warn!(custom_id = %data.custom_id, "non-numeric menu values");
                    false
                }
            };

            let outcome = if applied { "applied" } else { "rejected" };
            metrics::counter!("bot_selection_total", "outcome" => outcome).increment(1);

            let content = if applied {
                "Role selection applied."
            } else {
                "Could not apply that selection. Try again from the current message."
            };
            ctx.http
                .interaction(interaction.application_id)
                .update_response(&interaction.token)
                .content(Some(content))
                .await?;

            Ok::<_, anyhow::Error>(())
        }
        .await
        {
            tracing::error!(custom_id = %data.custom_id, error = %e, "component handler failed");
        }
    }
}

#[cfg(test)]
mod tests;
