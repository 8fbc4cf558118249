use twilight_model::gateway::payload::incoming::GuildCreate;

use crate::{context::Context, services::role_selection::RoleSelectionService};
use std::sync::Arc;

/// Guild data (channels included) only becomes available here, not at
/// `Ready`, so this is where the startup render pass runs.
pub async fn handle(ctx: Arc<Context>, event: GuildCreate) {
    let guild_id = event.id();

    let summary = RoleSelectionService::render_all(&ctx, guild_id, false).await;
    tracing::info!(
        guild_id = guild_id.get(),
        sent = summary.sent,
        edited = summary.edited,
        skipped = summary.skipped,
        failed = summary.failed,
        "role-selection render pass complete"
    );
}
