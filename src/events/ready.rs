use twilight_model::gateway::payload::incoming::Ready;

use crate::{context::Context, services::health::HealthService};
use std::sync::Arc;

pub async fn handle(_ctx: Arc<Context>, event: Ready) {
    HealthService::set_ready(true);
    HealthService::set_discord(true);

    tracing::info!(user = %event.user.name, guilds = event.guilds.len(), "logged in");
}
