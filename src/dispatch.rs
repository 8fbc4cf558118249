use std::sync::Arc;
use twilight_gateway::Event;

use crate::{
    context::Context,
    events::{guild_create, interaction_create, ready},
};

pub fn event_type(event: &Event) -> &'static str {
    match event {
        Event::InteractionCreate(_) => "interaction",
        Event::GuildCreate(_) => "guild_create",
        Event::Ready(_) => "ready",
        _ => "other",
    }
}

pub async fn dispatch_event(ctx: Arc<Context>, event: Event) {
    metrics::counter!("bot_events_total", "type" => event_type(&event)).increment(1);

    match event {
        Event::InteractionCreate(boxed) => interaction_create::handle(ctx, (*boxed).0).await,
        Event::GuildCreate(boxed) => guild_create::handle(ctx, *boxed).await,
        Event::Ready(boxed) => ready::handle(ctx, *boxed).await,
        _ => {}
    }
}
