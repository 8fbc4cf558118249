use campus_bot::{
    commands::groups::GroupsCommand,
    configs::{app::APP_CONFIG, discord::DISCORD_CONFIGS},
    context::ContextBuilder,
    dispatch::dispatch_event,
    services::{health::HealthService, shutdown},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_interactions::command::CreateCommand;
use twilight_model::{guild::Permissions, id::Id};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("install rustls crypto provider");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if APP_CONFIG.is_local() {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let token = DISCORD_CONFIGS.discord_token.clone();
    let mut shard = Shard::new(
        ShardId::ONE,
        token,
        Intents::GUILDS | Intents::GUILD_MEMBERS,
    );

    let shutdown_token = CancellationToken::new();
    shutdown::set_token(shutdown_token.clone());

    let ctx = Arc::new(ContextBuilder::new().build().await?);

    HealthService::spawn();

    let token_clone = shutdown_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
        token_clone.cancel();
    });

    let mut groups_command = GroupsCommand::create_command();
    groups_command.default_member_permissions = Some(Permissions::MANAGE_GUILD);
    let commands = [groups_command.into()];

    let application = ctx.http.current_user_application().await?.model().await?;
    let interaction_client = ctx.http.interaction(application.id);
    match DISCORD_CONFIGS.guild_id {
        Some(guild_id) => {
            interaction_client
                .set_guild_commands(Id::new(guild_id), &commands)
                .await?;
        }
        None => {
            interaction_client.set_global_commands(&commands).await?;
        }
    }

    loop {
        tokio::select! {
            _ = shutdown_token.cancelled() => {
                break;
            }
            item = shard.next_event(EventTypeFlags::all()) => {
                let Some(item) = item else { break };
                let event = match item {
                    Ok(event) => event,
                    Err(source) => {
                        tracing::warn!(?source, "error receiving event");
                        continue;
                    }
                };

                ctx.cache.update(&event);
                tokio::spawn(dispatch_event(ctx.clone(), event));
            }
        }
    }

    tracing::info!("shutting down");
    Ok(())
}
