#[macro_export]
macro_rules! guild_command {
    ($http:expr, $interaction:ident, $ephemeral:expr, $body:block) => {{
        async {
            use twilight_model::channel::message::MessageFlags;
            use twilight_model::http::interaction::{
                InteractionResponse, InteractionResponseData, InteractionResponseType,
            };

            if $interaction.guild_id.is_some() {
                $body
            } else {
                let response = InteractionResponse {
                    kind: InteractionResponseType::ChannelMessageWithSource,
                    data: Some(InteractionResponseData {
                        embeds: $crate::utils::embed::guild_only_embed().ok().map(|e| vec![e]),
                        flags: Some(MessageFlags::EPHEMERAL),
                        ..Default::default()
                    }),
                };
                if let Err(e) = $http
                    .interaction($interaction.application_id)
                    .create_response($interaction.id, &$interaction.token, &response)
                    .await
                {
                    tracing::warn!(error = %e, "failed to send guild-only response");
                }
                Ok::<(), anyhow::Error>(())
            }
        }
    }};
}
