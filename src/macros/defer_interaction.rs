#[macro_export]
macro_rules! defer_interaction {
    ($http:expr, $interaction:expr, $ephemeral:expr) => {{
        use twilight_model::channel::message::MessageFlags;
        use twilight_model::http::interaction::{
            InteractionResponse, InteractionResponseData, InteractionResponseType,
        };
        async {
            let flags = $ephemeral.then_some(MessageFlags::EPHEMERAL);
            let response = InteractionResponse {
                kind: InteractionResponseType::DeferredChannelMessageWithSource,
                data: Some(InteractionResponseData {
                    flags,
                    ..Default::default()
                }),
            };
            $http
                .interaction($interaction.application_id)
                .create_response($interaction.id, &$interaction.token, &response)
                .await?;
            Ok::<_, anyhow::Error>(())
        }
    }};
}
