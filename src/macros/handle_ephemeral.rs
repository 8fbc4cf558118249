/// Wraps a guild-only command body: rejects DM use, defers with an
/// ephemeral acknowledgment, and logs any error the body returns.
#[macro_export]
macro_rules! handle_ephemeral {
    ($http:expr, $interaction:ident, $name:literal, $body:block) => {{
        use tracing::Instrument;
        if let Err(e) = $crate::guild_command!($http, $interaction, true, {
            $crate::defer_interaction!($http, &$interaction, true).await?;
            $body
            Ok::<_, anyhow::Error>(())
        })
        .instrument(tracing::info_span!("command", name = $name))
        .await
        {
            tracing::error!(error = %e, "error handling {}", $name);
        }
    }};
}
