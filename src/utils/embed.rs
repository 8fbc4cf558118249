use twilight_model::channel::message::Embed;
use twilight_util::builder::embed::EmbedBuilder;

pub(crate) const COLOR: u32 = 0x009DE0;
pub(crate) const COLOR_INVALID: u32 = 0xE74C3C;

pub fn guild_only_embed() -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(COLOR_INVALID)
        .title("This command can only be used in a server")
        .validate()?
        .build();
    Ok(embed)
}

pub fn command_ok_embed(title: &str, description: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(COLOR)
        .title(title)
        .description(description)
        .validate()?
        .build();
    Ok(embed)
}

pub fn command_fail_embed(reason: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(COLOR_INVALID)
        .title("Command failed")
        .description(reason)
        .validate()?
        .build();
    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ok_embed() {
        let embed = command_ok_embed("Group created", "`degree` is ready").unwrap();
        assert_eq!(embed.title.as_deref(), Some("Group created"));
        assert_eq!(embed.color, Some(COLOR));
    }

    #[test]
    fn test_command_fail_embed() {
        let embed = command_fail_embed("no such group").unwrap();
        assert_eq!(embed.color, Some(COLOR_INVALID));
        assert_eq!(embed.description.as_deref(), Some("no such group"));
    }
}
