use twilight_model::channel::message::component::ButtonStyle;

/// In button mode a group option's description field doubles as the button
/// style keyword. Unrecognized keywords fall back to `Primary`.
pub fn parse_button_style(style: Option<&str>) -> ButtonStyle {
    match style {
        Some("SECONDARY") => ButtonStyle::Secondary,
        Some("SUCCESS") => ButtonStyle::Success,
        Some("DANGER") => ButtonStyle::Danger,
        Some("LINK") => ButtonStyle::Link,
        _ => ButtonStyle::Primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keywords() {
        assert_eq!(parse_button_style(Some("PRIMARY")), ButtonStyle::Primary);
        assert_eq!(
            parse_button_style(Some("SECONDARY")),
            ButtonStyle::Secondary
        );
        assert_eq!(parse_button_style(Some("SUCCESS")), ButtonStyle::Success);
        assert_eq!(parse_button_style(Some("DANGER")), ButtonStyle::Danger);
        assert_eq!(parse_button_style(Some("LINK")), ButtonStyle::Link);
    }

    #[test]
    fn test_unrecognized_defaults_to_primary() {
        assert_eq!(parse_button_style(Some("primary")), ButtonStyle::Primary);
        assert_eq!(parse_button_style(Some("fancy")), ButtonStyle::Primary);
        assert_eq!(parse_button_style(None), ButtonStyle::Primary);
    }
}
