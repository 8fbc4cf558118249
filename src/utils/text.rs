/// Admin commands accept free text through slash-command options, which
/// cannot carry real newlines. The literal two-character sequence `\n` is
/// unescaped before the value reaches storage.
pub fn unescape_newlines(input: &str) -> String {
    input.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_newlines() {
        assert_eq!(unescape_newlines("a\\nb"), "a\nb");
        assert_eq!(unescape_newlines("no escapes"), "no escapes");
        assert_eq!(unescape_newlines("\\n\\n"), "\n\n");
    }
}
