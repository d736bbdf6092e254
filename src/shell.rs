// file: src/shell.rs
// version: 1.0.0
// guid: 3f8a1c2d-9b4e-4f60-8a27-5d1c6e9b0a43

//! Shell command construction for the provider save script
//!
//! Builds the command line the config front ends hand to a shell: the
//! rendered configuration text is escaped for a single-quoted string and
//! piped into `bash <script>` via `echo`.

/// Escape text for embedding inside a single-quoted shell string.
///
/// Each `'` becomes the 4-character sequence `'\''`: close the quoted
/// string, emit an escaped literal quote, reopen the quoted string.
pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "'\\''")
}

/// Build the command line that pipes `config_text` into `bash <script_path>`.
///
/// Single quotes are escaped first, then every newline is replaced with the
/// two-character literal `\n` so the result stays on one line. Nothing else
/// is transformed: `script_path` is trusted as-is, and text that `echo`
/// itself could misinterpret (a leading `-n`/`-e`, backslash sequences under
/// `echo -e`-like defaults) is passed through unchanged. Callers that cannot
/// trust their input need to harden before calling this.
pub fn build_save_command(config_text: &str, script_path: &str) -> String {
    let escaped = escape_single_quotes(config_text).replace('\n', "\\n");
    format!("echo '{}' | bash {}", escaped, script_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(
            build_save_command("hello", "/tmp/run.sh"),
            "echo 'hello' | bash /tmp/run.sh"
        );
    }

    #[test]
    fn test_empty_config_text() {
        assert_eq!(
            build_save_command("", "/tmp/run.sh"),
            "echo '' | bash /tmp/run.sh"
        );
    }

    #[test]
    fn test_single_quote_becomes_quoted_escape() {
        assert_eq!(
            build_save_command("it's fine", "/tmp/run.sh"),
            "echo 'it'\\''s fine' | bash /tmp/run.sh"
        );
    }

    #[test]
    fn test_every_quote_is_escaped() {
        let command = build_save_command("a'b'c", "/tmp/run.sh");
        assert_eq!(command, "echo 'a'\\''b'\\''c' | bash /tmp/run.sh");
        // The quoting must still balance: an odd total quote count would
        // leave the shell string unterminated.
        assert_eq!(command.matches('\'').count() % 2, 0);
    }

    #[test]
    fn test_newline_becomes_literal_backslash_n() {
        let command = build_save_command("line1\nline2", "/tmp/run.sh");
        assert_eq!(command, "echo 'line1\\nline2' | bash /tmp/run.sh");
        assert!(!command.contains('\n'));
    }

    #[test]
    fn test_quotes_and_newlines_together() {
        let command = build_save_command("it's\nfine", "/tmp/run.sh");
        assert_eq!(command, "echo 'it'\\''s\\nfine' | bash /tmp/run.sh");
    }

    #[test]
    fn test_escaping_is_not_idempotent() {
        // Escaping output that is already escaped escapes the introduced
        // quotes again. That is expected: callers must escape exactly once.
        let once = escape_single_quotes("it's");
        let twice = escape_single_quotes(&once);
        assert_eq!(once, "it'\\''s");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_other_metacharacters_untouched() {
        // Only quotes and newlines are rewritten; everything else is the
        // caller's responsibility.
        assert_eq!(
            build_save_command("a $HOME `date` \\t", "/tmp/run.sh"),
            "echo 'a $HOME `date` \\t' | bash /tmp/run.sh"
        );
    }

    #[test]
    fn test_script_path_is_not_escaped() {
        assert_eq!(
            build_save_command("x", "/path with space/run.sh"),
            "echo 'x' | bash /path with space/run.sh"
        );
    }
}
