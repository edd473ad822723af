//! # Escaping Codec
//!
//! Authors escape syntax-significant characters with a backslash (`\<`,
//! `\:`, `\\`, ...). Before scanning, every escape sequence is swapped for a
//! sentinel that can never be mistaken for live markup; once a span has been
//! scanned over, the sentinels are turned back into either the bare character
//! (tag arguments) or the original escape sequence (literal text).
//!
//! The table order is significant: the backslash entry comes first so that
//! `\\<` escapes the backslash and leaves `<` live.

/// One row of the escape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeEntry {
    /// The character as it appears once unescaped.
    pub literal: &'static str,
    /// The author-written escape sequence (`\` + literal).
    pub escaped: &'static str,
    /// Placeholder substituted while scanning.
    pub sentinel: &'static str,
}

const fn entry(literal: &'static str, escaped: &'static str, sentinel: &'static str) -> EscapeEntry {
    EscapeEntry {
        literal,
        escaped,
        sentinel,
    }
}

/// Every sentinel ends with this control character, which never appears in
/// author-written markup.
pub const SENTINEL_MARK: char = '\u{2}';

/// Fixed, ordered escape table.
pub const ESCAPE_TABLE: [EscapeEntry; 11] = [
    entry("\\", "\\\\", "&slsh;\u{2}"),
    entry("<", "\\<", "&lt;\u{2}"),
    entry(">", "\\>", "&gt;\u{2}"),
    entry("\"", "\\\"", "&quot;\u{2}"),
    entry("'", "\\'", "&pos;\u{2}"),
    entry(":", "\\:", "&colon;\u{2}"),
    entry("&", "\\&", "&amps;\u{2}"),
    entry("{", "\\{", "&openbrac;\u{2}"),
    entry("}", "\\}", "&closebrac;\u{2}"),
    entry("$", "\\$", "&dolar;\u{2}"),
    entry("%", "\\%", "&perc;\u{2}"),
];

/// Replaces every escape sequence with its sentinel.
pub fn escape(input: &str) -> String {
    if !input.contains('\\') {
        return input.to_owned();
    }
    let mut out = input.to_owned();
    for e in &ESCAPE_TABLE {
        if out.contains(e.escaped) {
            out = out.replace(e.escaped, e.sentinel);
        }
    }
    out
}

/// Replaces each sentinel with the bare character, dropping the backslash.
///
/// Used when a value is consumed as a tag argument.
pub fn remove_escaping(input: &str) -> String {
    replace_sentinels(input, |e| e.literal)
}

/// Replaces each sentinel with the original escape sequence.
///
/// Used for literal text so it stays escaped if it is parsed again.
pub fn restore_original_escaping(input: &str) -> String {
    replace_sentinels(input, |e| e.escaped)
}

fn replace_sentinels(input: &str, with: impl Fn(&EscapeEntry) -> &'static str) -> String {
    if !input.contains(SENTINEL_MARK) {
        return input.to_owned();
    }
    let mut out = input.to_owned();
    for e in &ESCAPE_TABLE {
        if out.contains(e.sentinel) {
            out = out.replace(e.sentinel, with(e));
        }
    }
    out
}

/// Strips exactly one layer of single quotes, if present on both ends.
pub fn clean_argument(input: &str) -> &str {
    if input.len() >= 2 && input.starts_with('\'') && input.ends_with('\'') {
        &input[1..input.len() - 1]
    } else {
        input
    }
}

/// Turns markup-form literal text into the text a reader sees.
pub fn unescape(markup: &str) -> String {
    remove_escaping(&escape(markup))
}

/// Escapes display text so it parses back as the same literal text.
pub fn escape_literal(text: &str) -> String {
    backslash_escape(text, &['\\', '<', '>'])
}

/// Wraps a value in single quotes so it can be used as a tag argument.
///
/// Backslashes and quotes inside the value are escaped; a handler reading
/// the argument with [`clean_argument`] + [`remove_escaping`] gets the value
/// back unchanged.
pub fn quote_argument(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    out.push_str(&backslash_escape(value, &['\\', '\'']));
    out.push('\'');
    out
}

fn backslash_escape(text: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if special.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_without_backslash_is_identity() {
        assert_eq!(escape("<bold>plain: text</bold>"), "<bold>plain: text</bold>");
    }

    #[test]
    fn escape_swaps_sequences_for_sentinels() {
        assert_eq!(escape("a\\<b"), "a&lt;\u{2}b");
        assert_eq!(escape("\\:"), "&colon;\u{2}");
    }

    #[test]
    fn escaped_backslash_leaves_following_char_live() {
        // `\\<` is an escaped backslash followed by a real `<`
        assert_eq!(escape("\\\\<b>"), "&slsh;\u{2}<b>");
    }

    #[test]
    fn remove_escaping_drops_backslash() {
        assert_eq!(remove_escaping(&escape("it\\'s \\<ok\\>")), "it's <ok>");
    }

    #[test]
    fn restore_original_escaping_keeps_backslash() {
        let input = "it\\'s \\<ok\\> \\\\ done";
        assert_eq!(restore_original_escaping(&escape(input)), input);
    }

    #[test]
    fn restore_is_noop_without_sentinels() {
        assert_eq!(restore_original_escaping("nothing & here"), "nothing & here");
        assert_eq!(remove_escaping("nothing & here"), "nothing & here");
    }

    #[test]
    fn unknown_escape_is_left_alone() {
        assert_eq!(escape("C:\\path"), "C:\\path");
        assert_eq!(unescape("C:\\path"), "C:\\path");
    }

    #[test]
    fn clean_argument_strips_one_layer() {
        assert_eq!(clean_argument("'a:b'"), "a:b");
        assert_eq!(clean_argument("''x''"), "'x'");
        assert_eq!(clean_argument("'"), "'");
        assert_eq!(clean_argument("''"), "");
        assert_eq!(clean_argument("plain"), "plain");
        assert_eq!(clean_argument("'half"), "'half");
    }

    #[test]
    fn quote_argument_reads_back_through_handler_path() {
        let value = "it's a\\b";
        let quoted = quote_argument(value);
        assert_eq!(quoted, "'it\\'s a\\\\b'");
        assert_eq!(remove_escaping(clean_argument(&escape(&quoted))), value);
    }

    #[test]
    fn escape_literal_round_trips_through_unescape() {
        let text = "1 < 2 > 0 \\ end";
        assert_eq!(unescape(&escape_literal(text)), text);
    }
}
