//! # Tag Scanner
//!
//! Locates the next `<name(:segment)*>` occurrence at or after a byte offset.
//!
//! A segment is either single-quoted (may then contain `:`, `<`, `>` and
//! backslash-escaped quotes) or unquoted (anything but `'`, `<`, `>`, `:`).
//! Closing tags (`</name>`) never match because names cannot contain `/`.
//! Scanning resumes from the caller's cursor, so earlier text is never
//! re-scanned.

use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?P<id>[^<>/:]+)(?P<data>(?::(?:'(?:[^'\\]|\\.)*'|[^'<>:]*))*)>")
        .expect("tag pattern is valid")
});

/// Tag name forced for `<#rrggbb>` shorthand.
pub const COLOR_TAG: &str = "color";

/// A parsed tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    /// Lowercased handler name (`color` for hex shorthand).
    pub name: String,
    /// Lowercased name as written, used to build the closing literal.
    pub id: String,
    /// Raw data after the first `:` (case preserved, still escaped).
    pub data: String,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
}

impl TagToken {
    /// Returns `true` for the built-in `reset` / `r` directive.
    pub fn is_reset(&self) -> bool {
        matches!(self.name.as_str(), "reset" | "r")
    }

    /// The closing literal that ends this tag's body, e.g. `</bold>`.
    ///
    /// Hex shorthand closes with its own spelling: `<#ff0000>..</#ff0000>`.
    pub fn closing_literal(&self) -> String {
        format!("</{}>", self.id)
    }
}

/// Finds the first tag starting at or after `from`.
///
/// `from` must lie on a char boundary of `input`.
pub fn find_tag(input: &str, from: usize) -> Option<TagToken> {
    if from >= input.len() {
        return None;
    }
    let caps = TAG_PATTERN.captures_at(input, from)?;
    let whole = caps.get(0)?;
    let id = caps.name("id")?.as_str().to_lowercase();
    let data = caps
        .name("data")
        .map(|m| m.as_str().strip_prefix(':').unwrap_or(m.as_str()))
        .unwrap_or_default();

    let (name, data) = if id.starts_with('#') {
        (COLOR_TAG.to_owned(), id.clone())
    } else {
        (id.clone(), data.to_owned())
    };

    Some(TagToken {
        name,
        id,
        data,
        start: whole.start(),
        end: whole.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn token(input: &str) -> TagToken {
        find_tag(input, 0).expect("tag should match")
    }

    #[test]
    fn splits_name_and_data() {
        let t = token("say <Color:Red> hi");
        assert_eq!(t.name, "color");
        assert_eq!(t.data, "Red");
        assert_eq!((t.start, t.end), (4, 15));
        assert_eq!(t.closing_literal(), "</color>");
    }

    #[test]
    fn tag_without_data() {
        let t = token("<bold>");
        assert_eq!(t.name, "bold");
        assert_eq!(t.data, "");
    }

    #[test]
    fn keeps_every_segment_in_data() {
        let t = token("<lang:'item.name':'a:b':plain>");
        assert_eq!(t.name, "lang");
        assert_eq!(t.data, "'item.name':'a:b':plain");
    }

    #[test]
    fn quoted_segment_may_contain_brackets() {
        let t = token("<raw:'{\"text\":\"<b>\"}'>rest");
        assert_eq!(t.data, "'{\"text\":\"<b>\"}'");
        assert_eq!(t.end, 22);
    }

    #[test]
    fn quoted_segment_with_escaped_quote() {
        let t = token(r"<key:'it\'s'>");
        assert_eq!(t.data, r"'it\'s'");
    }

    #[test]
    fn hex_shorthand_becomes_color() {
        let t = token("<#FF0000>");
        assert_eq!(t.name, "color");
        assert_eq!(t.data, "#ff0000");
        assert_eq!(t.closing_literal(), "</#ff0000>");
    }

    #[rstest]
    #[case::closing_tag("</bold>")]
    #[case::unterminated_quote("<key:'open>")]
    #[case::no_closing_bracket("<bold")]
    #[case::empty_name("<>")]
    #[case::text_after_quote("<key:'a'b>")]
    fn rejects(#[case] input: &str) {
        assert_eq!(find_tag(input, 0), None);
    }

    #[test]
    fn nested_open_bracket_restarts_match() {
        let t = token("<a<b>");
        assert_eq!(t.name, "b");
        assert_eq!(t.start, 2);
    }

    #[test]
    fn resumes_from_offset() {
        let input = "<a>x<b>";
        assert_eq!(find_tag(input, 0).map(|t| t.name), Some("a".into()));
        assert_eq!(find_tag(input, 1).map(|t| t.name), Some("b".into()));
        assert_eq!(find_tag(input, 7), None);
    }

    #[test]
    fn reset_directive() {
        assert!(token("<reset>").is_reset());
        assert!(token("<R>").is_reset());
        assert!(!token("<red>").is_reset());
    }
}
