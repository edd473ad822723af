//! Property-based checks for the escaping codec and for how the parser
//! accounts for every byte of its input.

use proptest::prelude::*;
use tagtext_engine::escaping::{ESCAPE_TABLE, escape, remove_escaping, restore_original_escaping};
use tagtext_engine::{
    HandlerError, ParsedTag, TagContext, TagRegistry, TextNode, parse, parse_with,
};

/// Echoes `<x>` plus the body it consumed, after parsing that body.
fn echo_body(tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
    let body = tag.parse_body();
    let consumed = restore_original_escaping(&tag.remainder[..body.consumed]);
    Ok(ParsedTag::new(
        Some(TextNode::literal(format!("<{}>{consumed}", tag.name))),
        body.consumed,
    ))
}

/// Echoes `<y:DATA>` and consumes nothing.
fn echo_standalone(tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
    let data = restore_original_escaping(tag.data);
    Ok(ParsedTag::standalone(TextNode::literal(format!(
        "<{}:{data}>",
        tag.name
    ))))
}

fn echo_registry() -> TagRegistry {
    let mut registry = TagRegistry::new();
    registry
        .register("x", echo_body)
        .register("y", echo_standalone);
    registry
}

/// Markup built from whole tokens, so every `<` is either escaped or starts
/// one of the listed tags.
fn tagged_markup() -> impl Strategy<Value = String> {
    let tokens = vec![
        "a", "b", " ", ":", "'", ">", "\\<", "\\", "\\:", "<x>", "</x>", "<y:1>",
        "<y:'q:r'>", "</y>", "<z>", "</z>",
    ];
    prop::collection::vec(prop::sample::select(tokens), 0..40).prop_map(|v| v.concat())
}

fn literal_alphabet() -> impl Strategy<Value = String> {
    let chars: Vec<&'static str> = ESCAPE_TABLE.iter().map(|e| e.literal).collect();
    prop::collection::vec(prop::sample::select(chars), 0..40).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn restore_inverts_escape(s in "[a-z<>:'\"&{}$%\\\\ ]{0,60}") {
        prop_assert_eq!(restore_original_escaping(&escape(&s)), s);
    }

    #[test]
    fn remove_escaping_yields_escaped_characters(s in literal_alphabet()) {
        let escaped: String = s.chars().flat_map(|c| ['\\', c]).collect();
        prop_assert_eq!(remove_escaping(&escape(&escaped)), s);
    }

    #[test]
    fn text_without_tags_is_one_literal(s in "[^<\u{2}]{1,60}") {
        prop_assert_eq!(parse(&s), vec![TextNode::literal(s.clone())]);
    }

    /// With nothing registered every span is kept as text, so the literals
    /// put back together give the input.
    #[test]
    fn undispatched_spans_reconstruct_input(s in "[a-q<>/:'#\\\\ ]{0,60}") {
        let nodes = parse_with(&s, &TagRegistry::new());
        let joined: String = nodes.iter().filter_map(TextNode::as_literal).collect();
        prop_assert_eq!(joined, s);
    }

    /// Literal text plus every span a handler consumed rebuilds the input.
    #[test]
    fn consumed_spans_reconstruct_input(s in tagged_markup()) {
        let nodes = parse_with(&s, &echo_registry());
        let joined: String = nodes.iter().filter_map(TextNode::as_literal).collect();
        prop_assert_eq!(joined, s);
    }

    #[test]
    fn parse_never_panics(s in "\\PC{0,80}") {
        let _ = parse(&s);
    }
}
