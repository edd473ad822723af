//! # Recursive Descent Parser
//!
//! Walks an (already escaped) input region, flushing the text between tags
//! as literals and dispatching each tag to its handler. Handlers parse their
//! own bodies by calling back into [`parse_region`] with their closing
//! literal as the terminator.
//!
//! ## Reset directive
//!
//! `<reset>` / `<r>` is handled here rather than by a handler:
//! - at top level it is dropped and parsing carries on;
//! - inside a body the region ends right before it and the tag is left for
//!   the caller, so one reset unwinds every open tag in turn.
//!
//! ## Progress
//!
//! Every dispatched tag advances the cursor past the tag itself, whatever the
//! handler reports. Reported lengths that overrun the remainder or split a
//! UTF-8 character are rejected and the tag is dropped.
//!
//! ## Nesting
//!
//! Body recursion stops at [`MAX_NESTING_DEPTH`]: a region at that depth
//! dispatches no tags, so anything nested deeper stays literal text.

use crate::error::HandlerError;
use crate::escaping::{escape, restore_original_escaping};
use crate::nodes::TextNode;
use crate::registry::TagRegistry;
use crate::resolver::{ParsedTag, TagContext, TagResolver};
use crate::scanner::{self, TagToken};

/// Deepest body nesting the parser descends into.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Nodes parsed from a region plus how many bytes of the region were used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList {
    pub nodes: Vec<TextNode>,
    pub consumed: usize,
}

impl NodeList {
    pub fn new(nodes: Vec<TextNode>, consumed: usize) -> Self {
        Self { nodes, consumed }
    }
}

/// Parses markup with the built-in tag set.
pub fn parse(input: &str) -> Vec<TextNode> {
    parse_with(input, TagRegistry::global())
}

/// Parses markup with the given resolver.
///
/// Escapes the whole input once, then parses it as a top-level region.
pub fn parse_with(input: &str, resolver: &dyn TagResolver) -> Vec<TextNode> {
    parse_region(&escape(input), resolver, None).nodes
}

/// Parses an escaped top-level region, optionally bounded by `end_at`.
pub fn parse_region(input: &str, resolver: &dyn TagResolver, end_at: Option<&str>) -> NodeList {
    parse_region_at(input, resolver, end_at, 0)
}

/// Parses an escaped region found `depth` bodies below the top level.
pub fn parse_region_at(
    input: &str,
    resolver: &dyn TagResolver,
    end_at: Option<&str>,
    depth: usize,
) -> NodeList {
    if input.is_empty() {
        return NodeList::default();
    }

    let mut nodes = Vec::new();
    let mut current_pos = 0;
    let mut scan_from = 0;
    let mut terminator = end_at.and_then(|end| find_terminator(input, end, 0));
    let mut current_end = terminator.unwrap_or(input.len());
    let mut too_deep_logged = false;

    while let Some(tag) = scanner::find_tag(input, scan_from) {
        if tag.start >= current_end {
            break;
        }

        if tag.is_reset() {
            flush_literal(&mut nodes, &input[current_pos..tag.start]);
            if end_at.is_some() {
                log::debug!("reset at byte {} closes the enclosing tag", tag.start);
                return NodeList::new(nodes, tag.start);
            }
            current_pos = tag.end;
            scan_from = tag.end;
            continue;
        }

        if depth >= MAX_NESTING_DEPTH {
            if !too_deep_logged {
                log::warn!("nesting deeper than {MAX_NESTING_DEPTH}, keeping tags as text");
                too_deep_logged = true;
            }
            scan_from = tag.end;
            continue;
        }

        let Some(handler) = resolver.tag_handler(&tag.name) else {
            log::debug!("no handler for <{}>, keeping it as text", tag.name);
            scan_from = tag.end;
            continue;
        };

        flush_literal(&mut nodes, &input[current_pos..tag.start]);
        current_pos = tag.end;

        let closing = tag.closing_literal();
        let context = TagContext {
            name: &tag.name,
            data: &tag.data,
            remainder: &input[tag.end..],
            resolver,
            closing: &closing,
            depth,
        };
        log::trace!("dispatching <{}> at byte {}", tag.name, tag.start);

        match handler.parse(&context).and_then(|parsed| checked(&tag, input, parsed)) {
            Ok(parsed) => {
                nodes.extend(parsed.node);
                current_pos += parsed.consumed;
            }
            Err(err) => log::warn!("dropping <{}> at byte {}: {err}", tag.name, tag.start),
        }

        if current_pos >= input.len() {
            current_end = input.len();
            terminator = None;
            break;
        }
        scan_from = current_pos;
        // A terminator still ahead of the cursor is still the first one.
        if let (Some(end), Some(at)) = (end_at, terminator)
            && at < current_pos
        {
            terminator = find_terminator(input, end, current_pos);
            current_end = terminator.unwrap_or(input.len());
        }
    }

    if current_pos < current_end {
        flush_literal(&mut nodes, &input[current_pos..current_end]);
    }

    let consumed = match (terminator, end_at) {
        (Some(at), Some(end)) => at + end.len(),
        _ => input.len(),
    };
    NodeList::new(nodes, consumed)
}

fn find_terminator(input: &str, end_at: &str, from: usize) -> Option<usize> {
    input[from..].find(end_at).map(|at| at + from)
}

fn flush_literal(nodes: &mut Vec<TextNode>, text: &str) {
    if !text.is_empty() {
        nodes.push(TextNode::Literal(restore_original_escaping(text)));
    }
}

/// Rejects consumed lengths that would move the cursor outside the input or
/// into the middle of a character.
fn checked(tag: &TagToken, input: &str, parsed: ParsedTag) -> Result<ParsedTag, HandlerError> {
    let available = input.len() - tag.end;
    let target = tag.end.checked_add(parsed.consumed);
    match target {
        Some(pos) if parsed.consumed <= available && input.is_char_boundary(pos) => Ok(parsed),
        _ => Err(HandlerError::LengthOutOfBounds {
            tag: tag.name.clone(),
            consumed: parsed.consumed,
            available,
        }),
    }
}
