//! # Handler Resolver
//!
//! The seam between the parser and tag behaviors. A [`TagResolver`] maps a
//! lowercased tag name to a [`TagHandler`]; a handler turns one tag
//! occurrence into an optional node plus the number of bytes of the
//! remainder it consumed.
//!
//! Handlers that own a body call [`TagContext::parse_body`], which re-enters
//! the parser bounded by the tag's closing literal. The parser keeps no state
//! between calls, so this recursion needs no coordination.

use crate::error::HandlerError;
use crate::escaping::{clean_argument, escape, remove_escaping};
use crate::nodes::TextNode;
use crate::parser::{self, NodeList};

/// Looks up handlers by tag name.
pub trait TagResolver: Send + Sync {
    /// `name` is already lowercased by the parser.
    fn tag_handler(&self, name: &str) -> Option<&dyn TagHandler>;
}

/// Translates one tag occurrence into a node.
pub trait TagHandler: Send + Sync {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError>;
}

impl<F> TagHandler for F
where
    F: Fn(&TagContext<'_>) -> Result<ParsedTag, HandlerError> + Send + Sync,
{
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        self(tag)
    }
}

/// Everything a handler gets to see about the tag it is handling.
#[derive(Clone, Copy)]
pub struct TagContext<'a> {
    /// Lowercased tag name.
    pub name: &'a str,
    /// Raw tag data after the first `:`, still escaped.
    pub data: &'a str,
    /// Input following the tag, still escaped.
    pub remainder: &'a str,
    pub resolver: &'a dyn TagResolver,
    /// Closing literal for this tag, e.g. `</bold>`.
    pub closing: &'a str,
    /// Nesting depth of the region the tag was found in.
    pub depth: usize,
}

impl<'a> TagContext<'a> {
    /// Parses the tag body up to its closing literal (or a nested reset).
    pub fn parse_body(&self) -> NodeList {
        parser::parse_region_at(self.remainder, self.resolver, Some(self.closing), self.depth + 1)
    }

    /// Parses unescaped markup held in an argument, one level below this tag.
    pub fn parse_markup(&self, markup: &str) -> Vec<TextNode> {
        parser::parse_region_at(&escape(markup), self.resolver, None, self.depth + 1).nodes
    }

    /// Raw data pieces split on `:` outside quotes.
    pub fn raw_arguments(&self) -> Vec<&'a str> {
        split_arguments(self.data)
    }

    /// Data pieces with quotes stripped and escapes removed.
    pub fn arguments(&self) -> Vec<String> {
        self.raw_arguments()
            .into_iter()
            .map(|arg| remove_escaping(clean_argument(arg)))
            .collect()
    }

    /// The whole data string as one argument.
    pub fn whole_argument(&self) -> String {
        remove_escaping(clean_argument(self.data))
    }

    /// Argument at `index`, or [`HandlerError::MissingArgument`].
    pub fn required_argument(&self, index: usize) -> Result<String, HandlerError> {
        self.arguments()
            .into_iter()
            .nth(index)
            .filter(|arg| !arg.is_empty())
            .ok_or_else(|| HandlerError::MissingArgument {
                tag: self.name.to_owned(),
                index,
            })
    }
}

/// What a handler produced and how much of the remainder it used.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTag {
    pub node: Option<TextNode>,
    /// Bytes of [`TagContext::remainder`] consumed, past the tag itself.
    pub consumed: usize,
}

impl ParsedTag {
    pub fn new(node: Option<TextNode>, consumed: usize) -> Self {
        Self { node, consumed }
    }

    /// A tag without a body.
    pub fn standalone(node: TextNode) -> Self {
        Self::new(Some(node), 0)
    }

    /// A tag whose body was parsed into `body`, wrapped by `wrap`.
    pub fn wrapping(body: NodeList, wrap: impl FnOnce(Vec<TextNode>) -> TextNode) -> Self {
        Self::new(Some(wrap(body.nodes)), body.consumed)
    }
}

/// Splits tag data on `:` that are outside single quotes.
///
/// Backslash escapes are skipped over, so `\:` and `\'` never split or
/// toggle quoting.
pub fn split_arguments(data: &str) -> Vec<&str> {
    if data.is_empty() {
        return Vec::new();
    }
    let bytes = data.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'\'' => quoted = !quoted,
            b':' if !quoted => {
                out.push(&data[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    out.push(&data[start..]);
    out
}
