//! Immutable text nodes produced by the parser.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::escaping;
use crate::style::Style;

/// A node kind defined by a tag handler outside the core.
///
/// The serializer has no markup for these and falls back to
/// `<raw:'...'>` with [`CustomNode::raw_form`].
pub trait CustomNode: fmt::Debug + Send + Sync {
    fn kind(&self) -> &str;

    /// Opaque serialized form of the node.
    fn raw_form(&self) -> Value;
}

/// A parsed unit of text.
#[derive(Debug, Clone)]
pub enum TextNode {
    /// Literal text in markup form: escape sequences are kept.
    Literal(String),
    /// Ordered children with an optional style applied to all of them.
    Composite(CompositeNode),
    /// Text looked up by key and filled with ordered arguments.
    Translatable(TranslatableNode),
    /// Key-referenced content resolved by the host (e.g. a key binding).
    Keybind(String),
    Custom(Arc<dyn CustomNode>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeNode {
    pub children: Vec<TextNode>,
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatableNode {
    pub key: String,
    pub args: Vec<TextNode>,
}

impl TextNode {
    pub fn literal(text: impl Into<String>) -> Self {
        TextNode::Literal(text.into())
    }

    pub fn composite(children: Vec<TextNode>) -> Self {
        TextNode::Composite(CompositeNode {
            children,
            style: None,
        })
    }

    pub fn styled(style: Style, children: Vec<TextNode>) -> Self {
        TextNode::Composite(CompositeNode {
            children,
            style: Some(style),
        })
    }

    /// Collapses a node list into one node.
    pub fn as_single(mut nodes: Vec<TextNode>) -> Self {
        match nodes.len() {
            0 => TextNode::Literal(String::new()),
            1 => nodes.remove(0),
            _ => TextNode::composite(nodes),
        }
    }

    /// Returns the literal text when this is a literal node.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            TextNode::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Returns children for composite nodes.
    pub fn children(&self) -> Option<&[TextNode]> {
        match self {
            TextNode::Composite(c) => Some(&c.children),
            _ => None,
        }
    }

    /// Returns the style of a composite node, if any.
    pub fn style(&self) -> Option<&Style> {
        match self {
            TextNode::Composite(c) => c.style.as_ref(),
            _ => None,
        }
    }

    /// Text a reader would see, with escapes resolved.
    ///
    /// Translatable nodes show their key followed by their arguments; custom
    /// nodes contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            TextNode::Literal(text) => out.push_str(&escaping::unescape(text)),
            TextNode::Composite(c) => c.children.iter().for_each(|n| n.write_plain(out)),
            TextNode::Translatable(t) => {
                out.push_str(&t.key);
                t.args.iter().for_each(|n| n.write_plain(out));
            }
            TextNode::Keybind(id) => out.push_str(id),
            TextNode::Custom(_) => {}
        }
    }
}

impl PartialEq for TextNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TextNode::Literal(a), TextNode::Literal(b)) => a == b,
            (TextNode::Composite(a), TextNode::Composite(b)) => a == b,
            (TextNode::Translatable(a), TextNode::Translatable(b)) => a == b,
            (TextNode::Keybind(a), TextNode::Keybind(b)) => a == b,
            (TextNode::Custom(a), TextNode::Custom(b)) => {
                a.kind() == b.kind() && a.raw_form() == b.raw_form()
            }
            _ => false,
        }
    }
}

/// Concatenated plain text of a node list.
pub fn plain_text(nodes: &[TextNode]) -> String {
    nodes.iter().map(TextNode::plain_text).collect()
}
