//! # Serializer
//!
//! Turns a node tree back into markup that parses to an equivalent tree
//! with the built-in tags.
//!
//! | node                  | markup                              |
//! |-----------------------|-------------------------------------|
//! | literal               | display text, `\ < >` backslashed   |
//! | unstyled composite    | children inline                     |
//! | styled composite      | `<style:'JSON'>children</style>`    |
//! | translatable          | `<lang:'key':'arg'...>`             |
//! | keybind               | `<key:'id'>`                        |
//! | custom                | `<raw:'JSON'>`                      |
//!
//! Every argument goes through [`quote_argument`], so quotes, colons and
//! angle brackets inside values are safe.

use crate::escaping::{escape_literal, quote_argument, unescape};
use crate::nodes::{TextNode, TranslatableNode};
use crate::style::{JsonStyleCodec, StyleCodec};

/// Serializes nodes with the JSON style codec.
pub fn to_markup(nodes: &[TextNode]) -> String {
    to_markup_with(nodes, &JsonStyleCodec)
}

pub fn to_markup_with(nodes: &[TextNode], codec: &dyn StyleCodec) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, codec);
    }
    out
}

fn write_node(out: &mut String, node: &TextNode, codec: &dyn StyleCodec) {
    match node {
        TextNode::Literal(text) => out.push_str(&escape_literal(&unescape(text))),
        TextNode::Composite(composite) => {
            let encoded = composite.style.as_ref().and_then(|s| codec.encode(s));
            match encoded {
                Some(style) => {
                    out.push_str("<style:");
                    out.push_str(&quote_argument(&style));
                    out.push('>');
                    composite
                        .children
                        .iter()
                        .for_each(|child| write_node(out, child, codec));
                    out.push_str("</style>");
                }
                None => composite
                    .children
                    .iter()
                    .for_each(|child| write_node(out, child, codec)),
            }
        }
        TextNode::Translatable(translatable) => write_translatable(out, translatable, codec),
        TextNode::Keybind(id) => {
            out.push_str("<key:");
            out.push_str(&quote_argument(id));
            out.push('>');
        }
        TextNode::Custom(custom) => {
            out.push_str("<raw:");
            out.push_str(&quote_argument(&custom.raw_form().to_string()));
            out.push('>');
        }
    }
}

fn write_translatable(out: &mut String, node: &TranslatableNode, codec: &dyn StyleCodec) {
    out.push_str("<lang:");
    out.push_str(&quote_argument(&node.key));
    for arg in &node.args {
        let markup = to_markup_with(std::slice::from_ref(arg), codec);
        out.push(':');
        out.push_str(&quote_argument(&markup));
    }
    out.push('>');
}
