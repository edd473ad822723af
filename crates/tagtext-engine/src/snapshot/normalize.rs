use serde::Serialize;
use serde_json::Value;

use crate::escaping::unescape;
use crate::nodes::TextNode;
use crate::style::Style;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Snap {
    Text {
        text: String,
    },
    Styled {
        style: Style,
        children: Vec<Snap>,
    },
    Translatable {
        key: String,
        args: Vec<Vec<Snap>>,
    },
    Keybind {
        id: String,
    },
    Custom {
        node_kind: String,
        value: Value,
    },
}

pub fn normalize(nodes: &[TextNode]) -> Vec<Snap> {
    let mut out = Vec::new();
    for node in nodes {
        push_node(&mut out, node);
    }
    out
}

fn push_node(out: &mut Vec<Snap>, node: &TextNode) {
    match node {
        TextNode::Literal(markup) => push_text(out, &unescape(markup)),
        TextNode::Composite(c) => match c.style.as_ref().filter(|s| !s.is_empty()) {
            Some(style) => out.push(Snap::Styled {
                style: style.clone(),
                children: normalize(&c.children),
            }),
            None => c.children.iter().for_each(|child| push_node(out, child)),
        },
        TextNode::Translatable(t) => out.push(Snap::Translatable {
            key: t.key.clone(),
            args: t
                .args
                .iter()
                .map(|arg| normalize(std::slice::from_ref(arg)))
                .collect(),
        }),
        TextNode::Keybind(id) => out.push(Snap::Keybind { id: id.clone() }),
        TextNode::Custom(custom) => out.push(Snap::Custom {
            node_kind: custom.kind().to_owned(),
            value: custom.raw_form(),
        }),
    }
}

fn push_text(out: &mut Vec<Snap>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Snap::Text { text: last }) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(Snap::Text {
            text: text.to_owned(),
        });
    }
}
