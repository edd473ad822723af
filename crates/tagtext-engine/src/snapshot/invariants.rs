use crate::escaping::SENTINEL_MARK;
use crate::nodes::TextNode;

/// Panics if a parsed tree leaks scanner sentinels into its literals.
pub fn check(nodes: &[TextNode]) {
    for node in nodes {
        match node {
            TextNode::Literal(text) => assert!(
                !text.contains(SENTINEL_MARK),
                "literal still holds an escape sentinel: {text:?}"
            ),
            TextNode::Composite(c) => check(&c.children),
            TextNode::Translatable(t) => check(&t.args),
            TextNode::Keybind(id) => assert!(
                !id.contains(SENTINEL_MARK),
                "keybind id still holds an escape sentinel: {id:?}"
            ),
            TextNode::Custom(_) => {}
        }
    }
}
