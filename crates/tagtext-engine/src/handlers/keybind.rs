use crate::error::HandlerError;
use crate::nodes::TextNode;
use crate::resolver::{ParsedTag, TagContext, TagHandler};

/// `<key:'key.jump'>`
#[derive(Debug, Clone, Copy, Default)]
pub struct KeybindTag;

impl TagHandler for KeybindTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let id = tag.required_argument(0)?;
        Ok(ParsedTag::standalone(TextNode::Keybind(id)))
    }
}

#[cfg(test)]
mod tests {
    use crate::nodes::TextNode;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn keybind_with_and_without_quotes() {
        assert_eq!(parse("<key:'key.jump'>"), vec![TextNode::Keybind("key.jump".into())]);
        assert_eq!(parse("<keybind:key.sneak>"), vec![TextNode::Keybind("key.sneak".into())]);
    }

    #[test]
    fn bare_apostrophe_needs_quoting_or_escaping() {
        assert_eq!(parse("<key:it's>"), vec![TextNode::literal("<key:it's>")]);
        assert_eq!(parse(r"<key:it\'s>"), vec![TextNode::Keybind("it's".into())]);
        assert_eq!(parse(r"<key:'it\'s'>"), vec![TextNode::Keybind("it's".into())]);
    }
}
