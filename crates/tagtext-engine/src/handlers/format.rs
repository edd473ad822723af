//! Tags that set one style field over their body.

use crate::error::HandlerError;
use crate::nodes::TextNode;
use crate::resolver::{ParsedTag, TagContext, TagHandler};
use crate::style::Style;

/// Boolean style flags, toggled by `<bold>`, `<italic:false>` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl Flag {
    fn apply(self, style: &mut Style, value: bool) {
        let field = match self {
            Flag::Bold => &mut style.bold,
            Flag::Italic => &mut style.italic,
            Flag::Underlined => &mut style.underlined,
            Flag::Strikethrough => &mut style.strikethrough,
            Flag::Obfuscated => &mut style.obfuscated,
        };
        *field = Some(value);
    }
}

/// `<bold>`, `<bold:true>` or `<bold:false>`.
#[derive(Debug, Clone, Copy)]
pub struct FlagTag(pub Flag);

impl TagHandler for FlagTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let value = match tag.whole_argument().as_str() {
            "" | "true" => true,
            "false" => false,
            other => {
                return Err(HandlerError::InvalidArgument {
                    tag: tag.name.to_owned(),
                    value: other.to_owned(),
                    reason: "expected `true` or `false`",
                });
            }
        };
        let mut style = Style::default();
        self.0.apply(&mut style, value);
        Ok(ParsedTag::wrapping(tag.parse_body(), |children| {
            TextNode::styled(style, children)
        }))
    }
}

/// Free-text style fields. The whole data is the value, so it may contain `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Font,
    Insertion,
}

#[derive(Debug, Clone, Copy)]
pub struct TextFieldTag(pub TextField);

impl TagHandler for TextFieldTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let value = tag.whole_argument();
        if value.is_empty() {
            return Err(HandlerError::MissingArgument {
                tag: tag.name.to_owned(),
                index: 0,
            });
        }
        let style = match self.0 {
            TextField::Font => Style {
                font: Some(value),
                ..Style::default()
            },
            TextField::Insertion => Style {
                insertion: Some(value),
                ..Style::default()
            },
        };
        Ok(ParsedTag::wrapping(tag.parse_body(), |children| {
            TextNode::styled(style, children)
        }))
    }
}
