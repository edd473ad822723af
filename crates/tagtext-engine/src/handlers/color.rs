//! `<color:VALUE>`, `<#rrggbb>` shorthand and the named color tags.

use crate::error::HandlerError;
use crate::nodes::TextNode;
use crate::resolver::{ParsedTag, TagContext, TagHandler};
use crate::style::Style;

/// The classic sixteen named colors, each also usable as its own tag.
pub const NAMED_COLORS: [&str; 16] = [
    "black",
    "dark_blue",
    "dark_green",
    "dark_aqua",
    "dark_red",
    "dark_purple",
    "gold",
    "gray",
    "dark_gray",
    "blue",
    "green",
    "aqua",
    "red",
    "light_purple",
    "yellow",
    "white",
];

/// Normalizes a color argument: `#rrggbb` or a named color, lowercased.
pub fn parse_color(value: &str) -> Option<String> {
    let value = value.trim().to_lowercase();
    if let Some(hex) = value.strip_prefix('#') {
        return (hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())).then_some(value);
    }
    NAMED_COLORS.contains(&value.as_str()).then_some(value)
}

fn colored(tag: &TagContext<'_>, color: String) -> ParsedTag {
    let style = Style {
        color: Some(color),
        ..Style::default()
    };
    ParsedTag::wrapping(tag.parse_body(), |children| {
        TextNode::styled(style, children)
    })
}

/// `<color:red>`, `<c:#00ff00>`; the scanner also routes `<#00ff00>` here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTag;

impl TagHandler for ColorTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let raw = tag.whole_argument();
        let color = parse_color(&raw).ok_or_else(|| HandlerError::InvalidArgument {
            tag: tag.name.to_owned(),
            value: raw.clone(),
            reason: "expected #rrggbb or a named color",
        })?;
        Ok(colored(tag, color))
    }
}

/// `<red>`, `<gold>`, ...
#[derive(Debug, Clone, Copy)]
pub struct NamedColorTag(pub &'static str);

impl TagHandler for NamedColorTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        Ok(colored(tag, self.0.to_owned()))
    }
}
