//! `<lang:'key':'arg'...>` builds a translatable node.
//!
//! Arguments are full markup in their own right: each one is unquoted,
//! unescaped and parsed again with the same resolver.

use crate::error::HandlerError;
use crate::escaping::{clean_argument, remove_escaping};
use crate::nodes::{TextNode, TranslatableNode};
use crate::resolver::{ParsedTag, TagContext, TagHandler};

#[derive(Debug, Clone, Copy, Default)]
pub struct LangTag;

impl TagHandler for LangTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let key = tag.required_argument(0)?;
        let args = tag
            .raw_arguments()
            .into_iter()
            .skip(1)
            .map(|raw| {
                let markup = remove_escaping(clean_argument(raw));
                TextNode::as_single(tag.parse_markup(&markup))
            })
            .collect();
        Ok(ParsedTag::standalone(TextNode::Translatable(
            TranslatableNode { key, args },
        )))
    }
}
