//! `<style:JSON>` applies a whole encoded style to its body.

use crate::error::HandlerError;
use crate::nodes::TextNode;
use crate::resolver::{ParsedTag, TagContext, TagHandler};
use crate::style::{JsonStyleCodec, StyleCodec};

#[derive(Debug, Clone, Copy, Default)]
pub struct StyleTag<C = JsonStyleCodec> {
    codec: C,
}

impl<C: StyleCodec> StyleTag<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }
}

impl<C: StyleCodec> TagHandler for StyleTag<C> {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let style = self
            .codec
            .decode(&tag.whole_argument())
            .map_err(HandlerError::InvalidStyle)?;
        Ok(ParsedTag::wrapping(tag.parse_body(), |children| {
            TextNode::styled(style, children)
        }))
    }
}
