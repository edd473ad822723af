//! `<raw:'JSON'>` carries an opaque serialized node.
//!
//! It is the serializer's fallback for node kinds it has no markup for.

use std::sync::Arc;

use serde_json::Value;

use crate::error::HandlerError;
use crate::nodes::{CustomNode, TextNode};
use crate::resolver::{ParsedTag, TagContext, TagHandler};

pub const RAW_KIND: &str = "raw";

#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    pub value: Value,
}

impl CustomNode for RawNode {
    fn kind(&self) -> &str {
        RAW_KIND
    }

    fn raw_form(&self) -> Value {
        self.value.clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RawTag;

impl TagHandler for RawTag {
    fn parse(&self, tag: &TagContext<'_>) -> Result<ParsedTag, HandlerError> {
        let value = serde_json::from_str(&tag.whole_argument()).map_err(HandlerError::InvalidRaw)?;
        Ok(ParsedTag::standalone(TextNode::Custom(Arc::new(RawNode {
            value,
        }))))
    }
}
