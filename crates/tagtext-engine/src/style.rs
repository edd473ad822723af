//! Formatting descriptor carried by composite nodes.
//!
//! The parser never looks inside a [`Style`]; it only reaches the markup
//! through a [`StyleCodec`] when a tree is serialized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insertion: Option<String>,
}

impl Style {
    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// Converts styles to and from their markup representation.
pub trait StyleCodec: Send + Sync {
    /// Encodes a style, or `None` when it carries nothing worth emitting.
    fn encode(&self, style: &Style) -> Option<String>;

    fn decode(&self, raw: &str) -> Result<Style, serde_json::Error>;
}

/// JSON codec used by the `style` tag and the serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStyleCodec;

impl StyleCodec for JsonStyleCodec {
    fn encode(&self, style: &Style) -> Option<String> {
        if style.is_empty() {
            return None;
        }
        serde_json::to_string(style).ok()
    }

    fn decode(&self, raw: &str) -> Result<Style, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
