//! # tagtext engine
//!
//! Parses `<tag:data>` markup into an immutable [`TextNode`] tree and
//! serializes trees back into markup.
//!
//! ```text
//! input ─ escape ─▶ scanner ─▶ parser ─▶ TagResolver ─▶ TagHandler ─▶ TextNode
//!                                 ▲                          │
//!                                 └──── parse_body ──────────┘
//! ```
//!
//! Tag behavior lives entirely behind [`TagResolver`]; [`TagRegistry`] is the
//! stock resolver and ships with the built-in [`handlers`].

pub mod error;
pub mod escaping;
pub mod handlers;
pub mod nodes;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod serializer;
pub mod snapshot;
pub mod style;

// Re-export key types for easier usage
pub use error::HandlerError;
pub use nodes::{CompositeNode, CustomNode, TextNode, TranslatableNode, plain_text};
pub use parser::{MAX_NESTING_DEPTH, NodeList, parse, parse_region, parse_region_at, parse_with};
pub use registry::TagRegistry;
pub use resolver::{ParsedTag, TagContext, TagHandler, TagResolver};
pub use serializer::{to_markup, to_markup_with};
pub use style::{JsonStyleCodec, Style, StyleCodec};
