//! # Built-in Tag Handlers
//!
//! | tag                | aliases            | safe | body |
//! |--------------------|--------------------|------|------|
//! | `color`            | `c`, `<#rrggbb>`   | yes  | yes  |
//! | named colors       |                    | yes  | yes  |
//! | `bold`             | `b`                | yes  | yes  |
//! | `italic`           | `i`, `em`          | yes  | yes  |
//! | `underline`        | `u`                | yes  | yes  |
//! | `strikethrough`    | `st`               | yes  | yes  |
//! | `obfuscated`       | `obf`              | yes  | yes  |
//! | `font`             |                    | yes  | yes  |
//! | `insert`           | `insertion`        | no   | yes  |
//! | `style`            |                    | no   | yes  |
//! | `lang`             | `translate`        | yes  | no   |
//! | `key`              | `keybind`          | yes  | no   |
//! | `raw`              |                    | no   | no   |

pub mod color;
pub mod format;
pub mod keybind;
pub mod lang;
pub mod raw;
pub mod style;

use crate::registry::TagRegistry;
use crate::style::JsonStyleCodec;

pub use color::{ColorTag, NAMED_COLORS, NamedColorTag};
pub use format::{Flag, FlagTag, TextField, TextFieldTag};
pub use keybind::KeybindTag;
pub use lang::LangTag;
pub use raw::{RAW_KIND, RawNode, RawTag};
pub use style::StyleTag;

pub fn register_builtins(registry: &mut TagRegistry) {
    registry.register_safe("color", ColorTag).alias("c", "color");
    for name in NAMED_COLORS {
        registry.register_safe(name, NamedColorTag(name));
    }

    registry
        .register_safe("bold", FlagTag(Flag::Bold))
        .alias("b", "bold")
        .register_safe("italic", FlagTag(Flag::Italic))
        .alias("i", "italic")
        .alias("em", "italic")
        .register_safe("underline", FlagTag(Flag::Underlined))
        .alias("u", "underline")
        .register_safe("strikethrough", FlagTag(Flag::Strikethrough))
        .alias("st", "strikethrough")
        .register_safe("obfuscated", FlagTag(Flag::Obfuscated))
        .alias("obf", "obfuscated");

    registry
        .register_safe("font", TextFieldTag(TextField::Font))
        .register("insert", TextFieldTag(TextField::Insertion))
        .alias("insertion", "insert")
        .register("style", StyleTag::new(JsonStyleCodec));

    registry
        .register_safe("lang", LangTag)
        .alias("translate", "lang")
        .register_safe("key", KeybindTag)
        .alias("keybind", "key")
        .register("raw", RawTag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn safe_set_excludes_raw_and_style() {
        let safe = TagRegistry::with_builtins().safe_only();
        assert!(safe.contains("bold"));
        assert!(safe.contains("b"));
        assert!(safe.contains("red"));
        assert!(safe.contains("lang"));
        assert!(!safe.contains("raw"));
        assert!(!safe.contains("style"));
        assert!(!safe.contains("insertion"));
    }

    #[test]
    fn every_named_color_is_a_tag() {
        let registry = TagRegistry::with_builtins();
        let missing: Vec<_> = NAMED_COLORS
            .iter()
            .filter(|name| !registry.contains(name))
            .collect();
        assert_eq!(missing, Vec::<&&str>::new());
    }
}
