use std::fmt::Write;

use super::normalize::Snap;

/// Renders snaps as an indented tree, one node per line.
pub fn render_tree(snaps: &[Snap]) -> String {
    let mut out = String::new();
    write_level(&mut out, snaps, 0);
    out
}

fn write_level(out: &mut String, snaps: &[Snap], depth: usize) {
    for snap in snaps {
        let indent = "  ".repeat(depth);
        match snap {
            Snap::Text { text } => {
                let _ = writeln!(out, "{indent}Text {text:?}");
            }
            Snap::Styled { style, children } => {
                let style = serde_json::to_string(style).unwrap_or_default();
                let _ = writeln!(out, "{indent}Styled {style}");
                write_level(out, children, depth + 1);
            }
            Snap::Translatable { key, args } => {
                let _ = writeln!(out, "{indent}Translatable {key:?}");
                for (i, arg) in args.iter().enumerate() {
                    let _ = writeln!(out, "{indent}  arg {i}");
                    write_level(out, arg, depth + 2);
                }
            }
            Snap::Keybind { id } => {
                let _ = writeln!(out, "{indent}Keybind {id:?}");
            }
            Snap::Custom { node_kind, value } => {
                let _ = writeln!(out, "{indent}Custom {node_kind} {value}");
            }
        }
    }
}
