// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_flat_markup(size: usize) -> String {
    let base = "Plain text with <bold>bold</bold>, <red>red</red> and \\<escaped\\> bits. \
                <lang:'chat.type.text':'<gold>Steve</gold>':'hello'> <key:'key.jump'>\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_markup(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&format!("<italic>level {level} "));
    }
    content.push_str("core");
    for _ in 0..depth {
        content.push_str("</italic>");
    }
    content
}

#[allow(dead_code)]
pub fn generate_plain_text(size: usize) -> String {
    "no tags in here, just words: and colons & ampersands. ".repeat(size)
}
