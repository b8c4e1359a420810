//! C++ string-literal rendering.
//!
//! Content is split into one literal fragment per source line. Rendered
//! fragments are adjacent literals that the C++ compiler concatenates:
//!
//! ```text
//! "first line\n"
//! "second line"
//! ```

/// Escape `content` into literal fragments, one per line.
///
/// Backslashes are escaped first, then double quotes. Carriage returns are
/// dropped. Every fragment except the last ends with a `\n` escape standing
/// in for the line feed that separated it from the next one, so there is
/// always at least one (possibly empty) fragment.
pub fn fragments(content: &str) -> Vec<String> {
    let escaped = content
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "");

    let mut lines = escaped.split('\n').peekable();
    let mut fragments = Vec::new();
    while let Some(line) = lines.next() {
        if lines.peek().is_some() {
            fragments.push(format!("{}\\n", line));
        } else {
            fragments.push(line.to_string());
        }
    }
    fragments
}

/// Render fragments as adjacent literals, one per output line.
pub fn render(fragments: &[String]) -> String {
    format!("\"{}\"", fragments.join("\"\n\""))
}

/// Escape and render `content` in one step.
pub fn quote(content: &str) -> String {
    render(&fragments(content))
}
