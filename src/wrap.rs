//! Greedy word wrap with a hard break fallback.

/// Column width used when none is given on the command line.
pub const DEFAULT_WIDTH: usize = 80;

/// Re-flow `text` into lines of at most `width` characters, joined by `\n`.
///
/// Breaks at the last space before column `width`; a word longer than the
/// width is cut at exactly `width` characters. A width of 0 disables wrapping.
pub fn format_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines: Vec<&str> = Vec::new();
    let mut rest = text;

    // Byte offset of the character at `width`, present only while the text is too long.
    while let Some((limit, _)) = rest.char_indices().nth(width) {
        let split = rest[..limit].rfind(' ').unwrap_or(limit);
        lines.push(rest[..split].trim());
        rest = rest[split..].trim();
    }
    lines.push(rest);

    lines.join("\n")
}
