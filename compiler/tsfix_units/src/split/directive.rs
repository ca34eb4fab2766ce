//! Line-level recognition of `// @name: value` directives.

/// A source line with its byte range in the document.
///
/// `end` includes the line terminator, so consecutive lines tile the
/// document exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct Line<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Iterate lines, recognizing `\n`, `\r\n` and lone `\r` terminators.
pub(super) fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= text.len() {
            return None;
        }
        let rest = &text[start..];
        let (len, terminator) = match rest.find(&['\n', '\r'][..]) {
            Some(i) if rest[i..].starts_with("\r\n") => (i, 2),
            Some(i) => (i, 1),
            None => (rest.len(), 0),
        };
        let line = Line {
            text: &rest[..len],
            start,
            end: start + len + terminator,
        };
        start = line.end;
        Some(line)
    })
}

/// Parse `//\s*@(\w+)\s*:\s*(.*)` into `(name, trimmed value)`.
///
/// The line must begin with `//` at column zero.
pub(super) fn parse_directive(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("//")?.trim_start();
    let rest = rest.strip_prefix('@')?;
    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = rest.split_at(name_len);
    let value = rest.trim_start().strip_prefix(':')?;
    Some((name, value.trim()))
}

/// Whether `text` holds nothing but whitespace and comments.
///
/// A `#!` line at the very start counts as trivia. An unterminated block
/// comment runs to the end of the text and still counts as trivia.
pub(super) fn is_trivia(text: &str) -> bool {
    let mut rest = text.trim_start_matches('\u{feff}');
    if let Some(after) = rest.strip_prefix("#!") {
        rest = after.find(&['\n', '\r'][..]).map_or("", |i| &after[i..]);
    }
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return true;
        }
        if let Some(after) = rest.strip_prefix("//") {
            rest = after.find(&['\n', '\r'][..]).map_or("", |i| &after[i..]);
        } else if let Some(after) = rest.strip_prefix("/*") {
            rest = after.find("*/").map_or("", |i| &after[i + 2..]);
        } else {
            return false;
        }
    }
}
