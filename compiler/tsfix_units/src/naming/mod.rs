//! Flat fixture names.
//!
//! Fixtures live in a single directory per verdict, so the
//! `(document id, unit name)` pair is flattened into one file name:
//!
//! ```text
//! ("es6/classes/a.ts", "lib/b.ts")  ──►  es6+classes+a.ts#lib+b.ts
//! ```
//!
//! Each part is percent-escaped for `%`, `+`, `#` and `\` before `/` is
//! rewritten to `+`, and the parts are joined with `#`. The mapping is
//! injective and [`parse_fixture_name`] recovers the pair.

const SEPARATOR: char = '#';

/// Flatten a document id and unit name into a fixture file name.
pub fn fixture_name(document_id: &str, unit_name: &str) -> String {
    let mut out = String::with_capacity(document_id.len() + unit_name.len() + 1);
    push_flattened(&mut out, document_id);
    out.push(SEPARATOR);
    push_flattened(&mut out, unit_name);
    out
}

/// Recover `(document id, unit name)` from a name built by [`fixture_name`].
pub fn parse_fixture_name(name: &str) -> Option<(String, String)> {
    let (document, unit) = name.split_once(SEPARATOR)?;
    Some((unflatten(document)?, unflatten(unit)?))
}

fn push_flattened(out: &mut String, part: &str) {
    for c in part.chars() {
        match c {
            '%' => out.push_str("%25"),
            '+' => out.push_str("%2B"),
            '#' => out.push_str("%23"),
            '\\' => out.push_str("%5C"),
            '/' => out.push('+'),
            _ => out.push(c),
        }
    }
}

fn unflatten(part: &str) -> Option<String> {
    let mut out = String::with_capacity(part.len());
    let mut chars = part.chars();
    while let Some(c) = chars.next() {
        match c {
            '+' => out.push('/'),
            '%' => {
                let escape: String = chars.by_ref().take(2).collect();
                out.push(match escape.as_str() {
                    "25" => '%',
                    "2B" => '+',
                    "23" => '#',
                    "5C" => '\\',
                    _ => return None,
                });
            }
            SEPARATOR => return None,
            _ => out.push(c),
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests;
