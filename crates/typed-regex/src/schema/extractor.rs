//! # Schema Extractor
//!
//! A recursive scan over pattern text.
//!
//! Every group splits the text it is found in into a *body* and a
//! *remainder*. Bodies are scanned with the group's optionality; remainders
//! continue at the enclosing optionality. Only named groups emit descriptors,
//! but any group kind (capturing, non-capturing, flag or look-around) marks
//! its body optional when followed by `?` or `*`.
//!
//! Escapes and bracketed character classes are skipped when looking for
//! openers and closers; no other regex syntax is interpreted.

use crate::{
    alloc::vec::Vec,
    schema::{CaptureSchema, GroupDescriptor},
};

/// Derive the [`CaptureSchema`] of a pattern.
///
/// This never fails; malformed patterns are left for the regex engine to
/// reject, and yield whatever groups the scan can find.
///
/// ## Arguments
/// * `pattern` - the regex pattern text.
///
/// ## Returns
/// The named groups, in the order of their opening markers.
pub fn extract_schema(pattern: &str) -> CaptureSchema {
    let mut groups = Vec::new();
    scan_groups(pattern, false, &mut groups);
    groups.into()
}

/// The kind of a group opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenerKind<'p> {
    /// `(?<name>` or `(?P<name>`.
    Named(&'p str),

    /// Any other `(`.
    Unnamed,
}

/// A group opener found in pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opener<'p> {
    kind: OpenerKind<'p>,

    /// The byte offset of the first byte of the group body.
    body_start: usize,
}

fn scan_groups(
    text: &str,
    inherited_optional: bool,
    groups: &mut Vec<GroupDescriptor>,
) {
    let mut cursor = 0;
    while let Some(opener) = next_opener(text, cursor) {
        let (body_end, remainder) = match find_closer(text, opener.body_start) {
            Some(closer) => (closer, closer + 1),
            None => (text.len(), text.len()),
        };

        let optional = inherited_optional || is_optional_quantifier(&text[remainder..]);

        if let OpenerKind::Named(name) = opener.kind {
            groups.push(GroupDescriptor::new(name, optional));
        }
        scan_groups(&text[opener.body_start..body_end], optional, groups);

        cursor = remainder;
    }
}

fn is_optional_quantifier(remainder: &str) -> bool {
    matches!(remainder.as_bytes().first(), Some(b'?' | b'*'))
}

/// Find the next group opener at or after `from`.
fn next_opener(
    text: &str,
    from: usize,
) -> Option<Opener<'_>> {
    let bytes = text.as_bytes();
    let mut idx = from;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => {
                idx += escape_len(text, idx);
                continue;
            }
            b'[' => {
                idx = class_end(text, idx);
                continue;
            }
            b'(' => return Some(parse_opener(text, idx)),
            _ => {}
        }
        idx += 1;
    }
    None
}

/// Find the `)` closing a group whose body starts at `body_start`.
fn find_closer(
    text: &str,
    body_start: usize,
) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut idx = body_start;
    let mut depth = 0usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => {
                idx += escape_len(text, idx);
                continue;
            }
            b'[' => {
                idx = class_end(text, idx);
                continue;
            }
            b'(' => {
                // Group names may hold `[` and `]`; skip the header.
                depth += 1;
                idx = parse_opener(text, idx).body_start;
                continue;
            }
            b')' => {
                if depth == 0 {
                    return Some(idx);
                }
                depth -= 1;
            }
            _ => {}
        }
        idx += 1;
    }
    None
}

/// The byte length of the escape sequence at `idx`.
///
/// A trailing lone `\` has length 1.
fn escape_len(
    text: &str,
    idx: usize,
) -> usize {
    1 + text[idx + 1..].chars().next().map_or(0, char::len_utf8)
}

/// The byte offset just past the character class opened by the `[` at `idx`.
///
/// Classes nest, as in `[a-z&&[^aeiou]]` or `[[:alpha:]]`. A `]` first in a
/// class (after any `^`) is a literal. An unterminated class runs to the end
/// of the text.
fn class_end(
    text: &str,
    idx: usize,
) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = idx;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => {
                pos += escape_len(text, pos);
                continue;
            }
            b'[' => {
                depth += 1;
                pos = class_body_start(bytes, pos + 1);
                continue;
            }
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return pos + 1;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    text.len()
}

/// Skip a leading negation and a leading literal `]` in a class body.
fn class_body_start(
    bytes: &[u8],
    mut pos: usize,
) -> usize {
    if bytes.get(pos) == Some(&b'^') {
        pos += 1;
    }
    if bytes.get(pos) == Some(&b']') {
        pos += 1;
    }
    pos
}

/// Parse the group opener at the `(` at `idx`.
fn parse_opener(
    text: &str,
    idx: usize,
) -> Opener<'_> {
    match named_header(&text[idx + 1..]) {
        Some((name, header_len)) => Opener {
            kind: OpenerKind::Named(name),
            body_start: idx + 1 + header_len,
        },
        None => Opener {
            kind: OpenerKind::Unnamed,
            body_start: idx + 1,
        },
    }
}

/// Parse a `?<name>` or `?P<name>` header.
///
/// ## Returns
/// The name, and the byte length of the whole header.
fn named_header(rest: &str) -> Option<(&str, usize)> {
    let (prefix_len, tail) = if let Some(tail) = rest.strip_prefix("?<") {
        (2, tail)
    } else if let Some(tail) = rest.strip_prefix("?P<") {
        (3, tail)
    } else {
        return None;
    };

    let name_len = identifier_len(tail)?;
    if tail.as_bytes().get(name_len) != Some(&b'>') {
        return None;
    }
    Some((&tail[..name_len], prefix_len + name_len + 1))
}

/// The byte length of the group identifier at the start of `text`.
///
/// Look-behind assertions (`(?<=`, `(?<!`) have no identifier.
fn identifier_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return None,
    }
    let end = chars
        .find(|&(_, c)| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']')))
        .map_or(text.len(), |(i, _)| i);
    Some(end)
}
