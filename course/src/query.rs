//! The `&`-joined `name=value` wrapper around a course record.
//!
//! Values are form-escaped: unreserved ASCII passes through, space becomes
//! `+`, and every other byte becomes `%XX`.

use std::string::FromUtf8Error;

use crate::error::{CourseError, CourseResult};

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Form-escapes a value.
#[must_use]
pub fn query_escape(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else if byte == b' ' {
            out.push('+');
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Reverses [`query_escape`].
///
/// A `%` that does not start a valid escape is kept as-is. Escapes that
/// decode to invalid UTF-8 are an error.
pub fn query_unescape(value: &str) -> Result<String, FromUtf8Error> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let decoded = bytes
                    .get(i + 1..i + 3)
                    .and_then(|pair| Some(hex_value(pair[0])? << 4 | hex_value(pair[1])?));
                if let Some(byte) = decoded {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8(out)
}

/// Splits a query body into unescaped `(name, value)` pairs, in order.
///
/// Empty segments are skipped; a segment without `=` has an empty value.
pub fn parse_query(body: &str) -> CourseResult<Vec<(String, String)>> {
    body.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            let invalid = || CourseError::InvalidUtf8 {
                name: name.to_string(),
            };
            let name = query_unescape(name).map_err(|_| invalid())?;
            let value = query_unescape(value).map_err(|_| invalid())?;
            Ok((name, value))
        })
        .collect()
}

/// Joins pairs into a query body, escaping each value.
#[must_use]
pub fn format_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    for (name, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(name);
        out.push('=');
        out.push_str(&query_escape(value));
    }
    out
}
