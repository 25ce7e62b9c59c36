//! Escaping of free text embedded in commands.
//!
//! Text may not contain any delimiter of the surrounding grammar, so each of
//! `` ` ``, `,`, `;` and `#` is replaced by `#` and its two-digit character
//! code.

use crate::error::{DecodeError, WireResult};

const ESCAPES: [(char, &str); 4] = [('`', "96"), (',', "44"), (';', "59"), ('#', "35")];

/// Escapes text for embedding in a command.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ESCAPES.iter().find(|(escaped, _)| *escaped == ch) {
            Some((_, code)) => {
                out.push('#');
                out.push_str(code);
            }
            None => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape`].
///
/// Every `#` must start one of the four known escapes.
pub fn unescape(text: &str) -> WireResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('#') {
        out.push_str(&rest[..idx]);
        let code = rest.get(idx + 1..idx + 3);
        let Some((ch, _)) = ESCAPES.iter().find(|(_, known)| Some(*known) == code) else {
            return Err(DecodeError::UnescapeFailure {
                raw: text.to_string(),
            });
        };
        out.push(*ch);
        rest = &rest[idx + 3..];
    }
    out.push_str(rest);
    Ok(out)
}
