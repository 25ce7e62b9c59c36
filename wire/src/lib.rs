//! Delimited text primitives for PR2 course data.
//!
//! Every per-object grammar in a course record is built from the same few
//! pieces, which live here:
//!
//! - Command splitting (`,` between commands, `;` between sub-fields)
//! - Delta-encoded coordinates via a running [`DeltaCursor`]
//! - Escaping of free text ([`escape`] / [`unescape`])
//! - Integer, color and scale sub-fields with named parse errors
//! - The data [`FormatTag`] and decode [`Limits`]
//!
//! # Design Principles
//!
//! - **Exact grammar** - The format is fixed by an external consumer; nothing
//!   here normalizes or reinterprets what it reads.
//! - **Bounded decoding** - Command and point counts are validated against limits.
//! - **No object knowledge** - This crate handles text, not blocks or stamps.
//!
//! # Example
//!
//! ```
//! use wire::{escape, unescape, DeltaCursor};
//!
//! let escaped = escape("a,b;c");
//! assert_eq!(escaped, "a#44b#59c");
//! assert_eq!(unescape(&escaped).unwrap(), "a,b;c");
//!
//! let mut cursor = DeltaCursor::new();
//! cursor.advance("block", 5, 3).unwrap();
//! assert_eq!(cursor.advance("block", 2, 0).unwrap(), layer::XY::new(7, 3));
//! ```

mod command;
mod cursor;
mod error;
mod escape;
mod field;
mod format;
mod limits;

pub use command::{split_commands, split_fields, COMMAND_DELIMITER, FIELD_DELIMITER, RECORD_DELIMITER};
pub use cursor::DeltaCursor;
pub use error::{DecodeError, LimitKind, WireResult};
pub use escape::{escape, unescape};
pub use field::{
    format_hex_color, format_scale, parse_decimal_color, parse_hex_color, parse_int, parse_scale,
};
pub use format::FormatTag;
pub use limits::Limits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Limits::default();
        let _ = DeltaCursor::new();
        let _ = FormatTag::CURRENT;
        let _ = (COMMAND_DELIMITER, FIELD_DELIMITER, RECORD_DELIMITER);

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn delimiters_are_distinct() {
        assert_ne!(COMMAND_DELIMITER, FIELD_DELIMITER);
        assert_ne!(COMMAND_DELIMITER, RECORD_DELIMITER);
        assert_ne!(FIELD_DELIMITER, RECORD_DELIMITER);
    }

    #[test]
    fn escaped_text_contains_no_delimiters() {
        let escaped = escape("`,;#");
        assert!(!escaped.contains(COMMAND_DELIMITER));
        assert!(!escaped.contains(FIELD_DELIMITER));
        assert!(!escaped.contains(RECORD_DELIMITER));
    }
}
