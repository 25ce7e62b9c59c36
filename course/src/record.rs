//! Splitting a stored record into its query body and checksum.

use codec::HASH_HEX_LEN;

use crate::error::{CourseError, CourseResult};

/// A stored record: a query body followed by a fixed-width checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub body: &'a str,
    pub checksum: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Splits off the trailing checksum.
    pub fn split(raw: &'a str) -> CourseResult<Self> {
        if raw.len() < HASH_HEX_LEN {
            return Err(CourseError::InvalidChecksumLength {
                actual: raw.len(),
                required: HASH_HEX_LEN,
            });
        }
        let at = raw.len() - HASH_HEX_LEN;
        if !raw.is_char_boundary(at) || !raw[at..].is_ascii() {
            return Err(CourseError::MalformedChecksum);
        }
        let (body, checksum) = raw.split_at(at);
        Ok(Self { body, checksum })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUM: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn splits_checksum() {
        let raw = format!("title=x{CHECKSUM}");
        let record = RawRecord::split(&raw).unwrap();
        assert_eq!(record.body, "title=x");
        assert_eq!(record.checksum, CHECKSUM);
    }

    #[test]
    fn checksum_only_has_empty_body() {
        let record = RawRecord::split(CHECKSUM).unwrap();
        assert_eq!(record.body, "");
    }

    #[test]
    fn too_short() {
        assert_eq!(
            RawRecord::split("abc").unwrap_err(),
            CourseError::InvalidChecksumLength {
                actual: 3,
                required: 32,
            }
        );
    }

    #[test]
    fn non_ascii_tail() {
        let raw = format!("title=x{}é", &CHECKSUM[..30]);
        assert_eq!(
            RawRecord::split(&raw).unwrap_err(),
            CourseError::MalformedChecksum
        );
    }
}
