//! PR2 course records.
//!
//! A stored course is a form-encoded query string of level metadata followed
//! by a 32-character checksum. One of its fields, `data`, carries the layered
//! course data handled by the `codec` crate.
//!
//! # Design Principles
//!
//! - **Tolerant metadata** - Unrecognized fields are kept, not rejected.
//! - **Strict data** - A malformed `data` field fails the whole parse.
//! - **Stable output** - Fields are written in the order the server expects.

mod course;
mod error;
mod items;
mod query;
mod record;

pub use course::Course;
pub use error::{CourseError, CourseResult};
pub use items::{format_items, parse_items, ALL_ITEMS};
pub use query::{format_query, parse_query, query_escape, query_unescape};
pub use record::RawRecord;

pub use codec::{CourseData, Tier};
pub use wire::Limits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Course::default();
        let _ = CourseData::default();
        let _ = Limits::default();
        let _ = ALL_ITEMS;
        let _ = query_escape("");

        // Error types
        let _: CourseResult<()> = Ok(());
    }
}
