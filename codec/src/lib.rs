//! Course data encoding/decoding for PR2 levels.
//!
//! This is the main codec crate that ties together layers and the wire
//! primitives to read and write the backtick-delimited data record.
//!
//! # Features
//!
//! - Block, stamp/text and line layer grammars
//! - The fourteen-field data record with optional tier 0/00 layers
//! - Course and password hashes for uploads
//!
//! # Design Principles
//!
//! - **Exact output** - Encoders reproduce the grammar the server expects.
//! - **All-or-nothing decoding** - A record either decodes fully or yields an error
//!   naming the field that failed.
//! - **Deterministic** - Same course, same text.

mod blocks;
mod data;
mod error;
mod hash;
mod lines;
mod stamps;

pub use blocks::{decode_blocks, encode_blocks};
pub use data::{
    decode_data, encode_data, CourseData, DataField, Tier, FULL_FIELDS, NO_BACKGROUND_IMAGE,
    REQUIRED_FIELDS,
};
pub use error::{CodecError, CodecResult};
pub use hash::{course_hash, pass_hash, COURSE_HASH_SALT, HASH_HEX_LEN, PASS_HASH_SALT};
pub use lines::{decode_lines, encode_lines};
pub use stamps::{decode_stamps, encode_stamps};
pub use wire::Limits as WireLimits;
