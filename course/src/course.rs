//! The top-level course record.

use std::collections::BTreeMap;

use codec::{course_hash, decode_data, encode_data, pass_hash, CourseData};
use layer::Block;
use wire::{parse_int, DecodeError, LimitKind, Limits};

use crate::error::{CourseError, CourseResult};
use crate::items::{format_items, parse_items, ALL_ITEMS};
use crate::query::{format_query, parse_query};
use crate::record::RawRecord;

/// A PR2 course: level metadata plus its layered data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// Published to the level list.
    pub live: bool,
    pub has_pass: bool,
    pub title: String,
    pub note: String,
    /// Game mode such as `race`.
    pub game_mode: String,
    /// Credited names, written joined by `` ` ``.
    ///
    /// An empty value reads back as no credits, so `vec![""]` is stored the
    /// same as an empty list.
    pub credits: Vec<String>,
    pub gravity: f64,
    /// Time limit in seconds.
    pub max_time: i32,
    /// Minimum rank required to play.
    pub min_rank: i32,
    /// Song id, 0 for random.
    pub song: i32,
    /// Chance of the random hazard, in percent.
    pub cowboy_chance: i32,
    /// Selected item ids, in order, duplicates allowed.
    pub items: Vec<i32>,
    pub data: CourseData,
    /// Raw password; `*` characters are placeholders.
    pub pass: String,
    extra: BTreeMap<String, String>,
}

/// Starting blocks of a new course, in pixels.
const DEFAULT_BLOCKS: [(i32, i32, i32); 4] = [
    (12390, 10050, 111),
    (12420, 10050, 112),
    (12450, 10050, 113),
    (12480, 10050, 114),
];

impl Default for Course {
    /// The blank course a new level starts from.
    fn default() -> Self {
        let mut data = CourseData::default();
        for (x, y, kind) in DEFAULT_BLOCKS {
            data.blocks.push(x, y, Block::new(kind));
        }
        Self {
            live: false,
            has_pass: false,
            title: String::new(),
            note: String::new(),
            game_mode: "race".to_string(),
            credits: Vec::new(),
            gravity: 1.0,
            max_time: 120,
            min_rank: 0,
            song: 0,
            cowboy_chance: 5,
            items: ALL_ITEMS.to_vec(),
            data,
            pass: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// Pieces of the raw record needed after decoding.
struct Decoded<'a> {
    checksum: &'a str,
    data: String,
}

fn field_int(name: &'static str, raw: &str) -> CourseResult<i32> {
    parse_int(name, raw).map_err(|source| CourseError::Field { name, source })
}

fn field_float(name: &'static str, raw: &str) -> CourseResult<f64> {
    raw.parse().map_err(|_| CourseError::Field {
        name,
        source: DecodeError::MalformedNumber {
            field: name,
            raw: raw.to_string(),
        },
    })
}

fn format_bool(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

impl Course {
    /// Parses a stored record: a query body followed by a 32-character checksum.
    ///
    /// The checksum is stripped but not checked; see [`Course::parse_verified`].
    /// Unrecognized names are kept in [`Course::extra`].
    pub fn parse(raw: &str) -> CourseResult<Self> {
        Self::parse_with_limits(raw, &Limits::default())
    }

    /// Parses a stored record with caller-provided decode limits.
    pub fn parse_with_limits(raw: &str, limits: &Limits) -> CourseResult<Self> {
        Self::decode(raw, limits).map(|(course, _)| course)
    }

    /// Parses a stored record and checks its checksum against `user`.
    pub fn parse_verified(raw: &str, user: &str) -> CourseResult<Self> {
        let (course, decoded) = Self::decode(raw, &Limits::default())?;
        let expected = course_hash(&course.title, user, &decoded.data);
        if !expected.eq_ignore_ascii_case(decoded.checksum) {
            return Err(CourseError::ChecksumMismatch {
                expected,
                found: decoded.checksum.to_string(),
            });
        }
        Ok(course)
    }

    fn decode<'a>(raw: &'a str, limits: &Limits) -> CourseResult<(Self, Decoded<'a>)> {
        if raw.len() > limits.max_record_bytes {
            return Err(CourseError::Wire(DecodeError::LimitsExceeded {
                kind: LimitKind::RecordBytes,
                limit: limits.max_record_bytes,
                actual: raw.len(),
            }));
        }
        let record = RawRecord::split(raw)?;

        let mut course = Self::default();
        let mut data = String::new();
        for (name, value) in parse_query(record.body)? {
            match name.as_str() {
                "live" => course.live = value != "0",
                "has_pass" | "hasPass" => course.has_pass = value != "0",
                "title" => course.title = value,
                "note" => course.note = value,
                "gameMode" => course.game_mode = value,
                "credits" => {
                    course.credits = if value.is_empty() {
                        Vec::new()
                    } else {
                        value.split('`').map(str::to_string).collect()
                    };
                }
                "gravity" => course.gravity = field_float("gravity", &value)?,
                "max_time" => course.max_time = field_int("max_time", &value)?,
                "min_level" => course.min_rank = field_int("min_level", &value)?,
                "song" => {
                    course.song = match value.as_str() {
                        "" | "random" => 0,
                        raw => field_int("song", raw)?,
                    };
                }
                "cowboyChance" => course.cowboy_chance = field_int("cowboyChance", &value)?,
                "items" => course.items = parse_items(&value),
                "data" => {
                    course.data = decode_data(&value, limits)?;
                    data = value;
                }
                _ => {
                    log::debug!("keeping unrecognized course field {name:?}");
                    course.extra.insert(name, value);
                }
            }
        }

        log::trace!(
            "decoded course {:?}: {} blocks, {} extra fields",
            course.title,
            course.data.blocks.object_count(),
            course.extra.len()
        );
        Ok((
            course,
            Decoded {
                checksum: record.checksum,
                data,
            },
        ))
    }

    /// Returns fields read by [`Course::parse`] that it does not interpret.
    #[must_use]
    pub const fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// Returns the password hash, empty when there is no password.
    #[must_use]
    pub fn pass_hash(&self) -> String {
        pass_hash(&self.pass).unwrap_or_default()
    }

    /// Returns the course hash for `user` over the encoded data.
    #[must_use]
    pub fn hash(&self, user: &str) -> String {
        course_hash(&self.title, user, &encode_data(&self.data))
    }

    /// Fields shared by the stored and serialized forms.
    fn stored_fields(&self, data: String) -> Vec<(&'static str, String)> {
        vec![
            ("live", format_bool(self.live)),
            ("hasPass", format_bool(self.has_pass)),
            ("title", self.title.clone()),
            ("note", self.note.clone()),
            ("gameMode", self.game_mode.clone()),
            ("credits", self.credits.join("`")),
            ("gravity", format!("{:.2}", self.gravity)),
            ("max_time", self.max_time.to_string()),
            ("min_level", self.min_rank.to_string()),
            ("song", self.song.to_string()),
            ("cowboyChance", self.cowboy_chance.to_string()),
            ("items", format_items(&self.items)),
            ("data", data),
        ]
    }

    /// Formats the course as a query string signed for `user`.
    #[must_use]
    pub fn serialize(&self, user: &str, token: &str) -> String {
        let data = encode_data(&self.data);
        let hash = course_hash(&self.title, user, &data);
        let mut fields = self.stored_fields(data);
        fields.push(("passHash", self.pass_hash()));
        fields.push(("hash", hash));
        fields.push(("token", token.to_string()));
        format_query(fields.iter().map(|(name, value)| (*name, value.as_str())))
    }

    /// Formats the reduced field set sent with an upload request.
    #[must_use]
    pub fn upload(&self, user: &str, token: &str) -> String {
        let data = encode_data(&self.data);
        let hash = course_hash(&self.title, user, &data);
        let fields = [
            ("title", self.title.clone()),
            ("note", self.note.clone()),
            ("data", data),
            ("live", format_bool(self.live)),
            ("min_level", self.min_rank.to_string()),
            ("song", self.song.to_string()),
            ("gravity", format!("{:.2}", self.gravity)),
            ("max_time", self.max_time.to_string()),
            ("items", format_items(&self.items)),
            ("hash", hash),
            ("passHash", self.pass_hash()),
            ("hasPass", format_bool(self.has_pass)),
            ("gameMode", self.game_mode.clone()),
            ("cowboyChance", self.cowboy_chance.to_string()),
            ("token", token.to_string()),
        ];
        format_query(fields.iter().map(|(name, value)| (*name, value.as_str())))
    }

    /// Formats the course as a stored record, the form [`Course::parse`] reads.
    #[must_use]
    pub fn to_record(&self, user: &str) -> String {
        let data = encode_data(&self.data);
        let hash = course_hash(&self.title, user, &data);
        let fields = self.stored_fields(data);
        let mut record = format_query(fields.iter().map(|(name, value)| (*name, value.as_str())));
        record.push_str(&hash);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{Tier, NO_BACKGROUND_IMAGE};
    use layer::Color;

    const CHECKSUM: &str = "00000000000000000000000000000000";

    fn record(body: &str) -> String {
        format!("{body}{CHECKSUM}")
    }

    #[test]
    fn default_course() {
        let course = Course::default();
        assert_eq!(course.data.background_color, Color::from_rgb(0xBB_BBDD));
        assert_eq!(course.data.background_image, NO_BACKGROUND_IMAGE);
        assert_eq!(course.max_time, 120);
        assert!((course.gravity - 1.0).abs() < f64::EPSILON);
        assert_eq!(course.cowboy_chance, 5);
        assert_eq!(course.game_mode, "race");
        assert_eq!(course.items, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(course.data.blocks.object_count(), 4);
        assert_eq!(course.data.blocks.peek(12390, 10050), Some(&Block::new(111)));
        assert_eq!(course.data.blocks.peek(12480, 10050), Some(&Block::new(114)));
    }

    #[test]
    fn default_block_stack_ops() {
        let mut course = Course::default();
        let blocks = &mut course.data.blocks;
        blocks.push(12390, 10050, Block::new(0));
        assert_eq!(
            blocks.get(12390, 10050),
            Some(&[Block::new(111), Block::new(0)][..])
        );
        blocks.pop(12390, 10050);
        assert_eq!(blocks.get(12390, 10050), Some(&[Block::new(111)][..]));
        blocks.pop(12390, 10050);
        assert_eq!(blocks.get(12390, 10050), None);
    }

    #[test]
    fn parse_minimal_record() {
        let course = Course::parse(&record("data=m3`bbbbdd`````````-1")).unwrap();
        assert_eq!(course.data.background_color, Color::from_rgb(0xBB_BBDD));
        assert_eq!(course.data.background_image, -1);
        assert!(course.data.is_blank());
    }

    #[test]
    fn parse_metadata() {
        let body = "live=1&hasPass=0&title=My+Level&note=hi%21&gameMode=deathmatch\
                    &credits=a%60b&gravity=1.50&max_time=300&min_level=10&song=7\
                    &cowboyChance=20&items=Sword%60Mine";
        let course = Course::parse(&record(body)).unwrap();
        assert!(course.live);
        assert!(!course.has_pass);
        assert_eq!(course.title, "My Level");
        assert_eq!(course.note, "hi!");
        assert_eq!(course.game_mode, "deathmatch");
        assert_eq!(course.credits, vec!["a", "b"]);
        assert!((course.gravity - 1.5).abs() < f64::EPSILON);
        assert_eq!(course.max_time, 300);
        assert_eq!(course.min_rank, 10);
        assert_eq!(course.song, 7);
        assert_eq!(course.cowboy_chance, 20);
        assert_eq!(course.items, vec![8, 2]);
    }

    #[test]
    fn absent_fields_keep_defaults() {
        let course = Course::parse(&record("title=x")).unwrap();
        assert_eq!(course.max_time, 120);
        assert_eq!(course.data, Course::default().data);
    }

    #[test]
    fn empty_credits_read_as_none() {
        let course = Course::parse(&record("credits=")).unwrap();
        assert!(course.credits.is_empty());

        let mut blank = Course::default();
        blank.credits = vec![String::new()];
        let parsed = Course::parse(&blank.to_record("u")).unwrap();
        assert!(parsed.credits.is_empty());

        let course = Course::parse(&record("credits=a%60%60b")).unwrap();
        assert_eq!(course.credits, vec!["a", "", "b"]);
    }

    #[test]
    fn has_pass_alias_and_random_song() {
        let course = Course::parse(&record("has_pass=1&song=random")).unwrap();
        assert!(course.has_pass);
        assert_eq!(course.song, 0);
    }

    #[test]
    fn unrecognized_fields_preserved() {
        let course = Course::parse(&record("title=a&version=3&user_id=99")).unwrap();
        assert_eq!(course.extra().get("version").map(String::as_str), Some("3"));
        assert_eq!(course.extra().get("user_id").map(String::as_str), Some("99"));
        assert!(!course.extra().contains_key("title"));
    }

    #[test]
    fn bad_number_names_field() {
        let err = Course::parse(&record("max_time=long")).unwrap_err();
        assert!(matches!(err, CourseError::Field { name: "max_time", .. }));

        let err = Course::parse(&record("gravity=heavy")).unwrap_err();
        assert!(matches!(err, CourseError::Field { name: "gravity", .. }));
    }

    #[test]
    fn bad_data_is_data_error() {
        let err = Course::parse(&record("data=m3`0`x````````")).unwrap_err();
        assert!(matches!(err, CourseError::Data(_)));
    }

    #[test]
    fn non_utf8_title_is_rejected() {
        // The title escapes the single byte 0xE9, which is not UTF-8 on its own.
        let raw = record("title=%E9");
        assert_eq!(
            Course::parse(&raw).unwrap_err(),
            CourseError::InvalidUtf8 {
                name: "title".to_string()
            }
        );
        assert!(matches!(
            Course::parse_verified(&raw, "u").unwrap_err(),
            CourseError::InvalidUtf8 { .. }
        ));
    }

    #[test]
    fn short_record_rejected() {
        assert!(matches!(
            Course::parse("title=x").unwrap_err(),
            CourseError::InvalidChecksumLength { .. }
        ));
    }

    #[test]
    fn record_limit_enforced() {
        let limits = Limits {
            max_record_bytes: 40,
            ..Limits::default()
        };
        let err = Course::parse_with_limits(&record("title=long+enough"), &limits).unwrap_err();
        assert!(matches!(
            err,
            CourseError::Wire(DecodeError::LimitsExceeded {
                kind: LimitKind::RecordBytes,
                ..
            })
        ));
    }

    #[test]
    fn stored_record_roundtrip() {
        let mut course = Course::default();
        course.title = "Round & Trip".to_string();
        course.note = "50% more; fun".to_string();
        course.credits = vec!["one".to_string(), "two".to_string()];
        course.items = vec![3, 3, 1];
        course.min_rank = 12;
        course
            .data
            .stamps_mut(Tier::T2)
            .push(5, 5, layer::Text::new("a,b", Color::BLACK).into());

        let raw = course.to_record("Someone");
        let parsed = Course::parse_verified(&raw, "someone").unwrap();
        assert_eq!(parsed, course);
    }

    #[test]
    fn verification_catches_wrong_user() {
        let raw = Course::default().to_record("alice");
        assert!(matches!(
            Course::parse_verified(&raw, "bob").unwrap_err(),
            CourseError::ChecksumMismatch { .. }
        ));
        assert!(Course::parse(&raw).is_ok());
    }

    #[test]
    fn pass_hash_empty_without_password() {
        let mut course = Course::default();
        assert_eq!(course.pass_hash(), "");
        course.pass = "***".to_string();
        assert_eq!(course.pass_hash(), "");
        course.pass = "hunter2".to_string();
        assert_eq!(course.pass_hash(), "418b7f51d3ca7c2e2365aa199f3dea26");
    }
}
