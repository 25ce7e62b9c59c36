//! Inspection and re-encoding tools for PR2 course records.
//!
//! This crate provides utilities for looking inside stored course records:
//!
//! - Summarize a record's metadata and layer contents
//! - Decode a record into structured JSON
//! - Re-sign a record for another user
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

mod logger;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use codec::{encode_data, Tier};
use course::{Course, CourseError, Limits};
use layer::Layer;
use serde::Serialize;

pub use logger::{init_logging, level_for_verbosity};

/// Occupancy of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    pub cells: usize,
    pub objects: usize,
}

impl LayerSummary {
    fn of<T>(layer: &Layer<T>) -> Self {
        Self {
            cells: layer.len(),
            objects: layer.object_count(),
        }
    }
}

/// Occupancy of the stamp and line layers of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub tier: &'static str,
    pub stamps: LayerSummary,
    pub lines: LayerSummary,
}

/// Summary of a stored course record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReport {
    pub title: String,
    pub game_mode: String,
    pub live: bool,
    pub record_bytes: usize,
    /// Size of the data field as this codec would write it.
    pub data_bytes: usize,
    pub background_color: String,
    pub background_image: i32,
    pub blocks: LayerSummary,
    pub tiers: Vec<TierSummary>,
    /// Names of fields the parser kept but did not interpret.
    pub extra_fields: Vec<String>,
    /// Checksum verification result, when a user was given.
    pub checksum_valid: Option<bool>,
}

fn parse(raw: &str, limits: &Limits) -> Result<Course> {
    Course::parse_with_limits(raw, limits).context("parse course record")
}

/// Summarizes a stored record, verifying its checksum when `user` is given.
pub fn inspect_course(raw: &str, user: Option<&str>, limits: &Limits) -> Result<CourseReport> {
    let course = parse(raw, limits)?;
    let checksum_valid = match user {
        Some(user) => match Course::parse_verified(raw, user) {
            Ok(_) => Some(true),
            Err(CourseError::ChecksumMismatch { expected, found }) => {
                log::debug!("checksum mismatch: expected {expected}, found {found}");
                Some(false)
            }
            Err(err) => return Err(err).context("verify course record"),
        },
        None => None,
    };

    let data = &course.data;
    Ok(CourseReport {
        title: course.title.clone(),
        game_mode: course.game_mode.clone(),
        live: course.live,
        record_bytes: raw.len(),
        data_bytes: encode_data(data).len(),
        background_color: format!("#{:06x}", data.background_color.rgb()),
        background_image: data.background_image,
        blocks: LayerSummary::of(&data.blocks),
        tiers: Tier::ALL
            .iter()
            .map(|&tier| TierSummary {
                tier: tier.name(),
                stamps: LayerSummary::of(data.stamps(tier)),
                lines: LayerSummary::of(data.lines(tier)),
            })
            .collect(),
        extra_fields: course.extra().keys().cloned().collect(),
        checksum_valid,
    })
}

/// Formats a report for terminal output.
pub fn format_report_pretty(report: &CourseReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "title: {:?} mode: {} live: {}",
        report.title, report.game_mode, report.live
    );
    let _ = writeln!(
        out,
        "record: {} bytes, data: {} bytes",
        report.record_bytes, report.data_bytes
    );
    let _ = writeln!(
        out,
        "background: {} image: {}",
        report.background_color, report.background_image
    );
    let _ = writeln!(
        out,
        "blocks: {} objects in {} cells",
        report.blocks.objects, report.blocks.cells
    );
    out.push_str("tiers:\n");
    for tier in &report.tiers {
        let _ = writeln!(
            out,
            "  {:>2}: {} stamps, {} lines",
            tier.tier, tier.stamps.objects, tier.lines.objects
        );
    }
    if !report.extra_fields.is_empty() {
        let _ = writeln!(out, "extra fields: {}", report.extra_fields.join(", "));
    }
    match report.checksum_valid {
        Some(true) => out.push_str("checksum: ok\n"),
        Some(false) => out.push_str("checksum: MISMATCH\n"),
        None => {}
    }
    out
}

/// Decodes a stored record into JSON.
pub fn decode_course_json(raw: &str, limits: &Limits) -> Result<serde_json::Value> {
    let course = parse(raw, limits)?;
    serde_json::to_value(&course).context("serialize course")
}

/// Re-encodes a stored record, signing it for `user`.
pub fn reencode_course(raw: &str, user: &str, limits: &Limits) -> Result<String> {
    Ok(parse(raw, limits)?.to_record(user))
}
