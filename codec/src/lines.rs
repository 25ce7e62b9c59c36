//! Line layer grammar.
//!
//! Commands start with a one-letter tag:
//!
//! - `c<hex>` sets the stroke color
//! - `t<int>` sets the stroke thickness
//! - `m<mode>` sets the mode, `draw` or anything else for erase
//! - `d<x;y;dx;dy;…>` draws one polyline with the current stroke
//!
//! Stroke state resets at the start of every field. Each polyline starts its
//! own cursor at the origin, so its first pair is absolute.

use layer::{Color, Line, LineLayer};
use wire::{
    format_hex_color, parse_hex_color, parse_int, split_commands, split_fields, DecodeError,
    DeltaCursor, FormatTag, LimitKind, Limits, WireResult,
};

const DRAW_MODE: &str = "draw";
const ERASE_MODE: &str = "erase";

/// Stroke settings carried between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stroke {
    color: Color,
    thickness: i32,
    erase: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: Line::DEFAULT_THICKNESS,
            erase: false,
        }
    }
}

/// Decodes a line field.
pub fn decode_lines(format: FormatTag, data: &str, limits: &Limits) -> WireResult<LineLayer> {
    match format {
        FormatTag::M3 => decode_m3(data, limits),
        tag => Err(DecodeError::UnsupportedFormat { tag }),
    }
}

fn decode_m3(data: &str, limits: &Limits) -> WireResult<LineLayer> {
    let mut layer = LineLayer::new();
    let mut stroke = Stroke::default();

    for command in split_commands(data, limits)? {
        let mut chars = command.chars();
        let Some(tag) = chars.next() else {
            continue;
        };
        let content = chars.as_str();
        match tag {
            'c' => stroke.color = parse_hex_color("line color", content)?,
            't' => stroke.thickness = parse_int("line thickness", content)?,
            'm' => stroke.erase = content != DRAW_MODE,
            'd' => {
                let line = Line {
                    erase: stroke.erase,
                    thickness: stroke.thickness,
                    color: stroke.color,
                    points: decode_polyline(content, limits)?,
                };
                if let Some(origin) = line.origin() {
                    layer.push(origin.x, origin.y, line);
                }
            }
            _ => {}
        }
    }
    Ok(layer)
}

fn decode_polyline(content: &str, limits: &Limits) -> WireResult<Vec<layer::XY>> {
    let values = split_fields(content);
    if values.len() % 2 != 0 {
        return Err(DecodeError::OddPolylineFields {
            count: values.len(),
        });
    }
    let count = values.len() / 2;
    if count > limits.max_polyline_points {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::PolylinePoints,
            limit: limits.max_polyline_points,
            actual: count,
        });
    }

    let mut cursor = DeltaCursor::new();
    let mut points = Vec::with_capacity(count);
    for pair in values.chunks_exact(2) {
        let dx = parse_int("line x", pair[0])?;
        let dy = parse_int("line y", pair[1])?;
        points.push(cursor.advance("line", dx, dy)?);
    }
    Ok(points)
}

/// Encodes a line layer.
///
/// Stroke changes are written only when a line differs from the running
/// stroke. Lines without points have no wire form and are skipped.
#[must_use]
pub fn encode_lines(layer: &LineLayer) -> String {
    let mut commands = Vec::new();
    let mut stroke = Stroke::default();

    for (_, line) in layer.objects() {
        if line.points.is_empty() {
            continue;
        }
        if line.color.rgb() != stroke.color.rgb() {
            stroke.color = line.color;
            commands.push(format!("c{}", format_hex_color(line.color)));
        }
        if line.thickness != stroke.thickness {
            stroke.thickness = line.thickness;
            commands.push(format!("t{}", line.thickness));
        }
        if line.erase != stroke.erase {
            stroke.erase = line.erase;
            let mode = if line.erase { ERASE_MODE } else { DRAW_MODE };
            commands.push(format!("m{mode}"));
        }

        let mut cursor = DeltaCursor::new();
        let deltas: Vec<String> = line
            .points
            .iter()
            .map(|point| {
                let (dx, dy) = cursor.move_to(*point);
                format!("{dx};{dy}")
            })
            .collect();
        commands.push(format!("d{}", deltas.join(";")));
    }
    commands.join(",")
}
