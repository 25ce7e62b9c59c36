//! Stamp layer grammar.
//!
//! Each command is `dx;dy[;kind[;…]]` in pixels. A kind of `t` introduces text
//! (`content;color;scaleX;scaleY`, color in decimal); anything else is a
//! stamp sprite id with optional `scaleX;scaleY` percentages.

use layer::{Decoration, Stamp, StampLayer, Text};
use wire::{
    escape, format_scale, parse_decimal_color, parse_int, parse_scale, split_commands,
    split_fields, unescape, DecodeError, DeltaCursor, FormatTag, Limits, WireResult,
};

const TEXT_KIND: &str = "t";

/// Decodes a stamp field.
pub fn decode_stamps(format: FormatTag, data: &str, limits: &Limits) -> WireResult<StampLayer> {
    match format {
        FormatTag::M3 => decode_m3(data, limits),
        tag => Err(DecodeError::UnsupportedFormat { tag }),
    }
}

fn decode_m3(data: &str, limits: &Limits) -> WireResult<StampLayer> {
    let mut layer = StampLayer::new();
    let mut cursor = DeltaCursor::new();

    for command in split_commands(data, limits)? {
        let fields = split_fields(command);
        if fields.len() < 2 {
            return Err(DecodeError::TruncatedCommand {
                command: "stamp",
                expected: 2,
                found: fields.len(),
            });
        }
        let dx = parse_int("stamp x", fields[0])?;
        let dy = parse_int("stamp y", fields[1])?;
        let pos = cursor.advance("stamp", dx, dy)?;

        let decoration = if fields.get(2) == Some(&TEXT_KIND) {
            Decoration::Text(decode_text(&fields)?)
        } else {
            Decoration::Stamp(decode_stamp(&fields)?)
        };
        layer.push(pos.x, pos.y, decoration);
    }
    Ok(layer)
}

fn decode_stamp(fields: &[&str]) -> WireResult<Stamp> {
    let kind = match fields.get(2) {
        None | Some(&"") => 0,
        Some(raw) => parse_int("stamp kind", raw)?,
    };
    let mut stamp = Stamp::new(kind);
    if fields.len() > 3 {
        if fields.len() < 5 {
            return Err(DecodeError::TruncatedCommand {
                command: "stamp",
                expected: 5,
                found: fields.len(),
            });
        }
        stamp.scale_x = parse_scale("scaleX", fields[3])?;
        stamp.scale_y = parse_scale("scaleY", fields[4])?;
    }
    Ok(stamp)
}

fn decode_text(fields: &[&str]) -> WireResult<Text> {
    if fields.len() < 7 {
        return Err(DecodeError::TruncatedCommand {
            command: "text",
            expected: 7,
            found: fields.len(),
        });
    }
    Ok(Text {
        content: unescape(fields[3])?,
        color: parse_decimal_color("text color", fields[4])?,
        scale_x: parse_scale("scaleX", fields[5])?,
        scale_y: parse_scale("scaleY", fields[6])?,
    })
}

/// Encodes a stamp layer.
///
/// Unscaled sprite 0 is written as a bare `dx;dy`. Text content is escaped
/// and its color written as a decimal packed RGB.
#[must_use]
pub fn encode_stamps(layer: &StampLayer) -> String {
    let mut commands = Vec::with_capacity(layer.object_count());
    let mut cursor = DeltaCursor::new();

    for (pos, decoration) in layer.objects() {
        let (dx, dy) = cursor.move_to(pos);
        let command = match decoration {
            Decoration::Stamp(stamp) if stamp.is_unscaled() && stamp.kind == 0 => {
                format!("{dx};{dy}")
            }
            Decoration::Stamp(stamp) if stamp.is_unscaled() => {
                format!("{dx};{dy};{}", stamp.kind)
            }
            Decoration::Stamp(stamp) => format!(
                "{dx};{dy};{};{};{}",
                stamp.kind,
                format_scale(stamp.scale_x),
                format_scale(stamp.scale_y)
            ),
            Decoration::Text(text) => format!(
                "{dx};{dy};{TEXT_KIND};{};{};{};{}",
                escape(&text.content),
                text.color.rgb(),
                format_scale(text.scale_x),
                format_scale(text.scale_y)
            ),
        };
        commands.push(command);
    }
    commands.join(",")
}
