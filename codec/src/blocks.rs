//! Block layer grammar.
//!
//! Each command is `dx[;dy[;type]]` in grid units. The tile type carries over
//! to later commands until a command names a new one.

use layer::{Block, BlockLayer, GRID_SIZE, XY};
use wire::{
    parse_int, split_commands, DecodeError, DeltaCursor, FormatTag, Limits, WireResult,
    FIELD_DELIMITER,
};

/// Decodes a block field.
pub fn decode_blocks(format: FormatTag, data: &str, limits: &Limits) -> WireResult<BlockLayer> {
    match format {
        FormatTag::M3 => decode_m3(data, limits),
        tag => Err(DecodeError::UnsupportedFormat { tag }),
    }
}

fn decode_m3(data: &str, limits: &Limits) -> WireResult<BlockLayer> {
    let mut blocks = BlockLayer::new();
    let mut cursor = DeltaCursor::new();
    let mut kind = 0;

    for command in split_commands(data, limits)? {
        let mut fields = command.split(FIELD_DELIMITER);
        let dx = parse_int("block dx", fields.next().unwrap_or_default())?;
        let dy = match fields.next() {
            Some(raw) => parse_int("block dy", raw)?,
            None => 0,
        };
        if let Some(raw) = fields.next() {
            kind = parse_int("block t", raw)?;
        }

        let grid = cursor.advance("block", dx, dy)?;
        let (Some(x), Some(y)) = (
            grid.x.checked_mul(GRID_SIZE),
            grid.y.checked_mul(GRID_SIZE),
        ) else {
            return Err(DecodeError::CoordinateOverflow { command: "block" });
        };
        blocks.push(x, y, Block::new(kind));
    }
    Ok(blocks)
}

/// Encodes a block layer.
///
/// Every block gets an explicit `dx;dy`; the type is only written when it
/// differs from the previous block. Deltas are taken between pixel positions
/// and then divided down to grid units.
#[must_use]
pub fn encode_blocks(blocks: &BlockLayer) -> String {
    let mut commands = Vec::with_capacity(blocks.object_count());
    let mut prev = XY::new(0, 0);
    let mut kind = 0;

    for (pos, block) in blocks.objects() {
        let mut command = format!(
            "{};{}",
            grid_delta(prev.x, pos.x),
            grid_delta(prev.y, pos.y)
        );
        prev = pos;
        if block.kind() != kind {
            kind = block.kind();
            command.push(FIELD_DELIMITER);
            command.push_str(&kind.to_string());
        }
        commands.push(command);
    }
    commands.join(",")
}

/// Pixel delta in grid units. Widened so far-apart blocks do not wrap.
fn grid_delta(from: i32, to: i32) -> i64 {
    (i64::from(to) - i64::from(from)) / i64::from(GRID_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &str) -> WireResult<BlockLayer> {
        decode_blocks(FormatTag::M3, data, &Limits::for_testing())
    }

    #[test]
    fn empty_field_is_empty_layer() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn deltas_accumulate_and_scale() {
        let blocks = decode("5;3,2;0,-1;-1;4").unwrap();
        assert_eq!(blocks.get(150, 90), Some(&[Block::new(0)][..]));
        assert_eq!(blocks.get(210, 90), Some(&[Block::new(0)][..]));
        assert_eq!(blocks.get(180, 60), Some(&[Block::new(4)][..]));
    }

    #[test]
    fn type_persists_until_changed() {
        let blocks = decode("0;0;7,1;0,1;0;9,1").unwrap();
        assert_eq!(blocks.peek(0, 0), Some(&Block::new(7)));
        assert_eq!(blocks.peek(30, 0), Some(&Block::new(7)));
        assert_eq!(blocks.peek(60, 0), Some(&Block::new(9)));
        assert_eq!(blocks.peek(90, 0), Some(&Block::new(9)));
    }

    #[test]
    fn dy_is_optional() {
        let blocks = decode("2;1,3").unwrap();
        assert!(blocks.contains(60, 30));
        assert!(blocks.contains(150, 30));
    }

    #[test]
    fn zero_delta_stacks() {
        let blocks = decode("1;1;5,0;0;6").unwrap();
        assert_eq!(blocks.get(30, 30), Some(&[Block::new(5), Block::new(6)][..]));
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        assert_eq!(
            decode("100000000;0;5").unwrap_err(),
            DecodeError::CoordinateOverflow { command: "block" }
        );
        assert_eq!(
            decode("2147483647;0,1;0").unwrap_err(),
            DecodeError::CoordinateOverflow { command: "block" }
        );
    }

    #[test]
    fn far_apart_blocks_roundtrip() {
        let blocks = decode("-70000000;0;5,140000000;0").unwrap();
        assert!(blocks.contains(-2_100_000_000, 0));
        assert!(blocks.contains(2_100_000_000, 0));
        let encoded = encode_blocks(&blocks);
        assert_eq!(encoded, "-70000000;0;5,140000000;0");
        assert_eq!(decode(&encoded).unwrap(), blocks);
    }

    #[test]
    fn bad_dx_names_field() {
        let err = decode("1;1,x").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedNumber {
                field: "block dx",
                raw: "x".to_string(),
            }
        );
    }

    #[test]
    fn bad_dy_and_type_name_fields() {
        assert!(matches!(
            decode("1;?").unwrap_err(),
            DecodeError::MalformedNumber { field: "block dy", .. }
        ));
        assert!(matches!(
            decode("1;1;t").unwrap_err(),
            DecodeError::MalformedNumber { field: "block t", .. }
        ));
    }

    #[test]
    fn empty_command_is_malformed() {
        assert!(matches!(
            decode("1;1,,2;2").unwrap_err(),
            DecodeError::MalformedNumber { field: "block dx", .. }
        ));
    }

    #[test]
    fn legacy_formats_unsupported() {
        for tag in [FormatTag::Original, FormatTag::M1, FormatTag::M2] {
            let err = decode_blocks(tag, "1;1", &Limits::default()).unwrap_err();
            assert_eq!(err, DecodeError::UnsupportedFormat { tag });
        }
    }

    #[test]
    fn encode_empty_layer() {
        assert_eq!(encode_blocks(&BlockLayer::new()), "");
    }

    #[test]
    fn encode_omits_repeated_type() {
        let mut blocks = BlockLayer::new();
        blocks.push(30, 30, Block::new(3));
        blocks.push(60, 30, Block::new(3));
        blocks.push(60, 30, Block::new(0));
        assert_eq!(encode_blocks(&blocks), "1;1;3,1;0,0;0;0");
    }

    #[test]
    fn encode_skips_type_zero_at_start() {
        let mut blocks = BlockLayer::new();
        blocks.push(0, 30, Block::new(0));
        assert_eq!(encode_blocks(&blocks), "0;1");
    }

    #[test]
    fn roundtrip_default_blocks() {
        let mut blocks = BlockLayer::new();
        for (i, kind) in (111..=114).enumerate() {
            blocks.push(12390 + 30 * i as i32, 10050, Block::new(kind));
        }
        let encoded = encode_blocks(&blocks);
        assert_eq!(encoded, "413;335;111,1;0;112,1;0;113,1;0;114");
        assert_eq!(decode(&encoded).unwrap(), blocks);
    }
}
