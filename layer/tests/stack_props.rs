use layer::{Block, BlockLayer, Color, Decoration, Stamp, StampLayer, Text, XY};
use proptest::prelude::*;

fn arb_layer() -> impl Strategy<Value = BlockLayer> {
    prop::collection::vec(((-4i32..4, -4i32..4), any::<i32>()), 0..32).prop_map(|cells| {
        cells
            .into_iter()
            .map(|((x, y), kind)| (XY::new(x * 30, y * 30), Block::new(kind)))
            .collect()
    })
}

proptest! {
    #[test]
    fn push_then_pop_restores_layer(
        layer in arb_layer(),
        x in -4i32..4,
        y in -4i32..4,
        kind in any::<i32>(),
    ) {
        let mut working = layer.clone();
        working.push(x, y, Block::new(kind));
        prop_assert_eq!(working.peek(x, y), Some(&Block::new(kind)));
        prop_assert_eq!(working.pop(x, y), Some(Block::new(kind)));
        prop_assert_eq!(working, layer);
    }

    #[test]
    fn popping_whole_stack_removes_cell(depth in 1usize..8, x in any::<i32>(), y in any::<i32>()) {
        let mut layer = BlockLayer::new();
        for kind in 0..depth {
            layer.push(x, y, Block::new(kind as i32));
        }
        for kind in (0..depth).rev() {
            prop_assert!(layer.contains(x, y));
            prop_assert_eq!(layer.pop(x, y), Some(Block::new(kind as i32)));
        }
        prop_assert!(!layer.contains(x, y));
        prop_assert_eq!(layer.get(x, y), None);
        prop_assert!(layer.is_empty());
    }

    #[test]
    fn no_cell_is_ever_empty(ops in prop::collection::vec((any::<bool>(), 0i32..3, 0i32..3), 0..64)) {
        let mut layer = BlockLayer::new();
        for (push, x, y) in ops {
            if push {
                layer.push(x, y, Block::new(1));
            } else {
                let _ = layer.pop(x, y);
            }
            for (_, stack) in layer.cells() {
                prop_assert!(!stack.is_empty());
            }
        }
    }
}

#[test]
fn stamp_layer_mixes_stamps_and_text() {
    let mut layer = StampLayer::new();
    layer.push(10, 10, Stamp::new(4).into());
    layer.push(10, 10, Text::new("hello", Color::from_rgb(0xFF_0000)).into());

    let stack = layer.get(10, 10).unwrap();
    assert!(matches!(stack[0], Decoration::Stamp(Stamp { kind: 4, .. })));
    assert!(matches!(&stack[1], Decoration::Text(text) if text.content == "hello"));
}

#[cfg(feature = "serde")]
#[test]
fn layer_serializes_as_cell_pairs() {
    let mut layer = BlockLayer::new();
    layer.push(30, 60, Block::new(5));
    layer.push(30, 60, Block::new(6));

    let json = serde_json::to_string(&layer).unwrap();
    assert_eq!(json, r#"[[{"x":30,"y":60},[5,6]]]"#);

    let back: BlockLayer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, layer);
}
