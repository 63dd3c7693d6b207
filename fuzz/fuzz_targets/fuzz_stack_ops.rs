#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tilestack::{Tile, TileStack};
use tilestack_render::Canvas;

#[derive(Debug, Arbitrary)]
enum Op {
    AddFront { x: i8, y: i8, w: u8, h: u8, color: u8 },
    AddBack { x: i8, y: i8, w: u8, h: u8, color: u8 },
    Highlight { x: i8, y: i8 },
    Raise { x: i8, y: i8 },
    Lower { x: i8, y: i8 },
    Remove { x: i8, y: i8 },
    RemoveAll { x: i8, y: i8 },
    Merge { x: i8, y: i8 },
    Clear,
}

const COLORS: [&str; 4] = ["red", "green", "blue", "grey"];

fuzz_target!(|ops: Vec<Op>| {
    let mut stack = TileStack::new();

    for op in ops.iter().take(512) {
        let before = stack.len();
        match *op {
            Op::AddFront { x, y, w, h, color } | Op::AddBack { x, y, w, h, color } => {
                let color = COLORS[usize::from(color) % COLORS.len()];
                let added = match op {
                    Op::AddFront { .. } => stack.add_front(x.into(), y.into(), w.into(), h.into(), color),
                    _ => stack.add_back(x.into(), y.into(), w.into(), h.into(), color),
                };
                // Zero extents are rejected and leave the stack as it was.
                assert_eq!(added.is_ok(), w > 0 && h > 0);
                assert_eq!(stack.len(), before + usize::from(added.is_ok()));
            }
            Op::Highlight { x, y } => {
                let hit = stack.highlight(x.into(), y.into());
                assert_eq!(hit, stack.find_tile(x.into(), y.into()).is_some());
                assert_eq!(stack.len(), before);
            }
            Op::Raise { x, y } => {
                if stack.raise(x.into(), y.into()) {
                    assert!(stack.front().is_some_and(|t| t.contains(x.into(), y.into())));
                }
                assert_eq!(stack.len(), before);
            }
            Op::Lower { x, y } => {
                stack.lower(x.into(), y.into());
                assert_eq!(stack.len(), before);
            }
            Op::Remove { x, y } => {
                let removed = stack.remove(x.into(), y.into());
                assert_eq!(stack.len(), before - usize::from(removed));
            }
            Op::RemoveAll { x, y } => {
                let removed = stack.remove_all(x.into(), y.into());
                assert!(stack.find_tile(x.into(), y.into()).is_none());
                assert_eq!(stack.len(), before - removed);
            }
            Op::Merge { x, y } => {
                let hits = stack.tiles_at(x.into(), y.into()).count();
                let merged = stack.merge(x.into(), y.into());
                assert_eq!(merged.is_some(), hits > 0);
                if merged.is_some() {
                    assert_eq!(stack.front_id(), merged);
                    assert_eq!(stack.len(), before - hits + 1);
                }
            }
            Op::Clear => {
                stack.clear();
                assert!(stack.is_empty());
            }
        }

        if let Err(err) = stack.validate() {
            panic!("invariant broken after {op:?}: {err}");
        }
    }

    // Painting never panics and the canvas agrees with point lookup.
    let mut canvas = Canvas::new(64, 64);
    stack.draw_all(&mut canvas);
    for (x, y) in [(0, 0), (10, 10), (63, 63)] {
        assert_eq!(
            canvas.color_at(x, y),
            stack.find_tile(x, y).map(Tile::color)
        );
    }
});
