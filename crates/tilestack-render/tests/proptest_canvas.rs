//! Property tests: a `Canvas` agrees with a naive painter's-algorithm model.

use proptest::prelude::*;
use tilestack_core::{Color, Rect};
use tilestack_render::{Canvas, Surface};

const PALETTE: [&str; 4] = ["red", "green", "blue", "yellow"];

fn fill() -> impl Strategy<Value = (Rect, usize)> {
    (-8i32..24, -8i32..24, 1u32..20, 1u32..20, 0usize..PALETTE.len())
        .prop_map(|(x, y, w, h, c)| (Rect::new(x, y, w, h), c))
}

proptest! {
    #[test]
    fn cell_shows_last_covering_fill(
        (w, h) in (1u32..16, 1u32..16),
        fills in proptest::collection::vec(fill(), 0..12),
    ) {
        let mut canvas = Canvas::new(w, h);
        for (rect, c) in &fills {
            canvas.fill_rect(*rect, &Color::named(PALETTE[*c]));
        }
        prop_assert_eq!(canvas.fill_count(), fills.len());

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let expected = fills
                    .iter()
                    .rev()
                    .find(|(rect, _)| rect.contains(x, y))
                    .map(|(_, c)| PALETTE[*c]);
                let actual = canvas.color_at(x, y).map(Color::as_str);
                prop_assert_eq!(actual, expected, "cell ({}, {})", x, y);
            }
        }
    }
}
