//! Property tests for `Rect` containment and union.

use proptest::prelude::*;
use tilestack_core::Rect;

fn rect() -> impl Strategy<Value = Rect> {
    (-500i32..500, -500i32..500, 1u32..300, 1u32..300)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

proptest! {
    #[test]
    fn union_contains_every_point_of_both(a in rect(), b in rect(), px in -600i32..900, py in -600i32..900) {
        let u = a.union(&b);
        if a.contains(px, py) || b.contains(px, py) {
            prop_assert!(u.contains(px, py), "{:?} missing ({}, {})", u, px, py);
        }
    }

    #[test]
    fn union_is_commutative(a in rect(), b in rect()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_is_minimal(a in rect(), b in rect()) {
        let u = a.union(&b);
        prop_assert_eq!(i64::from(u.left()), i64::from(a.left().min(b.left())));
        prop_assert_eq!(i64::from(u.top()), i64::from(a.top().min(b.top())));
        prop_assert_eq!(u.right(), a.right().max(b.right()));
        prop_assert_eq!(u.bottom(), a.bottom().max(b.bottom()));
    }

    #[test]
    fn intersection_points_are_in_both(a in rect(), b in rect(), px in -600i32..900, py in -600i32..900) {
        let inside = a.intersection_opt(&b).is_some_and(|r| r.contains(px, py));
        prop_assert_eq!(inside, a.contains(px, py) && b.contains(px, py));
    }
}
