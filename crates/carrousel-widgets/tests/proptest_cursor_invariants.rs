//! Property-based invariant tests for the carousel cursor.
//!
//! These tests verify the cyclic-group properties that must hold for any
//! slide count and any sequence of operations:
//!
//! 1. The cursor stays in range after any operation sequence.
//! 2. Exactly one slide is active after any operation sequence.
//! 3. advance applied N times is the identity.
//! 4. retreat is the exact inverse of advance, in both orders.
//! 5. Empty slide sets never panic and never mark a slide active.

use carrousel_widgets::{Carousel, CarouselState, Slide};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Retreat,
}

fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![Just(Op::Advance), Just(Op::Retreat)],
        0..=max_len,
    )
}

fn apply(state: &mut CarouselState, op: Op, count: usize) {
    match op {
        Op::Advance => state.advance(count),
        Op::Retreat => state.retreat(count),
    };
}

proptest! {
    #[test]
    fn cursor_stays_in_range(count in 1usize..32, ops in ops(64)) {
        let mut state = CarouselState::default();
        for op in ops {
            apply(&mut state, op, count);
            prop_assert!(state.cursor < count);
        }
    }

    #[test]
    fn exactly_one_active_slide(count in 1usize..32, ops in ops(64)) {
        let mut state = CarouselState::default();
        for op in ops {
            apply(&mut state, op, count);
            let active = (0..count).filter(|&i| state.is_active(i, count)).count();
            prop_assert_eq!(active, 1);
        }
    }

    #[test]
    fn advance_n_times_is_identity(count in 1usize..32, start in 0usize..32) {
        let mut state = CarouselState { cursor: start % count };
        let original = state.cursor;
        for _ in 0..count {
            state.advance(count);
        }
        prop_assert_eq!(state.cursor, original);
    }

    #[test]
    fn retreat_inverts_advance(count in 1usize..32, start in 0usize..32) {
        let mut state = CarouselState { cursor: start % count };
        let original = state.cursor;

        state.advance(count);
        state.retreat(count);
        prop_assert_eq!(state.cursor, original);

        state.retreat(count);
        state.advance(count);
        prop_assert_eq!(state.cursor, original);
    }

    #[test]
    fn empty_set_never_panics(ops in ops(64)) {
        let carousel = Carousel::new(Vec::<Slide>::new());
        let mut state = CarouselState::default();
        for op in ops {
            let moved = match op {
                Op::Advance => carousel.advance(&mut state),
                Op::Retreat => carousel.retreat(&mut state),
            };
            prop_assert!(!moved);
            prop_assert_eq!(state.active(carousel.len()), None);
        }
    }
}
