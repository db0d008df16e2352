use super::*;

const ITEMS: usize = 5;

// =============================================================
// Defaults and bounds
// =============================================================

#[test]
fn carousel_starts_at_zero_with_three_per_view() {
    let state = CarouselState::default();
    assert_eq!(state.index, 0);
    assert_eq!(state.items_per_view, 3);
}

#[test]
fn max_index_depends_on_items_per_view() {
    let mut state = CarouselState::default();
    assert_eq!(state.max_index(ITEMS), 2);
    state.items_per_view = 2;
    assert_eq!(state.max_index(ITEMS), 3);
    state.items_per_view = 1;
    assert_eq!(state.max_index(ITEMS), 4);
}

#[test]
fn max_index_is_zero_when_everything_fits() {
    let state = CarouselState::default();
    assert_eq!(state.max_index(3), 0);
    assert_eq!(state.max_index(2), 0);
    assert_eq!(state.max_index(0), 0);
}

// =============================================================
// Stepping
// =============================================================

#[test]
fn prev_stops_at_the_start() {
    let mut state = CarouselState::default();
    state.prev();
    assert_eq!(state.index, 0);
}

#[test]
fn next_stops_at_the_last_window() {
    let mut state = CarouselState::default();
    for _ in 0..10 {
        state.next(ITEMS);
    }
    assert_eq!(state.index, state.max_index(ITEMS));
}

#[test]
fn next_then_prev_round_trips() {
    let mut state = CarouselState::default();
    state.next(ITEMS);
    assert_eq!(state.index, 1);
    state.prev();
    assert_eq!(state.index, 0);
}

#[test]
fn go_to_clamps_to_the_valid_range() {
    let mut state = CarouselState::default();
    state.go_to(1, ITEMS);
    assert_eq!(state.index, 1);
    state.go_to(99, ITEMS);
    assert_eq!(state.index, state.max_index(ITEMS));
}

// =============================================================
// Responsive breakpoints
// =============================================================

#[test]
fn narrow_viewport_shows_one_item() {
    let mut state = CarouselState::default();
    state.set_viewport_width(480.0, ITEMS);
    assert_eq!(state.items_per_view, 1);
}

#[test]
fn tablet_viewport_shows_two_items() {
    let mut state = CarouselState::default();
    state.set_viewport_width(768.0, ITEMS);
    assert_eq!(state.items_per_view, 2);
}

#[test]
fn desktop_viewport_shows_three_items() {
    let mut state = CarouselState::default();
    state.set_viewport_width(1280.0, ITEMS);
    assert_eq!(state.items_per_view, 3);
}

#[test]
fn widening_the_viewport_reclamps_the_index() {
    let mut state = CarouselState::default();
    state.set_viewport_width(400.0, ITEMS);
    for _ in 0..4 {
        state.next(ITEMS);
    }
    assert_eq!(state.index, 4);

    state.set_viewport_width(1280.0, ITEMS);
    assert_eq!(state.index, 2);
}
