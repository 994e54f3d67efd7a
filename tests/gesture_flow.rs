use std::cell::RefCell;
use std::rc::Rc;

use rulerpick::{GesturePhase, Orientation, RulerConfig, RulerState};

const DT: f32 = 1.0 / 60.0;

fn settle(state: &mut RulerState, cfg: &RulerConfig) {
    let mut frames = 0;
    while state.scroll.is_animating() {
        state.scroll.tick(cfg, DT);
        state.sync_selection(cfg);
        frames += 1;
        assert!(frames < 10_000, "gesture failed to settle");
    }
}

#[test]
fn drag_then_release_settles_on_the_nearest_tick() {
    let cfg = RulerConfig::default();
    let mut state = RulerState::new(&cfg).unwrap();

    state.scroll.begin_drag();
    state.scroll.drag_by(&cfg, cfg.space * 5.6);
    state.sync_selection(&cfg);
    assert_eq!(state.current_line(), 6, "highlight tracks the drag continuously");

    state.scroll.end_drag(&cfg, 0.0);
    settle(&mut state, &cfg);
    assert_eq!(state.phase(), GesturePhase::Idle);
    assert_eq!(state.current_line(), 6);
    assert_eq!(state.offset(), 6.0 * cfg.space, "snap lands exactly on the tick");
}

#[test]
fn offset_never_leaves_the_tick_range_during_a_fling() {
    let cfg = RulerConfig::default().with_range(0, 40);
    let mut state = RulerState::new(&cfg).unwrap();

    state.scroll.begin_drag();
    state.scroll.end_drag(&cfg, 30_000.0);
    let (lo, hi) = (0.0, 40.0 * cfg.space);
    let mut frames = 0;
    while state.scroll.is_animating() {
        state.scroll.tick(&cfg, DT);
        state.sync_selection(&cfg);
        let offset = state.offset();
        assert!(
            (lo..=hi).contains(&offset),
            "frame {frames}: offset {offset} escaped [{lo}, {hi}]"
        );
        frames += 1;
        assert!(frames < 10_000);
    }
    assert_eq!(state.offset(), hi, "a hard fling parks on the far bound");
    assert_eq!(state.current_line(), 40);
}

#[test]
fn fling_notifications_never_repeat_or_regress() {
    let cfg = RulerConfig::default();
    let mut state = RulerState::new(&cfg).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    state.on_change(move |change| sink.borrow_mut().push(change.index));

    state.scroll.begin_drag();
    state.scroll.end_drag(&cfg, 900.0);
    settle(&mut state, &cfg);

    let indices = seen.borrow().clone();
    assert!(!indices.is_empty(), "a real fling must change the selection");
    // Strictly increasing: each crossed tick is reported exactly once.
    for pair in indices.windows(2) {
        assert!(pair[0] < pair[1], "duplicate or regressing notification: {indices:?}");
    }
    assert_eq!(*indices.last().unwrap(), state.current_index(&cfg));
}

#[test]
fn new_drag_interrupts_a_fling_without_losing_the_offset() {
    let cfg = RulerConfig::default();
    let mut state = RulerState::new(&cfg).unwrap();

    state.scroll.begin_drag();
    state.scroll.end_drag(&cfg, 2_000.0);
    for _ in 0..5 {
        state.scroll.tick(&cfg, DT);
    }
    let mid_flight = state.offset();
    assert!(state.scroll.is_animating());

    state.scroll.begin_drag();
    assert_eq!(state.phase(), GesturePhase::Dragging);
    assert_eq!(state.offset(), mid_flight, "grabbing the ruler freezes it in place");
}

#[test]
fn horizontal_axis_uses_the_same_offset_domain() {
    let cfg = RulerConfig::default()
        .with_orientation(Orientation::Horizontal)
        .with_range(0, 150);
    let mut state = RulerState::new(&cfg).unwrap();

    // Dragging the content leftwards (negative x deltas map to positive
    // offset deltas) raises the value, exactly as on the vertical axis.
    state.scroll.begin_drag();
    state.scroll.drag_by(&cfg, cfg.space * 12.0);
    state.scroll.end_drag(&cfg, 0.0);
    settle(&mut state, &cfg);
    state.sync_selection(&cfg);
    assert_eq!(state.current_line(), 12);
    assert_eq!(state.current_value(&cfg), 12);
}
