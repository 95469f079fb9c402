use std::cell::Cell as StdCell;

use wheel_picker::event::Key;
use wheel_picker::{Buffer, Rect, SelectorProperties, Wheel, WheelInput, WheelStyle};

fn labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| i.to_string()).collect()
}

#[test]
fn test_start_index_is_clamped() {
    let wheel = Wheel::new(labels(3), 10);
    assert_eq!(wheel.selected(), 2);
    assert_eq!(wheel.selected_label(), Some("3"));
}

#[test]
fn test_row_count_is_odd_and_positive() {
    assert_eq!(Wheel::new(labels(3), 0).row_count(), 3);
    assert_eq!(Wheel::new(labels(3), 0).with_row_count(4).row_count(), 5);
    assert_eq!(Wheel::new(labels(3), 0).with_row_count(0).row_count(), 1);
}

#[test]
fn test_scroll_settles_through_callback() {
    let mut wheel = Wheel::new(labels(10), 2);
    let settled = StdCell::new(None);

    let result = wheel.scroll_by(3, |index| {
        settled.set(Some(index));
        index
    });

    assert_eq!(settled.get(), Some(5));
    assert_eq!(result, Some(5));
    assert_eq!(wheel.selected(), 5);
}

#[test]
fn test_callback_can_redirect_snap() {
    let mut wheel = Wheel::new(labels(10), 2);
    assert_eq!(wheel.scroll_by(1, |_| 7), Some(7));
    assert_eq!(wheel.selected(), 7);
}

#[test]
fn test_scroll_past_boundary_clamps() {
    let mut wheel = Wheel::new(labels(5), 3);
    assert_eq!(wheel.scroll_by(10, |i| i), Some(4));
    assert_eq!(wheel.scroll_by(-10, |i| i), Some(0));
}

#[test]
fn test_scroll_at_boundary_does_not_settle() {
    let mut wheel = Wheel::new(labels(5), 0);
    let called = StdCell::new(false);

    let result = wheel.scroll_by(-1, |i| {
        called.set(true);
        i
    });

    assert_eq!(result, None);
    assert!(!called.get());
}

#[test]
fn test_empty_wheel_never_settles() {
    let mut wheel = Wheel::new(Vec::new(), 0);
    assert!(wheel.is_empty());
    assert_eq!(wheel.scroll_by(1, |i| i), None);
    assert_eq!(wheel.selected_label(), None);
}

#[test]
fn test_set_labels_clamps_selection() {
    let mut wheel = Wheel::new(labels(31), 30);

    assert!(wheel.set_labels(labels(28)));
    assert_eq!(wheel.selected(), 27);

    assert!(!wheel.set_labels(labels(31)));
    assert_eq!(wheel.selected(), 27);
}

#[test]
fn test_visible_indices_pad_at_edges() {
    let wheel = Wheel::new(labels(3), 0);
    assert_eq!(wheel.visible_indices(), vec![None, Some(0), Some(1)]);

    let wheel = Wheel::new(labels(3), 2).with_row_count(5);
    assert_eq!(
        wheel.visible_indices(),
        vec![Some(0), Some(1), Some(2), None, None]
    );
}

#[test]
fn test_window_centers_on_selection() {
    let wheel = Wheel::new(labels(10), 5).with_row_count(9);
    assert_eq!(wheel.window(3), vec![Some(4), Some(5), Some(6)]);
    assert_eq!(wheel.window(1), vec![Some(5)]);
}

#[test]
fn test_render_short_area_keeps_selected_row() {
    let wheel = Wheel::new(vec!["a".into(), "b".into(), "c".into()], 1)
        .with_selector(SelectorProperties::disabled())
        .with_row_count(7);
    let mut buf = Buffer::new(7, 1);

    wheel.render(&mut buf, Rect::new(0, 0, 7, 1), &WheelStyle::default());

    assert_eq!(buf.row_text(0, 0, 7), "   b   ");
}

#[test]
fn test_key_mapping() {
    assert_eq!(WheelInput::from_key(Key::Up, 3), Some(WheelInput::Step(-1)));
    assert_eq!(WheelInput::from_key(Key::Char('j'), 3), Some(WheelInput::Step(1)));
    assert_eq!(WheelInput::from_key(Key::PageDown, 5), Some(WheelInput::Step(5)));
    assert_eq!(WheelInput::from_key(Key::End, 3), Some(WheelInput::Last));
    assert_eq!(WheelInput::from_key(Key::Enter, 3), None);
}

#[test]
fn test_apply_first_and_last() {
    let mut wheel = Wheel::new(labels(12), 5);
    assert_eq!(wheel.apply(WheelInput::Last, |i| i), Some(11));
    assert_eq!(wheel.apply(WheelInput::First, |i| i), Some(0));
}

#[test]
fn test_render_centers_selected_label() {
    let wheel = Wheel::new(vec!["a".into(), "b".into(), "c".into()], 1)
        .with_selector(SelectorProperties::disabled());
    let mut buf = Buffer::new(7, 3);

    wheel.render(&mut buf, Rect::new(0, 0, 7, 3), &WheelStyle::default());

    assert_eq!(buf.row_text(0, 0, 7), "   a   ");
    assert_eq!(buf.row_text(1, 0, 7), "   b   ");
    assert_eq!(buf.row_text(2, 0, 7), "   c   ");
    assert!(buf.get(3, 1).unwrap().style.bold);
    assert!(buf.get(3, 0).unwrap().style.dim);
}

#[test]
fn test_render_highlight_marks_selected_row() {
    let wheel = Wheel::new(vec!["a".into(), "b".into(), "c".into()], 1);
    let mut buf = Buffer::new(7, 3);

    wheel.render(&mut buf, Rect::new(0, 0, 7, 3), &WheelStyle::default());

    assert_eq!(buf.row_text(1, 0, 7), "│  b  │");
    let highlighted = buf.get(3, 1).unwrap().bg;
    let plain = buf.get(3, 0).unwrap().bg;
    assert_ne!(highlighted, plain);
}

#[test]
fn test_render_truncates_long_labels() {
    let wheel = Wheel::new(vec!["September".into()], 0)
        .with_selector(SelectorProperties::disabled())
        .with_row_count(1);
    let mut buf = Buffer::new(7, 1);

    wheel.render(&mut buf, Rect::new(0, 0, 7, 1), &WheelStyle::default());

    assert_eq!(buf.row_text(0, 0, 7), " Sept… ");
}
