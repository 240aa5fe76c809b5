//! Integration tests for multislider-core.
//!
//! These tests exercise the public API the widgets build on.

use multislider_core::{
    Canvas, ClassificationBroadcaster, ClassificationEvent, Color, Constraints, DrawCommand,
    Point, RangeChange, RangeModel, RecordingCanvas, Rect, RepeatTimer, Size, WidgetId,
};
use std::sync::{Arc, Mutex};

// =============================================================================
// Range model
// =============================================================================

#[test]
fn test_range_model_notifies_every_listener() {
    let seen: Arc<Mutex<Vec<RangeChange>>> = Arc::default();
    let mut model = RangeModel::new(40, 0, 100);
    for _ in 0..2 {
        let sink = Arc::clone(&seen);
        model.subscribe(move |change| sink.lock().expect("not poisoned").push(*change));
    }

    assert!(model.set_value(55));
    assert!(!model.set_value(55));
    assert!(model.set_value(500));
    assert_eq!(model.value(), 100);

    let seen = seen.lock().expect("not poisoned");
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0].previous, 40);
    assert_eq!(seen[3].value, 100);
}

#[test]
fn test_range_model_reclamps_on_new_range() {
    let mut model = RangeModel::new(80, 0, 100);
    model.set_range(50, 10);
    assert_eq!((model.minimum(), model.maximum()), (10, 50));
    assert_eq!(model.value(), 50);
}

// =============================================================================
// Timer
// =============================================================================

#[test]
fn test_repeat_timer_coalesces_missed_fires() {
    let mut timer = RepeatTimer::new(100);
    timer.start(0);
    assert!(!timer.poll(99));
    assert!(timer.poll(1_000));
    assert!(!timer.poll(1_050));
    assert!(timer.poll(1_100));
    timer.stop();
    assert!(!timer.poll(5_000));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_broadcast_reaches_listeners_in_order() {
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::default();
    let mut broadcaster = ClassificationBroadcaster::new();

    let first = Arc::clone(&order);
    broadcaster.add_listener(move |_: &ClassificationEvent| {
        first.lock().expect("not poisoned").push("legend");
    });
    let second = Arc::clone(&order);
    let map = broadcaster.add_listener(move |_: &ClassificationEvent| {
        second.lock().expect("not poisoned").push("map");
    });

    let event = ClassificationEvent::new(Some(WidgetId::new(1)), vec![30.0, 10.0]);
    broadcaster.fire_classification_changed(&event);
    assert!(broadcaster.remove_listener(map));
    broadcaster.fire_classification_changed(&event);

    assert_eq!(*order.lock().expect("not poisoned"), vec!["legend", "map", "legend"]);
    assert_eq!(event.breaks, vec![10.0, 30.0]);
}

// =============================================================================
// Geometry and drawing
// =============================================================================

#[test]
fn test_rect_geometry() {
    let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(rect.center(), Point::new(60.0, 40.0));
    assert!(rect.contains_point(&Point::new(10.0, 20.0)));
    assert_eq!(rect.inset(5.0), Rect::new(15.0, 25.0, 90.0, 30.0));
    assert_eq!(
        Constraints::loose(Size::new(50.0, 50.0)).constrain(rect.size()),
        Size::new(50.0, 40.0)
    );
}

#[test]
fn test_recording_canvas_captures_commands() {
    let mut canvas = RecordingCanvas::new();
    canvas.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
    canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
    canvas.draw_line(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Color::BLACK,
        1.0,
    );
    canvas.pop_clip();

    assert_eq!(canvas.clip_depth(), 0);
    assert!(canvas
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, DrawCommand::Rect { .. })));
}
