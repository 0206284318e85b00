use mediacanvas_core::geometry::*;

fn placement(x: f64, y: f64, width: f64, height: f64) -> Placement {
    Placement {
        position: Point::new(x, y),
        size: Size::new(width, height),
    }
}

#[test]
fn test_drag_offsets_position_only() {
    let start = placement(10.0, 20.0, 100.0, 80.0);
    let moved = drag(start, Point::new(-30.0, 5.0));
    assert_eq!(moved.position, Point::new(-20.0, 25.0));
    assert_eq!(moved.size, start.size);
}

#[test]
fn test_resize_right_grows_width() {
    let start = placement(0.0, 0.0, 100.0, 100.0);
    let result = resize(start, Point::new(40.0, 999.0), ResizeDirection::Right, 50.0);
    assert_eq!(result.size, Size::new(140.0, 100.0));
    assert_eq!(result.position, start.position);
}

#[test]
fn test_resize_left_keeps_right_edge_fixed() {
    let start = placement(100.0, 0.0, 200.0, 100.0);
    let result = resize(start, Point::new(30.0, 0.0), ResizeDirection::Left, 50.0);
    assert_eq!(result.size.width, 170.0);
    assert_eq!(result.position.x, 130.0);
    assert_eq!(
        result.position.x + result.size.width,
        start.position.x + start.size.width
    );
}

#[test]
fn test_resize_top_keeps_bottom_edge_fixed() {
    let start = placement(0.0, 50.0, 100.0, 100.0);
    let result = resize(start, Point::new(0.0, -25.0), ResizeDirection::Top, 50.0);
    assert_eq!(result.size.height, 125.0);
    assert_eq!(result.position.y, 25.0);
}

#[test]
fn test_resize_bottom_right_clamps_to_minimum() {
    let start = placement(5.0, 5.0, 100.0, 100.0);
    let result = resize(start, Point::new(-60.0, -60.0), ResizeDirection::BottomRight, 50.0);
    assert_eq!(result.size, Size::new(50.0, 50.0));
    assert_eq!(result.position, Point::new(5.0, 5.0));
}

#[test]
fn test_resize_top_left_clamp_moves_origin_by_actual_change() {
    let start = placement(0.0, 0.0, 100.0, 100.0);
    let result = resize(start, Point::new(80.0, 80.0), ResizeDirection::TopLeft, 50.0);
    assert_eq!(result.size, Size::new(50.0, 50.0));
    // Opposite corner stays at (100, 100).
    assert_eq!(result.position, Point::new(50.0, 50.0));
}

#[test]
fn test_resize_compound_direction_applies_each_axis() {
    let start = placement(0.0, 0.0, 100.0, 100.0);
    let result = resize(start, Point::new(20.0, -10.0), ResizeDirection::TopRight, 50.0);
    assert_eq!(result.size, Size::new(120.0, 110.0));
    assert_eq!(result.position, Point::new(0.0, -10.0));

    let result = resize(start, Point::new(-20.0, 10.0), ResizeDirection::BottomLeft, 50.0);
    assert_eq!(result.size, Size::new(120.0, 110.0));
    assert_eq!(result.position, Point::new(-20.0, 0.0));
}

#[test]
fn test_resize_is_relative_to_gesture_start() {
    // Replaying the same cumulative delta gives the same answer no matter
    // how many intermediate moves happened.
    let start = placement(0.0, 0.0, 100.0, 100.0);
    let mut last = start;
    for step in 1..=10 {
        last = resize(start, Point::new(step as f64 * -10.0, 0.0), ResizeDirection::Right, 50.0);
    }
    assert_eq!(last.size.width, 50.0);
    let back = resize(start, Point::new(-10.0, 0.0), ResizeDirection::Right, 50.0);
    assert_eq!(back.size.width, 90.0);
}

#[test]
fn test_every_direction_respects_minimum() {
    let start = placement(0.0, 0.0, 60.0, 60.0);
    for direction in ResizeDirection::ALL {
        for delta in [-500.0, -20.0, 0.0, 20.0, 500.0] {
            let result = resize(start, Point::new(delta, delta), direction, 50.0);
            assert!(
                result.size.fits_minimum(50.0),
                "{direction} with delta {delta} gave {:?}",
                result.size
            );
        }
    }
}

#[test]
fn test_size_field_with_aspect_lock() {
    let bounds = SizeBounds { min: 10.0, max: 1000.0 };
    let current = Size::new(320.0, 160.0);
    let aspect = current.aspect_ratio();

    let result = apply_size_field(current, SizeField::Width, 101.0, Some(aspect), bounds);
    assert_eq!(result, Size::new(101.0, 51.0));

    let result = apply_size_field(current, SizeField::Height, 100.0, Some(aspect), bounds);
    assert_eq!(result, Size::new(200.0, 100.0));
}

#[test]
fn test_size_field_without_lock_changes_one_dimension() {
    let bounds = SizeBounds { min: 10.0, max: 1000.0 };
    let current = Size::new(320.0, 160.0);
    let result = apply_size_field(current, SizeField::Height, 400.0, None, bounds);
    assert_eq!(result, Size::new(320.0, 400.0));
}

#[test]
fn test_size_field_clamps_to_bounds() {
    let bounds = SizeBounds { min: 10.0, max: 1000.0 };
    let current = Size::new(320.0, 160.0);

    let result = apply_size_field(current, SizeField::Width, 2.0, None, bounds);
    assert_eq!(result.width, 10.0);

    let result = apply_size_field(current, SizeField::Width, 5000.0, None, bounds);
    assert_eq!(result.width, 1000.0);

    // The derived dimension is clamped too.
    let result = apply_size_field(current, SizeField::Width, 12.0, Some(2.0), bounds);
    assert_eq!(result, Size::new(12.0, 10.0));
}
