//! Coordinate mapper properties over realistic window geometries.

use digitpad::constants::SURFACE_SIZE;
use digitpad::input::coords::{CoordinateMapper, SurfaceGeometry};
use gpui::{bounds, point, px, size};

fn display_geometry() -> SurfaceGeometry {
    // Surface rendered at 1.5x, offset into the window the way the layout
    // places it
    SurfaceGeometry::new(
        bounds(point(px(64.0), px(120.0)), size(px(420.0), px(420.0))),
        SURFACE_SIZE,
        SURFACE_SIZE,
    )
}

#[test]
fn test_in_bounds_positions_map_into_surface_range() {
    let geo = display_geometry();
    let internal = SURFACE_SIZE as f32;

    // Sweep a grid of device positions across the rendered bounds
    for step_x in 0..=20 {
        for step_y in 0..=20 {
            let device = point(
                px(64.0 + 420.0 * (step_x as f32 / 20.0)),
                px(120.0 + 420.0 * (step_y as f32 / 20.0)),
            );
            let mapped = CoordinateMapper::window_to_surface(device, &geo).unwrap();
            assert!(
                (0.0..=internal).contains(&mapped.x),
                "x out of range: {} from device {:?}",
                mapped.x,
                device
            );
            assert!(
                (0.0..=internal).contains(&mapped.y),
                "y out of range: {} from device {:?}",
                mapped.y,
                device
            );
        }
    }
}

#[test]
fn test_corners_map_to_surface_corners() {
    let geo = display_geometry();

    let top_left = CoordinateMapper::window_to_surface(point(px(64.0), px(120.0)), &geo).unwrap();
    assert!(top_left.x.abs() < 1e-4);
    assert!(top_left.y.abs() < 1e-4);

    let bottom_right =
        CoordinateMapper::window_to_surface(point(px(64.0 + 420.0), px(120.0 + 420.0)), &geo)
            .unwrap();
    assert!((bottom_right.x - SURFACE_SIZE as f32).abs() < 1e-3);
    assert!((bottom_right.y - SURFACE_SIZE as f32).abs() < 1e-3);
}

#[test]
fn test_containment_matches_bounds() {
    let geo = display_geometry();
    assert!(geo.contains(point(px(100.0), px(200.0))));
    assert!(!geo.contains(point(px(10.0), px(200.0))));
    assert!(!geo.contains(point(px(100.0), px(600.0))));
}
