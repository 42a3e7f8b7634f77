//! Coordinate conversion from window pixel space to surface pixel space.
//!
//! The drawing surface is rendered larger than its internal pixel grid, so
//! every sample has to be rescaled: a stroke mapped without the correction
//! lands at the wrong internal pixel.

use crate::types::Point;
use gpui::{Bounds, Pixels};
use thiserror::Error;

/// The surface had no rendered area to map into. Callers drop the sample;
/// this is never surfaced to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("drawing surface has zero rendered size")]
pub struct DegenerateGeometry;

/// Geometry needed to map a device position onto the surface: where the
/// surface sits on screen and how many internal pixels it carries.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceGeometry {
    /// On-screen bounds of the rendered surface
    pub bounds: Bounds<Pixels>,
    /// Internal bitmap width in logical pixels
    pub internal_width: f32,
    /// Internal bitmap height in logical pixels
    pub internal_height: f32,
}

impl SurfaceGeometry {
    pub fn new(bounds: Bounds<Pixels>, internal_width: u32, internal_height: u32) -> Self {
        Self {
            bounds,
            internal_width: internal_width as f32,
            internal_height: internal_height as f32,
        }
    }

    /// True when the device position falls inside the rendered bounds
    #[inline]
    pub fn contains(&self, position: gpui::Point<Pixels>) -> bool {
        self.bounds.contains(&position)
    }
}

pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Map a device position in window space to surface-internal space.
    ///
    /// `scale = internal / rendered` per axis; `internal = (device - origin) * scale`.
    /// Pure function of the event position and the captured geometry.
    #[inline]
    pub fn window_to_surface(
        position: gpui::Point<Pixels>,
        geometry: &SurfaceGeometry,
    ) -> Result<Point, DegenerateGeometry> {
        let rendered_width = f32::from(geometry.bounds.size.width);
        let rendered_height = f32::from(geometry.bounds.size.height);
        if rendered_width <= 0.0 || rendered_height <= 0.0 {
            return Err(DegenerateGeometry);
        }

        let scale_x = geometry.internal_width / rendered_width;
        let scale_y = geometry.internal_height / rendered_height;
        Ok(Point::new(
            (f32::from(position.x) - f32::from(geometry.bounds.origin.x)) * scale_x,
            (f32::from(position.y) - f32::from(geometry.bounds.origin.y)) * scale_y,
        ))
    }

    /// Map a surface-internal position back to window space (used when
    /// painting recorded segments at the display scale).
    #[inline]
    pub fn surface_to_window(
        point: Point,
        geometry: &SurfaceGeometry,
    ) -> gpui::Point<Pixels> {
        let scale_x = f32::from(geometry.bounds.size.width) / geometry.internal_width;
        let scale_y = f32::from(geometry.bounds.size.height) / geometry.internal_height;
        gpui::point(
            geometry.bounds.origin.x + gpui::px(point.x * scale_x),
            geometry.bounds.origin.y + gpui::px(point.y * scale_y),
        )
    }
}
