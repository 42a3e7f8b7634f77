//! The persistent drawing bitmap and its export path.
//!
//! A `RasterSurface` is a fixed 280x280 grayscale bitmap, white background,
//! black stroke, stroke width fixed at construction. Segments are rasterized
//! as capsules (a thick line with round caps and joins), so consecutive short
//! segments from fast sampling read as one continuous stroke.
//!
//! Export re-encodes the whole bitmap after every mutation. There is no dirty
//! tracking; at 280x280 a full PNG encode per segment is cheap and keeps the
//! exporter trivially correct. A larger surface would need incremental export.

use crate::constants::{BACKGROUND_LUMA, STROKE_LUMA, STROKE_WIDTH, SURFACE_SIZE};
use crate::types::Point;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};
use thiserror::Error;

/// PNG encoding failed while exporting the surface.
#[derive(Error, Debug)]
#[error("failed to encode surface: {0}")]
pub struct ExportError(#[from] image::ImageError);

/// A serialized snapshot of the surface: a `data:image/png;base64,` string.
///
/// Produced fresh after every mutating operation; two snapshots of identical
/// bitmaps compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// The full data-URL string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw base64 payload with the data-URL prefix stripped, as the
    /// classifier service expects it.
    pub fn payload(&self) -> &str {
        match self.0.split_once(',') {
            Some((_, payload)) => payload,
            None => &self.0,
        }
    }
}

/// The session-lived drawing bitmap.
pub struct RasterSurface {
    image: GrayImage,
    stroke_radius: f32,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    /// Create a surface already reset to the background color. An
    /// unpainted surface is not a valid state.
    pub fn new() -> Self {
        let mut surface = Self {
            image: GrayImage::new(SURFACE_SIZE, SURFACE_SIZE),
            stroke_radius: STROKE_WIDTH / 2.0,
        };
        surface.reset();
        surface
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Luminance at a pixel; callers must stay in bounds.
    pub fn luma_at(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    /// True when no stroke pixel has been painted since the last reset
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0[0] == BACKGROUND_LUMA)
    }

    /// Fill the entire bitmap with the background color, discarding all
    /// strokes. Idempotent: a second reset changes nothing.
    pub fn reset(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Luma([BACKGROUND_LUMA]);
        }
    }

    /// Paint a stroke-width line between two points with round caps and
    /// joins. `from == to` stamps a filled dot of the stroke width.
    ///
    /// A pixel is painted when its center lies within the stroke radius of
    /// the segment, which makes joined collinear segments cover exactly the
    /// pixels of the equivalent merged segment.
    pub fn draw_segment(&mut self, from: Point, to: Point) {
        let radius = self.stroke_radius;
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0) as u32;
        let max_x = (from.x.max(to.x) + radius).ceil().min((self.width() - 1) as f32) as u32;
        let max_y = (from.y.max(to.y) + radius).ceil().min((self.height() - 1) as f32) as u32;
        if min_x > max_x || min_y > max_y {
            return;
        }

        let radius_sq = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq_to_segment(center, from, to) <= radius_sq {
                    self.image.put_pixel(x, y, Luma([STROKE_LUMA]));
                }
            }
        }
    }

    /// Serialize the full current bitmap to a lossless encoded string.
    pub fn export(&self) -> Result<EncodedImage, ExportError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::L8,
        )?;
        Ok(EncodedImage(format!(
            "data:image/png;base64,{}",
            BASE64.encode(&png)
        )))
    }
}

/// Squared distance from `point` to the closest point of segment `a`-`b`.
/// Degenerates to point distance when the segment has zero length.
fn distance_sq_to_segment(point: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let px = point.x - (a.x + t * dx);
    let py = point.y - (a.y + t * dy);
    px * px + py * py
}
