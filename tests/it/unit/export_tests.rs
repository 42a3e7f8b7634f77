//! Export invariants: clearing is history-free and the payload is a real PNG.

use crate::helpers::draw_polyline;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use digitpad::constants::SURFACE_SIZE;
use digitpad::raster::RasterSurface;
use digitpad::types::Point;

#[test]
fn test_reset_export_is_independent_of_history() {
    let pristine = RasterSurface::new().export().unwrap();

    let mut short_history = RasterSurface::new();
    short_history.draw_segment(Point::new(10.0, 10.0), Point::new(200.0, 200.0));
    short_history.reset();

    let mut long_history = RasterSurface::new();
    for i in 0..8 {
        let offset = i as f32 * 30.0;
        draw_polyline(
            &mut long_history,
            &[(offset, 20.0), (offset + 20.0, 250.0), (offset + 40.0, 20.0)],
        );
    }
    long_history.reset();

    assert_eq!(short_history.export().unwrap(), pristine);
    assert_eq!(long_history.export().unwrap(), pristine);
}

#[test]
fn test_export_is_deterministic() {
    let mut surface = RasterSurface::new();
    surface.draw_segment(Point::new(60.0, 60.0), Point::new(220.0, 180.0));

    assert_eq!(surface.export().unwrap(), surface.export().unwrap());
}

#[test]
fn test_payload_decodes_to_png_of_surface_dimensions() {
    let mut surface = RasterSurface::new();
    surface.draw_segment(Point::new(100.0, 100.0), Point::new(180.0, 180.0));
    let encoded = surface.export().unwrap();

    let bytes = BASE64
        .decode(encoded.payload())
        .expect("payload is valid base64");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).expect("payload decodes as an image");
    assert_eq!(decoded.width(), SURFACE_SIZE);
    assert_eq!(decoded.height(), SURFACE_SIZE);

    // Stroke and background survive the round trip losslessly
    let gray = decoded.to_luma8();
    assert_eq!(gray.get_pixel(140, 140).0[0], 0x00);
    assert_eq!(gray.get_pixel(10, 10).0[0], 0xff);
}
