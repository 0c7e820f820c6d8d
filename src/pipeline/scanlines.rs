use image::{Rgba, RgbaImage};

use crate::frame::Frame;

/// Build the periodic scanline mask: semi-transparent black bands of height
/// `line_width`, repeating every `2 * line_width` rows starting at row 0,
/// fully transparent everywhere else.
///
/// `line_width` must be at least 1; the pipeline validates this before
/// calling in.
pub fn build_scanline_mask(width: u32, height: u32, line_width: u32, opacity: u8) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, y| {
        if y % (2 * line_width) < line_width {
            Rgba([0, 0, 0, opacity])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Alpha-composite the scanline mask over the frame in place.
///
/// The frame is treated as fully opaque, so the standard over-operator
/// reduces to `out = mask * a + base * (1 - a)` with `a = alpha / 255`.
/// With opacity 0 the frame is left bit-for-bit unchanged.
pub fn composite_scanlines(frame: &mut Frame, mask: &RgbaImage) {
    for (x, y, overlay) in mask.enumerate_pixels() {
        let alpha = overlay[3];
        if alpha == 0 {
            continue;
        }

        let a = alpha as f32 / 255.0;
        let pixel = frame.get_pixel_mut(x, y);
        for channel in 0..3 {
            let blended = overlay[channel] as f32 * a + pixel[channel] as f32 * (1.0 - a);
            pixel[channel] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}
