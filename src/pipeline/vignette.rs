use image::GrayImage;
use rayon::prelude::*;

use crate::error::{FilterError, Result};
use crate::frame::Frame;

use super::blur::gaussian_blur;

/// Build the raw radial vignette mask.
///
/// Brightness is 255 at the exact center and falls off with distance:
/// `255 * (1 - (d / max_d)^curvature)`, floored at 0. `max_d` is the sum of
/// squared half-extents while `d` is a linear Euclidean distance, so the
/// ratio stays far below 1 on large images and the falloff is gentle.
pub fn build_vignette_mask(width: u32, height: u32, curvature: f32) -> GrayImage {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    let max_distance = half_w * half_w + half_h * half_h;

    let w = width as usize;
    let mut pixels = vec![0u8; w * height as usize];
    pixels.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let dy = y as f32 - half_h;
        for (x, out) in row.iter_mut().enumerate() {
            let dx = x as f32 - half_w;
            let distance = (dx * dx + dy * dy).sqrt();
            let brightness = 255.0 * (1.0 - (distance / max_distance).powf(curvature));
            *out = brightness.max(0.0) as u8;
        }
    });

    GrayImage::from_raw(width, height, pixels)
        .unwrap_or_else(|| GrayImage::new(width, height))
}

/// Build the feathered vignette mask: raw radial falloff smoothed with a
/// separable Gaussian blur.
pub fn build_feathered_vignette(width: u32, height: u32, curvature: f32, blur_radius: u32) -> GrayImage {
    let raw = build_vignette_mask(width, height, curvature);
    gaussian_blur(&raw, blur_radius)
}

/// Blend the frame against solid black using the mask as per-pixel
/// foreground weight: `out = fg * (m / 255)`. A mask value of 255 leaves
/// the pixel exactly unchanged.
pub fn apply_vignette(frame: &mut Frame, mask: &GrayImage) -> Result<()> {
    if mask.dimensions() != (frame.width(), frame.height()) {
        return Err(FilterError::DimensionMismatch {
            width: frame.width(),
            height: frame.height(),
            mask_width: mask.width(),
            mask_height: mask.height(),
        }
        .into());
    }

    for (x, y, weight) in mask.enumerate_pixels() {
        let m = weight[0];
        if m == 255 {
            continue;
        }

        let w = m as f32 / 255.0;
        let pixel = frame.get_pixel_mut(x, y);
        for channel in 0..3 {
            pixel[channel] = (pixel[channel] as f32 * w).round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(())
}
