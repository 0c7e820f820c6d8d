use image::RgbImage;

use crate::frame::Frame;

/// Simulate low display resolution by downsampling and re-upsampling the
/// frame with nearest-neighbor sampling.
///
/// With factor 2 every 2x2 block of the output is constant-colored, equal to
/// one representative pixel of the original block. Odd trailing rows/columns
/// fall out of the same integer-truncating mapping as everything else, they
/// just end up in a degenerate 1-wide block.
pub fn pixelate(frame: &Frame, factor: u32) -> Frame {
    if factor <= 1 {
        return frame.clone();
    }

    let width = frame.width();
    let height = frame.height();

    // Never scale down to an empty buffer
    let down_w = (width / factor).max(1);
    let down_h = (height / factor).max(1);

    let down = resize_nearest(frame.as_image(), down_w, down_h);
    let up = resize_nearest(&down, width, height);

    // Dimensions are preserved, so this cannot fail for a valid input frame
    Frame::new(up).unwrap_or_else(|_| frame.clone())
}

/// Nearest-neighbor resize: each destination pixel takes the source pixel at
/// the truncated scaled coordinate, no interpolation.
fn resize_nearest(src: &RgbImage, dst_w: u32, dst_h: u32) -> RgbImage {
    let (src_w, src_h) = src.dimensions();

    RgbImage::from_fn(dst_w, dst_h, |x, y| {
        let sx = (x as u64 * src_w as u64 / dst_w as u64) as u32;
        let sy = (y as u64 * src_h as u64 / dst_h as u64) as u32;
        *src.get_pixel(sx, sy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_frame(width: u32, height: u32) -> Frame {
        let buffer = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 17 % 256) as u8, (y * 31 % 256) as u8, ((x + y) % 256) as u8])
        });
        Frame::new(buffer).unwrap()
    }

    #[test]
    fn blocks_are_constant_for_even_dimensions() {
        let frame = gradient_frame(8, 6);
        let out = pixelate(&frame, 2);

        for by in 0..3 {
            for bx in 0..4 {
                let anchor = out.get_pixel(bx * 2, by * 2);
                for dy in 0..2 {
                    for dx in 0..2 {
                        assert_eq!(out.get_pixel(bx * 2 + dx, by * 2 + dy), anchor);
                    }
                }
            }
        }
    }

    #[test]
    fn factor_one_is_identity() {
        let frame = gradient_frame(5, 7);
        assert_eq!(pixelate(&frame, 1), frame);
    }

    #[test]
    fn preserves_dimensions_for_odd_sizes() {
        let frame = gradient_frame(7, 5);
        let out = pixelate(&frame, 2);
        assert_eq!((out.width(), out.height()), (7, 5));
    }

    #[test]
    fn survives_frames_smaller_than_factor() {
        let frame = gradient_frame(1, 1);
        let out = pixelate(&frame, 2);
        assert_eq!(out.get_pixel(0, 0), frame.get_pixel(0, 0));
    }
}
