use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{FilterError, Result};

/// A single RGB image being run through the filter pipeline
///
/// This is a simple wrapper around an RGB image buffer that provides
/// convenient methods for pixel manipulation used by the filter stages.
/// Dimensions are fixed at construction; every mask built later in the
/// pipeline is checked against them.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    buffer: RgbImage,
}

impl Frame {
    /// Create a new frame from an RGB image buffer
    ///
    /// Rejects zero-sized buffers; the pipeline has no meaningful output
    /// for an empty image.
    pub fn new(buffer: RgbImage) -> Result<Self> {
        if buffer.width() == 0 || buffer.height() == 0 {
            return Err(FilterError::InvalidDimensions {
                width: buffer.width(),
                height: buffer.height(),
            }
            .into());
        }
        Ok(Self { buffer })
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Result<Self> {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        Self::new(buffer)
    }

    /// Get the width of the frame
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the frame
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    ///
    /// Panics on out-of-bounds coordinates, same as the underlying buffer.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Get a mutable reference to a pixel at the given coordinates
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let pixel = self.buffer.get_pixel_mut(x, y);
        &mut pixel.0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }

    /// Convert the frame to raw RGB bytes
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer.as_raw().clone()
    }

    /// Create a frame from raw RGB bytes
    pub fn from_rgb_bytes(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        ImageBuffer::from_raw(width, height, data).and_then(|buffer| Self::new(buffer).ok())
    }

    /// Save the frame to a file, format chosen from the extension
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.buffer.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let empty: RgbImage = ImageBuffer::new(0, 10);
        assert!(Frame::new(empty).is_err());
        assert!(Frame::new_filled(0, 0, [0, 0, 0]).is_err());
    }

    #[test]
    fn pixel_roundtrip() {
        let mut frame = Frame::new_filled(4, 4, [10, 20, 30]).unwrap();
        assert_eq!(frame.get_pixel(3, 3), [10, 20, 30]);

        frame.set_pixel(1, 2, [200, 100, 50]);
        assert_eq!(frame.get_pixel(1, 2), [200, 100, 50]);

        let pixel = frame.get_pixel_mut(0, 0);
        pixel[0] = 255;
        assert_eq!(frame.get_pixel(0, 0), [255, 20, 30]);
    }

    #[test]
    fn raw_bytes_roundtrip() {
        let frame = Frame::new_filled(2, 2, [1, 2, 3]).unwrap();
        let bytes = frame.to_rgb_bytes();
        assert_eq!(bytes.len(), 2 * 2 * 3);

        let rebuilt = Frame::from_rgb_bytes(2, 2, bytes).unwrap();
        assert_eq!(rebuilt, frame);
    }

    #[test]
    fn from_rgb_bytes_rejects_short_data() {
        assert!(Frame::from_rgb_bytes(4, 4, vec![0; 5]).is_none());
    }
}
