use crate::frame::Frame;

/// Scale color saturation by pushing each channel away from its Rec.601
/// gray reference: `new = gray + (old - gray) * factor`, clamped.
///
/// Factor 1.0 is the identity, factors above 1 increase color separation
/// from gray, 0.0 produces a grayscale image.
pub fn enhance_saturation(frame: &mut Frame, factor: f32) {
    if (factor - 1.0).abs() < f32::EPSILON {
        return;
    }

    let height = frame.height();
    let width = frame.width();

    for y in 0..height {
        for x in 0..width {
            let pixel = frame.get_pixel_mut(x, y);

            let r = pixel[0] as f32;
            let g = pixel[1] as f32;
            let b = pixel[2] as f32;
            let gray = 0.299 * r + 0.587 * g + 0.114 * b;

            pixel[0] = (gray + (r - gray) * factor).round().clamp(0.0, 255.0) as u8;
            pixel[1] = (gray + (g - gray) * factor).round().clamp(0.0, 255.0) as u8;
            pixel[2] = (gray + (b - gray) * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
}
