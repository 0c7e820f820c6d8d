use image::GrayImage;
use rayon::prelude::*;

/// Separable Gaussian blur over a grayscale mask.
///
/// Runs the horizontal and vertical 1-D convolutions as independent passes.
/// Rows (respectively columns) have no data dependency on each other, so
/// each pass is parallelized across rayon workers. Samples beyond the edge
/// clamp to the nearest pixel.
pub fn gaussian_blur(mask: &GrayImage, radius: u32) -> GrayImage {
    if radius == 0 {
        return mask.clone();
    }

    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let kernel = gaussian_kernel(radius);

    let src: Vec<f32> = mask.as_raw().iter().map(|&v| v as f32).collect();

    // Horizontal pass
    let mut horizontal = vec![0.0f32; width * height];
    horizontal
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let src_row = &src[y * width..(y + 1) * width];
            for (x, out) in row.iter_mut().enumerate() {
                *out = convolve_line(src_row, x, &kernel);
            }
        });

    // Vertical pass reads the whole horizontal result, writes a fresh buffer
    let mut blurred = vec![0.0f32; width * height];
    blurred
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let r = radius as isize;
            for (x, out) in row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (k, weight) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - r).clamp(0, height as isize - 1);
                    acc += horizontal[sy as usize * width + x] * weight;
                }
                *out = acc;
            }
        });

    let pixels: Vec<u8> = blurred
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    GrayImage::from_raw(mask.width(), mask.height(), pixels)
        .unwrap_or_else(|| mask.clone())
}

fn convolve_line(line: &[f32], center: usize, kernel: &[f32]) -> f32 {
    let r = (kernel.len() / 2) as isize;
    let len = line.len() as isize;
    let mut acc = 0.0f32;
    for (k, weight) in kernel.iter().enumerate() {
        let sx = (center as isize + k as isize - r).clamp(0, len - 1);
        acc += line[sx as usize] * weight;
    }
    acc
}

/// Normalized 1-D Gaussian kernel of half-width `radius`, sigma = radius / 3
/// so the tails fall within the kernel extent.
fn gaussian_kernel(radius: u32) -> Vec<f32> {
    let sigma = (radius as f32 / 3.0).max(0.5);
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-(radius as i32)..=radius as i32)
        .map(|i| (-(i * i) as f32 / denom).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}
