use rand::Rng;

use crate::frame::Frame;

/// Stochastically perturb a sparse subset of pixels.
///
/// Each pixel is independently selected with probability `probability`;
/// selected pixels get three independent integer deltas in
/// `[-amplitude, amplitude]` added to their channels, clamped to [0, 255].
///
/// The random source is passed in by the caller so tests can replay exact
/// noise patterns with a seeded generator.
pub fn inject_noise<R: Rng>(frame: &mut Frame, probability: f64, amplitude: i32, rng: &mut R) {
    if probability <= 0.0 || amplitude == 0 {
        return;
    }

    let height = frame.height();
    let width = frame.width();

    for y in 0..height {
        for x in 0..width {
            if rng.gen::<f64>() >= probability {
                continue;
            }

            let pixel = frame.get_pixel_mut(x, y);
            for channel in 0..3 {
                let delta = rng.gen_range(-amplitude..=amplitude);
                pixel[channel] = (pixel[channel] as i32 + delta).clamp(0, 255) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn zero_probability_is_identity() {
        let mut frame = Frame::new_filled(16, 16, [100, 150, 200]).unwrap();
        let before = frame.clone();

        let mut rng = SmallRng::seed_from_u64(7);
        inject_noise(&mut frame, 0.0, 20, &mut rng);

        assert_eq!(frame, before);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Frame::new_filled(32, 32, [128, 128, 128]).unwrap();
        let mut b = a.clone();

        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        inject_noise(&mut a, 0.1, 20, &mut rng_a);
        inject_noise(&mut b, 0.1, 20, &mut rng_b);

        assert_eq!(a, b);
    }

    #[test]
    fn deltas_stay_within_amplitude() {
        let mut frame = Frame::new_filled(64, 64, [128, 128, 128]).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        inject_noise(&mut frame, 1.0, 20, &mut rng);

        for y in 0..64 {
            for x in 0..64 {
                for &c in frame.get_pixel(x, y).iter() {
                    let delta = c as i32 - 128;
                    assert!((-20..=20).contains(&delta));
                }
            }
        }
    }

    #[test]
    fn changed_fraction_tracks_probability() {
        // Mid-gray keeps clamping from masking any nonzero delta
        let mut frame = Frame::new_filled(1000, 1000, [128, 128, 128]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1234);
        inject_noise(&mut frame, 0.02, 20, &mut rng);

        let mut changed = 0u64;
        for y in 0..1000 {
            for x in 0..1000 {
                if frame.get_pixel(x, y) != [128, 128, 128] {
                    changed += 1;
                }
            }
        }

        let fraction = changed as f64 / 1_000_000.0;
        assert!(
            (fraction - 0.02).abs() < 0.005,
            "changed fraction {} too far from 0.02",
            fraction
        );
    }
}
