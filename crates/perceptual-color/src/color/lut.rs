//! Gamma lookup tables generated at compile time by build.rs.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Interpolated lookup into a 4096-entry table covering 0.0..=1.0.
///
/// Inputs outside the unit range are clamped, which is how out-of-gamut
/// channels produced by CIELAB adjustments land back on the sRGB cube.
#[inline]
fn lookup(table: &[f32; 4096], value: f32) -> f32 {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

    let scaled = value * 4095.0;
    let index = scaled as usize;
    if index >= 4095 {
        return table[4095];
    }

    let frac = scaled - index as f32;
    let a = table[index];
    let b = table[index + 1];
    a + (b - a) * frac
}

/// Convert an sRGB channel (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    lookup(&SRGB_TO_LINEAR, srgb)
}

/// Convert a linear light channel (0.0..=1.0) to sRGB.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    lookup(&LINEAR_TO_SRGB, linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert!(srgb_to_linear(0.0).abs() < 1e-6);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(linear_to_srgb(0.0).abs() < 1e-6);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(linear_to_srgb(-0.25), linear_to_srgb(0.0));
        assert_eq!(linear_to_srgb(1.75), linear_to_srgb(1.0));
        assert_eq!(linear_to_srgb(f32::NAN), linear_to_srgb(0.0));
    }

    #[test]
    fn test_tables_are_inverse_and_ordered() {
        let samples: Vec<f32> = (0..=64).map(|i| i as f32 / 64.0).collect();
        for pair in samples.windows(2) {
            assert!(srgb_to_linear(pair[1]) >= srgb_to_linear(pair[0]));
            assert!(linear_to_srgb(pair[1]) >= linear_to_srgb(pair[0]));
        }
        for &v in &samples {
            assert!((linear_to_srgb(srgb_to_linear(v)) - v).abs() < 2e-3, "at {v}");
        }
        // Mid-gray byte 128 is about 21.6% linear light.
        assert!((srgb_to_linear(128.0 / 255.0) - 0.2159).abs() < 1e-3);
    }
}
