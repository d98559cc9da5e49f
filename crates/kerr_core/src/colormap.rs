/// Samples of the "plasma" perceptually uniform gradient at t = 0, 1/8, ..., 1
const PLASMA: [[f32; 3]; 9] = [
    [0.050, 0.030, 0.528], // deep indigo
    [0.274, 0.012, 0.623],
    [0.495, 0.012, 0.658], // violet
    [0.665, 0.139, 0.586],
    [0.798, 0.280, 0.470], // magenta-red
    [0.902, 0.425, 0.360],
    [0.973, 0.586, 0.252], // orange
    [0.994, 0.765, 0.150],
    [0.940, 0.975, 0.131], // bright yellow
];

/// Evaluate the plasma gradient at t in [0, 1] (clamped). Returns [r, g, b, 1].
pub fn plasma(t: f64) -> [f32; 4] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) } as f32;
    let scaled = t * (PLASMA.len() - 1) as f32;
    let lo = (scaled.floor() as usize).min(PLASMA.len() - 2);
    let frac = scaled - lo as f32;

    let a = PLASMA[lo];
    let b = PLASMA[lo + 1];
    [
        a[0] + (b[0] - a[0]) * frac,
        a[1] + (b[1] - a[1]) * frac,
        a[2] + (b[2] - a[2]) * frac,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(c: [f32; 4]) -> f32 {
        0.2126 * c[0] + 0.7152 * c[1] + 0.0722 * c[2]
    }

    #[test]
    fn test_plasma_endpoints() {
        let close = |a: [f32; 4], b: [f32; 4]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6);
        assert!(close(plasma(0.0), [0.050, 0.030, 0.528, 1.0]));
        assert!(close(plasma(1.0), [0.940, 0.975, 0.131, 1.0]));
        assert_eq!(plasma(-3.0), plasma(0.0));
        assert_eq!(plasma(7.0), plasma(1.0));
    }

    #[test]
    fn test_plasma_brightens_with_t() {
        let mut prev = luminance(plasma(0.0));
        for i in 1..=20 {
            let l = luminance(plasma(i as f64 / 20.0));
            assert!(l > prev, "luminance must increase at step {i}");
            prev = l;
        }
    }
}
