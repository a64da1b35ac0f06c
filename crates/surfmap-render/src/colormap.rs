//! HSL colour ramp for deviation display.
//!
//! Zero deviation is blue (hue 240°) and the maximum is red (hue 0°), at
//! full saturation and half lightness.

/// Hue of a zero deviation, in degrees.
pub const HUE_ZERO: f64 = 240.0;

/// Converts HSL to RGB. `h` is in degrees (wrapped into `[0, 360)`),
/// `s` and `l` are clamped to `[0, 1]`. Returns components in `[0, 1]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }

    let h = h.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    [r + m, g + m, b + m]
}

/// Colour of each deviation relative to `max`.
///
/// Distances at or above `max` are red. A non-positive `max` maps every
/// finite distance to blue; non-finite distances are always red.
pub fn deviation_colors(distances: &[f64], max: f64) -> Vec<[f64; 3]> {
    distances
        .iter()
        .map(|&d| {
            let ratio = if !d.is_finite() {
                1.0
            } else if max <= 0.0 || !max.is_finite() {
                0.0
            } else {
                (d / max).clamp(0.0, 1.0)
            };
            hsl_to_rgb(HUE_ZERO * (1.0 - ratio), 1.0, 0.5)
        })
        .collect()
}
