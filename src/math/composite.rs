use super::color::NormalizedColor;

/// Alpha-composite `color` over `blend`, which is treated as an opaque
/// backdrop (its own alpha is ignored).
/// formula per channel: result = blend * (1 - alpha) + alpha * color
///
/// Channels stay fractional so brightness is computed before any rounding.
pub fn composite_over(color: &NormalizedColor, blend: &NormalizedColor) -> [f64; 3] {
    let a = color.alpha.clamp(0.0, 1.0);
    let mix = |c: u8, b: u8| -> f64 { b as f64 * (1.0 - a) + a * c as f64 };

    [
        mix(color.red, blend.red),
        mix(color.green, blend.green),
        mix(color.blue, blend.blue),
    ]
}

/// Round composited channels back into an opaque color.
pub fn to_opaque(channels: [f64; 3]) -> NormalizedColor {
    let [r, g, b] = channels.map(|c| c.round().clamp(0.0, 255.0) as u8);
    NormalizedColor::opaque(r, g, b)
}
