/// Convert an sRGB channel (0-255, possibly fractional after compositing)
/// to linear light.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: f64) -> f64 {
    let v = channel / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(channels: [f64; 3]) -> f64 {
    let [r, g, b] = channels;
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: [f64; 3], b: [f64; 3]) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
