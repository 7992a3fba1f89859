use super::color::ForegroundDecision;

/// Backgrounds with a perceived brightness below this get white text;
/// everything else gets black. Fixed for every caller.
pub const BRIGHTNESS_THRESHOLD: u32 = 150;

/// Perceived brightness (0-255) per the W3 AERT color contrast formula.
/// brightness = round((R * 299 + G * 587 + B * 114) / 1000)
pub fn perceived_brightness(channels: [f64; 3]) -> u32 {
    let [r, g, b] = channels;
    let weighted = (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0;
    weighted.round().clamp(0.0, 255.0) as u32
}

pub fn decide(brightness: u32) -> ForegroundDecision {
    if brightness < BRIGHTNESS_THRESHOLD {
        ForegroundDecision::White
    } else {
        ForegroundDecision::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(perceived_brightness([0.0, 0.0, 0.0]), 0);
        assert_eq!(perceived_brightness([255.0, 255.0, 255.0]), 255);
    }

    #[test]
    fn weights_favour_green() {
        assert_eq!(perceived_brightness([255.0, 0.0, 0.0]), 76);
        assert_eq!(perceived_brightness([0.0, 255.0, 0.0]), 150);
        assert_eq!(perceived_brightness([0.0, 0.0, 255.0]), 29);
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(perceived_brightness([127.5, 127.5, 127.5]), 128);
    }

    #[test]
    fn threshold_boundary() {
        assert_eq!(decide(149), ForegroundDecision::White);
        assert_eq!(decide(150), ForegroundDecision::Black);
        assert_eq!(decide(0), ForegroundDecision::White);
        assert_eq!(decide(255), ForegroundDecision::Black);
    }
}
