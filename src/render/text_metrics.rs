/// Line box height as a multiple of the font size.
pub const TEXT_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Deterministic, backend-independent width estimate for sans-serif text.
///
/// Headless surfaces use it in place of real shaping so layout passes stay
/// reproducible across machines.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    if text.is_empty() || !font_size_px.is_finite() || font_size_px <= 0.0 {
        return 0.0;
    }

    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.56,
            '.' | ',' | ':' | ';' | 'i' | 'l' | 'j' | '!' | '|' => 0.28,
            '-' | '+' | '%' | '(' | ')' => 0.36,
            ' ' => 0.28,
            'm' | 'w' | 'M' | 'W' => 0.84,
            'A'..='Z' => 0.67,
            _ => 0.52,
        }
    });
    units * font_size_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(estimate_text_width_px("", 10.0), 0.0);
        assert_eq!(estimate_text_width_px("abc", 0.0), 0.0);
    }

    #[test]
    fn width_scales_with_font_size() {
        let small = estimate_text_width_px("Series 1", 10.0);
        let large = estimate_text_width_px("Series 1", 20.0);
        assert!((large - 2.0 * small).abs() <= 1e-9);
    }
}
