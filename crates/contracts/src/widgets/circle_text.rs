/// A character placed on the badge circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedChar {
    pub ch: char,
    pub degrees: f64,
}

/// Splits trimmed `text` into characters, the i-th rotated by `i * spacing_deg`.
pub fn rotated_chars(text: &str, spacing_deg: f64) -> Vec<RotatedChar> {
    text.trim()
        .chars()
        .enumerate()
        .map(|(i, ch)| RotatedChar {
            ch,
            degrees: i as f64 * spacing_deg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_grows_per_character() {
        let chars = rotated_chars("  abc ", 10.0);
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[0], RotatedChar { ch: 'a', degrees: 0.0 });
        assert_eq!(chars[2], RotatedChar { ch: 'c', degrees: 20.0 });
    }

    #[test]
    fn test_spaces_inside_text_take_a_slot() {
        let chars = rotated_chars("a b", 10.3);
        assert_eq!(chars[1].ch, ' ');
        assert!((chars[2].degrees - 20.6).abs() < 1e-9);
    }
}
