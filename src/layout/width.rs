//! Display width of text in terminal cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of a single grapheme cluster.
///
/// Emoji sequences (ZWJ, VS16, skin tones) and flag pairs are two cells wide,
/// combining marks take the width of their base character.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if first == '\u{00A0}' {
        return 1;
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) && grapheme.chars().count() > 1 {
        return 2;
    }

    if chars.any(|c| matches!(c as u32, 0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF)) {
        return 2;
    }

    grapheme.width().min(2)
}

/// Width of a string, summed per grapheme cluster.
pub fn string_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_cell_per_char() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn wide_characters_take_two_cells() {
        assert_eq!(string_width("你好"), 4);
    }

    #[test]
    fn combining_mark_attaches_to_base() {
        assert_eq!(string_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn non_breaking_space_has_width() {
        assert_eq!(grapheme_width("\u{00A0}"), 1);
    }

    #[test]
    fn emoji_sequences_are_two_cells() {
        assert_eq!(grapheme_width("👍🏽"), 2);
        assert_eq!(grapheme_width("🇺🇸"), 2);
    }
}
