// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hook for sizing the circle.
//!
//! The circle sizes itself from the label's rendered width. Real glyph metrics live
//! downstream in the host's text stack, so sizing depends on a tiny measurement trait
//! instead. The default is a fixed average-glyph-width estimate.

/// Average glyph advance as a fraction of the font size.
pub const AVERAGE_GLYPH_WIDTH_EM: f64 = 0.6;

/// A minimal text measurement interface used when resolving the widget size.
///
/// Implementations can be heuristic (fast, but inaccurate) or backed by a shaping
/// engine. `text` is always treated as a single line.
pub trait TextMeasurer {
    /// Returns the advance width of `text` at `font_size`, in the same units as the font size.
    fn advance_width(&self, text: &str, font_size: f64) -> f64;
}

/// Estimates width as `font_size * char_count * 0.6`.
///
/// Characters are Unicode scalar values, so combining sequences and wide glyphs are
/// only approximated.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn advance_width(&self, text: &str, font_size: f64) -> f64 {
        font_size * text.chars().count() as f64 * AVERAGE_GLYPH_WIDTH_EM
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn advance_width(&self, text: &str, font_size: f64) -> f64 {
        (**self).advance_width(text, font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_counts_chars_not_bytes() {
        let m = HeuristicTextMeasurer;
        let ascii = m.advance_width("ab", 10.0);
        let accented = m.advance_width("\u{e9}\u{e8}", 10.0);
        assert!((ascii - 12.0).abs() < 1e-9, "got {ascii}");
        assert!((accented - ascii).abs() < 1e-9, "got {accented}");
    }

    #[test]
    fn heuristic_empty_text_has_no_width() {
        assert_eq!(HeuristicTextMeasurer.advance_width("", 20.0), 0.0);
    }
}
