// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size resolution for the measure pass.
//!
//! The circle has a single preferred size derived from the label's estimated width.
//! That value is pushed through the width and the height constraint independently, so
//! the two axes agree whenever the host hands down the same kind of constraint for both.
//! Mixed constraint kinds can resolve to non-square bounds; that outcome is kept as-is.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::measure_spec::MeasureSpec;

/// The width/height assigned to the widget for one layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResolvedSize {
    /// Resolved width in pixels.
    pub width: u32,
    /// Resolved height in pixels.
    pub height: u32,
}

impl ResolvedSize {
    /// Creates a size from explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns the side length when width and height agree.
    #[must_use]
    pub fn side_length(self) -> Option<u32> {
        (self.width == self.height).then_some(self.width)
    }

    /// Returns this size as a `kurbo::Size`.
    #[must_use]
    pub fn to_kurbo(self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Returns the preferred side length for `label` at `text_size`.
///
/// Absent and empty labels prefer `0`; otherwise the estimated advance width is rounded
/// to the nearest pixel.
pub fn preferred_size(label: Option<&str>, text_size: f64, measurer: &dyn TextMeasurer) -> i32 {
    match label {
        None | Some("") => 0,
        Some(text) => {
            let width = measurer
                .advance_width(text, text_size)
                .round()
                .clamp(0.0, i32::MAX as f64);
            #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
            {
                width as i32
            }
        }
    }
}

/// Resolves the widget size using [`HeuristicTextMeasurer`].
pub fn resolve(
    width: MeasureSpec,
    height: MeasureSpec,
    label: Option<&str>,
    text_size: f64,
) -> ResolvedSize {
    resolve_with(&HeuristicTextMeasurer, width, height, label, text_size)
}

/// Resolves the widget size with a caller-provided text measurer.
pub fn resolve_with(
    measurer: &dyn TextMeasurer,
    width: MeasureSpec,
    height: MeasureSpec,
    label: Option<&str>,
    text_size: f64,
) -> ResolvedSize {
    let preferred = preferred_size(label, text_size, measurer);
    let size = ResolvedSize::new(clamp_axis(width, preferred), clamp_axis(height, preferred));
    tracing::trace!(
        %width,
        %height,
        preferred,
        resolved_width = size.width,
        resolved_height = size.height,
        "resolved circle label size"
    );
    if size.side_length().is_none() {
        tracing::debug!(
            resolved_width = size.width,
            resolved_height = size.height,
            "circle label resolved to non-square bounds"
        );
    }
    size
}

fn clamp_axis(spec: MeasureSpec, preferred: i32) -> u32 {
    // Only negative host constraints can push the result below zero.
    u32::try_from(spec.resolve(preferred)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_label_prefers_zero() {
        for label in [None, Some("")] {
            assert_eq!(preferred_size(label, 20.0, &HeuristicTextMeasurer), 0);
            let size = resolve(MeasureSpec::Exact(42), MeasureSpec::Exact(42), label, 20.0);
            assert_eq!(size, ResolvedSize::square(42));
            let size = resolve(MeasureSpec::AtMost(42), MeasureSpec::AtMost(42), label, 20.0);
            assert_eq!(size, ResolvedSize::square(0));
            let size = resolve(MeasureSpec::Unspecified, MeasureSpec::Unspecified, label, 20.0);
            assert_eq!(size, ResolvedSize::square(0));
        }
    }

    #[test]
    fn preferred_size_rounds_estimated_width() {
        // 20 * 2 * 0.6 = 24
        assert_eq!(preferred_size(Some("AB"), 20.0, &HeuristicTextMeasurer), 24);
        // 13 * 3 * 0.6 = 23.4
        assert_eq!(preferred_size(Some("abc"), 13.0, &HeuristicTextMeasurer), 23);
        // 15 * 5 * 0.6 = 45
        assert_eq!(preferred_size(Some("hello"), 15.0, &HeuristicTextMeasurer), 45);
        // 11 * 1 * 0.6 = 6.6
        assert_eq!(preferred_size(Some("x"), 11.0, &HeuristicTextMeasurer), 7);
    }

    #[test]
    fn exact_grows_to_fit_content() {
        let size = resolve(MeasureSpec::Exact(50), MeasureSpec::Exact(50), Some("AB"), 20.0);
        assert_eq!(size.side_length(), Some(50));

        let size = resolve(
            MeasureSpec::Exact(10),
            MeasureSpec::Exact(10),
            Some("HELLOHELLO"),
            20.0,
        );
        assert_eq!(size.side_length(), Some(120));
    }

    #[test]
    fn at_most_caps_content() {
        let size = resolve(
            MeasureSpec::AtMost(10),
            MeasureSpec::AtMost(10),
            Some("HELLOHELLO"),
            20.0,
        );
        assert_eq!(size.side_length(), Some(10));
    }

    #[test]
    fn unspecified_uses_preferred() {
        let size = resolve(
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
            Some("AB"),
            20.0,
        );
        assert_eq!(size.side_length(), Some(24));
    }

    #[test]
    fn mixed_constraints_resolve_each_axis_independently() {
        let size = resolve(MeasureSpec::Exact(100), MeasureSpec::AtMost(10), Some("AB"), 20.0);
        assert_eq!(size, ResolvedSize::new(100, 10));
        assert_eq!(size.side_length(), None);
    }

    #[test]
    fn negative_constraints_clamp_to_zero() {
        let size = resolve(MeasureSpec::AtMost(-5), MeasureSpec::Exact(-5), None, 20.0);
        assert_eq!(size, ResolvedSize::square(0));
    }

    #[test]
    fn custom_measurer_feeds_preferred_size() {
        struct Fixed;
        impl TextMeasurer for Fixed {
            fn advance_width(&self, _text: &str, _font_size: f64) -> f64 {
                31.5
            }
        }

        let size = resolve_with(
            &Fixed,
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
            Some("ignored"),
            20.0,
        );
        assert_eq!(size.side_length(), Some(32));
        // Empty labels never consult the measurer.
        let size = resolve_with(
            &Fixed,
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
            Some(""),
            20.0,
        );
        assert_eq!(size.side_length(), Some(0));
    }
}
