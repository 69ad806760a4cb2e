// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style inputs and construction-time configuration.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

/// Label color. Not configurable.
pub const TEXT_COLOR: Color = css::WHITE;

/// Default label font size, in pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 20.0;

/// Resolved paint inputs for one circle label.
///
/// Replaced wholesale when restyled; see [`crate::CircleLabel::set_style`].
/// The label color is always [`TEXT_COLOR`].
#[derive(Clone, Debug, PartialEq)]
pub struct CircleLabelStyle {
    /// Circle fill color.
    pub fill: Color,
    pub(crate) text_color: Color,
    /// Label font size in pixels.
    pub text_size: f64,
}

impl CircleLabelStyle {
    /// Creates a style with the given fill and label font size.
    #[must_use]
    pub fn new(fill: Color, text_size: f64) -> Self {
        Self {
            fill,
            text_color: TEXT_COLOR,
            text_size,
        }
    }

    /// Returns the label color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }
}

impl Default for CircleLabelStyle {
    fn default() -> Self {
        Self::new(css::WHITE, DEFAULT_TEXT_SIZE)
    }
}

/// Everything needed to construct a [`crate::CircleLabel`].
///
/// Defaults: white fill, 20px text, no title. Hosts that read these values from a
/// declarative resource format convert into this struct first.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleLabelConfig {
    /// Circle fill color.
    pub fill: Color,
    /// Label font size in pixels.
    pub text_size: f64,
    /// Initial label.
    pub title: Option<String>,
}

impl Default for CircleLabelConfig {
    fn default() -> Self {
        let style = CircleLabelStyle::default();
        Self {
            fill: style.fill,
            text_size: style.text_size,
            title: None,
        }
    }
}

impl CircleLabelConfig {
    /// Sets the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the label font size.
    #[must_use]
    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size;
        self
    }

    /// Sets the initial label.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the style part of this configuration.
    #[must_use]
    pub fn style(&self) -> CircleLabelStyle {
        CircleLabelStyle::new(self.fill, self.text_size)
    }
}
