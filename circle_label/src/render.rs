// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing the circle and its label.
//!
//! Rendering never re-measures: it takes the [`ResolvedSize`] from the preceding
//! measure pass and emits at most two primitives onto a [`Surface`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect, Shape};
use peniko::Color;

use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::size::ResolvedSize;
use crate::style::CircleLabelStyle;

/// The drawing primitives a host surface must provide.
pub trait Surface {
    /// Fills `circle` with `color`.
    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Draws a single line of `text` horizontally centered on `pos.x`.
    ///
    /// `pos.y` is the baseline, following the host's text convention.
    fn draw_centered_text(&mut self, text: &str, pos: Point, font_size: f64, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        (**self).fill_circle(circle, color);
    }

    fn draw_centered_text(&mut self, text: &str, pos: Point, font_size: f64, color: Color) {
        (**self).draw_centered_text(text, pos, font_size, color);
    }
}

/// Draws the filled circle followed by the label.
///
/// The radius is half the height and the center is `(width / 2, width / 2)`, both with
/// integer division. When the resolved bounds are not square the circle is therefore
/// not centered vertically. The label, if present, is anchored at the true center
/// `(width / 2, height / 2)`; an empty label still issues the text call.
pub fn render(
    surface: &mut dyn Surface,
    size: ResolvedSize,
    style: &CircleLabelStyle,
    label: Option<&str>,
) {
    let radius = size.height / 2;
    let center = f64::from(size.width / 2);
    surface.fill_circle(Circle::new((center, center), f64::from(radius)), style.fill);
    if let Some(text) = label {
        let pos = Point::new(f64::from(size.width / 2), f64::from(size.height / 2));
        surface.draw_centered_text(text, pos, style.text_size, style.text_color);
    }
}

/// One recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A filled circle.
    FillCircle {
        /// Circle geometry.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
    /// A single line of horizontally centered text.
    CenteredText {
        /// Text content (unshaped).
        text: String,
        /// Anchor point; `x` is the horizontal center, `y` the baseline.
        pos: Point,
        /// Font size in pixels.
        font_size: f64,
        /// Text color.
        color: Color,
    },
}

impl DrawCommand {
    /// Returns approximate bounds for this command.
    ///
    /// Text bounds use [`HeuristicTextMeasurer`] and assume one em above the baseline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::FillCircle { circle, .. } => circle.bounding_box(),
            Self::CenteredText {
                text,
                pos,
                font_size,
                ..
            } => {
                let half = 0.5 * HeuristicTextMeasurer.advance_width(text, *font_size);
                Rect::new(pos.x - half, pos.y - font_size, pos.x + half, pos.y)
            }
        }
    }
}

/// A [`Surface`] that records primitives as a display list.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in draw order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Returns the union of all command bounds, or `None` if nothing was recorded.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|a, b| a.union(b))
    }

    /// Replays the recorded commands onto another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        for command in &self.commands {
            match command {
                DrawCommand::FillCircle { circle, color } => target.fill_circle(*circle, *color),
                DrawCommand::CenteredText {
                    text,
                    pos,
                    font_size,
                    color,
                } => target.draw_centered_text(text, *pos, *font_size, *color),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::FillCircle { circle, color });
    }

    fn draw_centered_text(&mut self, text: &str, pos: Point, font_size: f64, color: Color) {
        self.commands.push(DrawCommand::CenteredText {
            text: text.into(),
            pos,
            font_size,
            color,
        });
    }
}
