// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circle label widget and its host capabilities.

extern crate alloc;

use alloc::string::String;

use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::measure_spec::MeasureSpec;
use crate::render::{self, Surface};
use crate::size::{self, ResolvedSize};
use crate::style::{CircleLabelConfig, CircleLabelStyle};

/// Requests the widget can make of its host toolkit.
///
/// The host decides when the next measure and draw passes actually run.
pub trait ViewHost {
    /// Asks for a new measure pass.
    fn request_layout(&mut self);

    /// Asks for a redraw.
    fn invalidate(&mut self);
}

/// A [`ViewHost`] that counts requests until the host drains them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingRequests {
    /// Layout requests since the last [`Self::clear`].
    pub layout_requests: u32,
    /// Redraw requests since the last [`Self::clear`].
    pub redraw_requests: u32,
}

impl PendingRequests {
    /// Returns `true` if a measure pass was requested.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.layout_requests > 0
    }

    /// Returns `true` if a redraw was requested.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requests > 0
    }

    /// Forgets all pending requests.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ViewHost for PendingRequests {
    fn request_layout(&mut self) {
        self.layout_requests = self.layout_requests.saturating_add(1);
    }

    fn invalidate(&mut self) {
        self.redraw_requests = self.redraw_requests.saturating_add(1);
    }
}

/// A filled circle with a centered, optional text label.
///
/// The label is the only state that changes after construction without a full restyle.
/// Each measure pass recomputes the size from scratch; nothing about the previous
/// result is cached.
#[derive(Clone, Debug)]
pub struct CircleLabel {
    style: CircleLabelStyle,
    title: Option<String>,
    layout_stale: bool,
}

impl CircleLabel {
    /// Creates a widget from a fully specified configuration.
    #[must_use]
    pub fn new(config: CircleLabelConfig) -> Self {
        Self {
            style: config.style(),
            title: config.title,
            layout_stale: true,
        }
    }

    /// Returns the current label.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the current style.
    #[must_use]
    pub fn style(&self) -> &CircleLabelStyle {
        &self.style
    }

    /// Returns `true` if the label or style changed since the last measure pass.
    #[must_use]
    pub fn is_layout_stale(&self) -> bool {
        self.layout_stale
    }

    /// Replaces the label.
    ///
    /// Setting the current value again does nothing. Any other value marks the geometry
    /// stale and issues exactly one layout request and one redraw request.
    pub fn set_title<S: Into<String>>(&mut self, title: Option<S>, host: &mut dyn ViewHost) {
        let title = title.map(Into::into);
        if title == self.title {
            return;
        }
        tracing::debug!(old = ?self.title, new = ?title, "circle label title changed");
        self.title = title;
        self.mark_stale(host);
    }

    /// Replaces the style wholesale.
    ///
    /// Setting the current style again does nothing. Any other style issues one redraw
    /// request; only a new text size, which feeds the preferred size, also marks the
    /// geometry stale and issues a layout request.
    pub fn set_style(&mut self, style: CircleLabelStyle, host: &mut dyn ViewHost) {
        if style == self.style {
            return;
        }
        tracing::debug!(?style, "circle label restyled");
        let resize = style.text_size != self.style.text_size;
        self.style = style;
        if resize {
            self.mark_stale(host);
        } else {
            host.invalidate();
        }
    }

    /// Runs a measure pass with [`HeuristicTextMeasurer`].
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> ResolvedSize {
        self.measure_with(&HeuristicTextMeasurer, width, height)
    }

    /// Runs a measure pass with a caller-provided text measurer.
    pub fn measure_with(
        &mut self,
        measurer: &dyn TextMeasurer,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> ResolvedSize {
        self.layout_stale = false;
        size::resolve_with(
            measurer,
            width,
            height,
            self.title.as_deref(),
            self.style.text_size,
        )
    }

    /// Draws the widget at the size produced by the last measure pass.
    pub fn draw(&self, surface: &mut dyn Surface, size: ResolvedSize) {
        render::render(surface, size, &self.style, self.title.as_deref());
    }

    fn mark_stale(&mut self, host: &mut dyn ViewHost) {
        self.layout_stale = true;
        host.request_layout();
        host.invalidate();
    }
}

impl Default for CircleLabel {
    fn default() -> Self {
        Self::new(CircleLabelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn setting_same_title_is_a_no_op() {
        let mut host = PendingRequests::default();

        let mut label = CircleLabel::default();
        label.set_title(None::<String>, &mut host);
        assert_eq!(host, PendingRequests::default());

        let mut label = CircleLabel::new(CircleLabelConfig::default().with_title("AB"));
        label.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        label.set_title(Some("AB"), &mut host);
        assert_eq!(host, PendingRequests::default());
        assert!(!label.is_layout_stale());
    }

    #[test]
    fn changing_title_requests_one_layout_and_one_redraw() {
        let mut host = PendingRequests::default();
        let mut label = CircleLabel::default();
        label.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

        label.set_title(Some("AB"), &mut host);
        assert_eq!(host.layout_requests, 1);
        assert_eq!(host.redraw_requests, 1);
        assert!(label.is_layout_stale());
        assert_eq!(label.title(), Some("AB"));

        host.clear();
        label.set_title(None::<&str>, &mut host);
        assert_eq!(host.layout_requests, 1);
        assert_eq!(host.redraw_requests, 1);
        assert_eq!(label.title(), None);
    }

    #[test]
    fn empty_and_absent_titles_are_distinct() {
        let mut host = PendingRequests::default();
        let mut label = CircleLabel::default();
        label.set_title(Some(""), &mut host);
        assert!(host.needs_layout() && host.needs_redraw());
        assert_eq!(label.title(), Some(""));
    }

    #[test]
    fn measure_clears_stale_flag_and_tracks_title() {
        let mut host = PendingRequests::default();
        let mut label = CircleLabel::default();
        assert!(label.is_layout_stale(), "new widgets need a first measure pass");

        let size = label.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, ResolvedSize::square(0));
        assert!(!label.is_layout_stale());

        label.set_title(Some("HELLOHELLO"), &mut host);
        let size = label.measure(MeasureSpec::AtMost(10), MeasureSpec::AtMost(10));
        assert_eq!(size, ResolvedSize::square(10));
        let size = label.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, ResolvedSize::square(120));
    }

    #[test]
    fn restyle_follows_no_op_rule() {
        let mut host = PendingRequests::default();
        let mut label = CircleLabel::default();
        label.set_style(CircleLabelStyle::default(), &mut host);
        assert!(!host.needs_layout());

        let style = CircleLabelConfig::default().with_text_size(10.0).style();
        label.set_style(style, &mut host);
        assert_eq!(host.layout_requests, 1);
        assert_eq!(host.redraw_requests, 1);
        assert_eq!(label.style().text_size, 10.0);
    }

    #[test]
    fn fill_only_restyle_redraws_without_relayout() {
        let mut host = PendingRequests::default();
        let mut label = CircleLabel::default();
        label.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

        label.set_style(CircleLabelStyle::new(css::TOMATO, 20.0), &mut host);
        assert_eq!(host.layout_requests, 0);
        assert_eq!(host.redraw_requests, 1);
        assert!(!label.is_layout_stale());
        assert_eq!(label.style().fill, css::TOMATO);
    }

    #[test]
    fn draw_uses_current_style_and_title() {
        let mut label = CircleLabel::new(
            CircleLabelConfig::default()
                .with_fill(css::STEEL_BLUE)
                .with_title("AB"),
        );
        let size = label.measure(MeasureSpec::Exact(50), MeasureSpec::Exact(50));
        let mut surface = RecordingSurface::new();
        label.draw(&mut surface, size);

        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            DrawCommand::FillCircle { circle, color } => {
                assert_eq!(circle.radius, 25.0);
                assert_eq!(*color, css::STEEL_BLUE);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn untitled_widget_draws_only_the_circle() {
        let label = CircleLabel::default();
        let mut surface = RecordingSurface::new();
        label.draw(&mut surface, ResolvedSize::square(30));
        assert_eq!(surface.commands().len(), 1);
    }
}
