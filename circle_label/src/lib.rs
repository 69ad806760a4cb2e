// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A filled circle with a centered text label.
//!
//! The widget follows the usual measure-then-draw pipeline of a host UI toolkit:
//! - **Measure**: [`size::resolve`] turns the host's per-axis [`MeasureSpec`]s and the
//!   current label into a [`ResolvedSize`].
//! - **Draw**: [`render::render`] fills the circle and draws the label onto a [`Surface`].
//!
//! The host toolkit stays outside this crate. It supplies the constraints, a drawing
//! surface, and a [`ViewHost`] that receives layout/redraw requests when the label
//! changes. [`CircleLabel`] bundles the mutable label with its style and drives both steps.
//!
//! ```
//! use circle_label::{CircleLabel, CircleLabelConfig, MeasureSpec, PendingRequests, RecordingSurface};
//!
//! let mut label = CircleLabel::new(CircleLabelConfig::default().with_title("AB"));
//! let size = label.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
//! assert_eq!(size.side_length(), Some(24));
//!
//! let mut surface = RecordingSurface::new();
//! label.draw(&mut surface, size);
//! assert_eq!(surface.commands().len(), 2);
//!
//! let mut host = PendingRequests::default();
//! label.set_title(Some("ABC"), &mut host);
//! assert!(host.needs_layout() && host.needs_redraw());
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
mod float;
mod measure;
mod measure_spec;
pub mod render;
pub mod size;
mod style;
mod widget;

pub use measure::{AVERAGE_GLYPH_WIDTH_EM, HeuristicTextMeasurer, TextMeasurer};
pub use measure_spec::{MeasureSpec, ParseMeasureSpecError};
pub use render::{DrawCommand, RecordingSurface, Surface};
pub use size::ResolvedSize;
pub use style::{CircleLabelConfig, CircleLabelStyle, DEFAULT_TEXT_SIZE, TEXT_COLOR};
pub use widget::{CircleLabel, PendingRequests, ViewHost};
