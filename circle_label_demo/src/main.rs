// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measure/draw demo for `circle_label`.
//!
//! Usage: `circle_label_demo [WIDTH_SPEC HEIGHT_SPEC [TITLE]]`, where each spec is
//! `exact:<n>`, `at-most:<n>` or `unspecified`. Writes `circle_label_demo.svg`.

mod svg;

use std::error::Error;

use circle_label::{
    CircleLabel, CircleLabelConfig, MeasureSpec, PendingRequests, RecordingSurface, Surface,
};
use kurbo::{Point, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;

use crate::svg::SvgSurface;

const TILE_GAP: f64 = 24.0;
const CAPTION_SIZE: f64 = 11.0;

#[derive(Debug)]
struct Case {
    title: Option<String>,
    fill: Color,
    text_size: f64,
    width: MeasureSpec,
    height: MeasureSpec,
}

impl Case {
    fn new(title: Option<&str>, fill: Color, width: MeasureSpec, height: MeasureSpec) -> Self {
        Self {
            title: title.map(str::to_owned),
            fill,
            text_size: 20.0,
            width,
            height,
        }
    }
}

fn gallery() -> Vec<Case> {
    vec![
        Case::new(
            Some("AB"),
            css::TOMATO,
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
        ),
        Case::new(
            Some("AB"),
            css::STEEL_BLUE,
            MeasureSpec::Exact(50),
            MeasureSpec::Exact(50),
        ),
        Case::new(
            Some("HELLOHELLO"),
            css::DARK_CYAN,
            MeasureSpec::AtMost(10),
            MeasureSpec::AtMost(10),
        ),
        Case::new(
            Some("HELLOHELLO"),
            css::MEDIUM_SEA_GREEN,
            MeasureSpec::Exact(10),
            MeasureSpec::Exact(10),
        ),
        Case::new(
            None,
            css::SLATE_BLUE,
            MeasureSpec::Exact(40),
            MeasureSpec::Exact(40),
        ),
        // Mixed constraint kinds: the bounds end up non-square.
        Case::new(
            Some("AB"),
            css::HOT_PINK,
            MeasureSpec::Exact(100),
            MeasureSpec::Exact(60),
        ),
    ]
}

fn custom_case(args: &[String]) -> Result<Option<Case>, Box<dyn Error>> {
    let [width, height, rest @ ..] = args else {
        return Ok(None);
    };
    let width = width.parse::<MeasureSpec>()?;
    let height = height.parse::<MeasureSpec>()?;
    let title = rest.first().map(String::as_str);
    Ok(Some(Case::new(title, css::CORNFLOWER_BLUE, width, height)))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cases = gallery();
    if let Some(case) = custom_case(&args)? {
        cases.push(case);
    }

    let mut svg = SvgSurface::default();
    let mut host = PendingRequests::default();
    let mut widget = CircleLabel::default();
    let mut x = 0.0;

    for case in &cases {
        let config = CircleLabelConfig::default()
            .with_fill(case.fill)
            .with_text_size(case.text_size);
        widget.set_style(config.style(), &mut host);
        widget.set_title(case.title.as_deref(), &mut host);
        if host.needs_layout() {
            tracing::debug!(
                layout = host.layout_requests,
                redraw = host.redraw_requests,
                "widget requested a new pass"
            );
        }
        host.clear();

        let size = widget.measure(case.width, case.height);
        let mut recording = RecordingSurface::new();
        widget.draw(&mut recording, size);

        let tile = size.to_kurbo().to_rect();
        let caption = format!(
            "{} x {} -> {}x{}",
            case.width, case.height, size.width, size.height
        );
        let caption_pos = Point::new(0.5 * tile.width(), tile.height() + TILE_GAP);
        recording.draw_centered_text(&caption, caption_pos, CAPTION_SIZE, css::DARK_GRAY);

        // Captions can be wider than the tile; shift so nothing overlaps the previous case.
        let bounds = recording.bounds().map_or(tile, |b| b.union(tile));
        svg.set_offset(Vec2::new(x - bounds.x0, 0.0));
        recording.replay(&mut svg);
        svg.include(bounds);

        tracing::info!(
            title = ?case.title,
            width = %case.width,
            height = %case.height,
            resolved_width = size.width,
            resolved_height = size.height,
            "rendered case"
        );
        x += bounds.width() + TILE_GAP;
    }

    std::fs::write("circle_label_demo.svg", svg.to_svg_string())?;
    tracing::info!(cases = cases.len(), "wrote circle_label_demo.svg");
    Ok(())
}
