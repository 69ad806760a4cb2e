// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surface for `circle_label_demo`.

use circle_label::Surface;
use kurbo::{Circle, Point, Rect, Vec2};
use peniko::Color;

/// Collects primitives as SVG elements, shifted by a per-tile offset.
#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    body: String,
    offset: Vec2,
    extent: Option<Rect>,
}

impl SvgSurface {
    /// Sets the translation applied to subsequent primitives.
    pub(crate) fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Grows the document view box to include `rect` (in tile coordinates).
    pub(crate) fn include(&mut self, rect: Rect) {
        let rect = rect + self.offset;
        self.extent = Some(self.extent.map_or(rect, |r| r.union(rect)));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .extent
            .map(|r| r.inflate(10.0, 10.0))
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        let center = circle.center + self.offset;
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            center.x, center.y, circle.radius
        ));
        write_paint_attr(&mut self.body, "fill", color);
        self.body.push_str("/>\n");
    }

    fn draw_centered_text(&mut self, text: &str, pos: Point, font_size: f64, color: Color) {
        let pos = pos + self.offset;
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle""#,
            pos.x, pos.y, font_size
        ));
        write_paint_attr(&mut self.body, "fill", color);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        let opacity = f64::from(rgba.a) / 255.0;
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
