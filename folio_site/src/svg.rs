// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `folio_site`.

use std::fmt::Write as _;

use folio_geom::TextAnchor;
use kurbo::{BezPath, Line, Point, Rect};
use peniko::Color;

/// Stroke paint and width.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Stroke {
    pub(crate) color: Color,
    pub(crate) width: f64,
}

impl Stroke {
    pub(crate) fn solid(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Fill paint: a flat color or a reference to a gradient defined in the document.
#[derive(Clone, Debug)]
pub(crate) enum Fill {
    None,
    Solid(Color),
    Gradient(String),
}

impl From<Color> for Fill {
    fn from(value: Color) -> Self {
        Self::Solid(value)
    }
}

/// An SVG document under construction.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    width: f64,
    height: f64,
    label: String,
    defs: String,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(width: f64, height: f64, label: impl Into<String>) -> Self {
        Self {
            width,
            height,
            label: label.into(),
            defs: String::new(),
            body: String::new(),
        }
    }

    /// Defines a top-to-bottom gradient fading `color` from `opacity` to transparent.
    pub(crate) fn vertical_fade(&mut self, id: &str, color: Color, opacity: f64) {
        let (value, _) = svg_paint(color);
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{value}" stop-opacity="{opacity}"/><stop offset="100%" stop-color="{value}" stop-opacity="0"/></linearGradient>"#
        );
        self.defs.push('\n');
    }

    pub(crate) fn rect(&mut self, rect: Rect, fill: impl Into<Fill>, radius: f64) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        if radius > 0.0 {
            let _ = write!(self.body, r#" rx="{radius}""#);
        }
        write_fill_attr(&mut self.body, &fill.into());
        self.body.push_str("/>\n");
    }

    pub(crate) fn path(&mut self, path: &BezPath, fill: impl Into<Fill>, stroke: Option<Stroke>) {
        if path.elements().is_empty() {
            return;
        }
        let _ = write!(self.body, r#"<path d="{}""#, path.to_svg());
        write_fill_attr(&mut self.body, &fill.into());
        if let Some(stroke) = stroke {
            write_stroke_attr(&mut self.body, stroke);
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, line: Line, stroke: Stroke) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
        write_stroke_attr(&mut self.body, stroke);
        self.body.push_str("/>\n");
    }

    pub(crate) fn circle(
        &mut self,
        center: Point,
        r: f64,
        fill: impl Into<Fill>,
        stroke: Option<Stroke>,
    ) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{r}""#,
            center.x, center.y
        );
        write_fill_attr(&mut self.body, &fill.into());
        if let Some(stroke) = stroke {
            write_stroke_attr(&mut self.body, stroke);
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn text(
        &mut self,
        pos: Point,
        text: &str,
        anchor: TextAnchor,
        font_size: f64,
        fill: Color,
    ) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{font_size}" dominant-baseline="middle""#,
            pos.x, pos.y
        );
        self.body.push_str(match anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        write_fill_attr(&mut self.body, &Fill::Solid(fill));
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    pub(crate) fn finish(self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="{label}">"#,
            w = self.width,
            h = self.height,
            label = escape_xml(&self.label),
        );
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_fill_attr(out: &mut String, fill: &Fill) {
    match fill {
        Fill::None => out.push_str(r#" fill="none""#),
        Fill::Solid(color) => write_paint_attr(out, "fill", *color),
        Fill::Gradient(id) => {
            let _ = write!(out, r#" fill="url(#{id})""#);
        }
    }
}

fn write_stroke_attr(out: &mut String, stroke: Stroke) {
    write_paint_attr(out, "stroke", stroke.color);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.width);
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
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
