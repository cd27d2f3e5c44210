// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders mapped geometry into SVG.
//!
//! Every function here takes finished geometry plus a caller-owned [`Selection`]; none of them
//! map data themselves.

use folio_geom::{
    Bar, LineGeometry, RadarGeometry, Selection, SeriesOrder, StackedGeometry, Surface,
    TextAnchor, TimelineGeometry,
};
use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::data::{GRID, INK, MUTED};
use crate::svg::{Fill, Stroke, SvgDoc};

const LABEL_SIZE: f64 = 10.0;
const DIM_ALPHA: f32 = 0.35;

/// A line chart with a faded area fill, point markers and x labels.
pub(crate) fn line_chart(
    surface: &Surface,
    line: &LineGeometry,
    color: Color,
    accent: Color,
    highlight: Selection,
) -> String {
    let mut doc = SvgDoc::new(surface.width, surface.height, "Metric trend over time");
    doc.vertical_fade("line-fade", accent, 0.6);
    doc.path(&line.area(), Fill::Gradient("line-fade".into()), None);
    doc.path(&line.path(), Fill::None, Some(Stroke::solid(color, 2.0)));
    for (i, p) in line.points.iter().enumerate() {
        let r = if highlight.is_selected(i) { 5.0 } else { 3.2 };
        doc.circle(p.pos, r, INK, Some(Stroke::solid(color, 1.5)));
        doc.text(
            Point::new(p.pos.x, surface.height - 8.0),
            &p.label,
            TextAnchor::Middle,
            LABEL_SIZE,
            MUTED,
        );
        if highlight.is_selected(i) {
            doc.text(
                Point::new(p.pos.x, p.pos.y - 12.0),
                &format!("+{:.0}%", p.value * 100.0),
                TextAnchor::Middle,
                LABEL_SIZE,
                css::WHITE,
            );
        }
    }
    doc.finish()
}

/// Stacked bars with the focused series at full strength and the rest dimmed.
pub(crate) fn stacked_chart(
    surface: &Surface,
    stacked: &StackedGeometry,
    order: &SeriesOrder,
    focus: Selection,
) -> String {
    let mut doc = SvgDoc::new(
        surface.width,
        surface.height,
        "Breakdown of explanation impact on engagement",
    );
    let series = order.series();
    for bar in &stacked.bars {
        for seg in &bar.segments {
            let Some(def) = series.get(seg.series) else {
                continue;
            };
            let color = match focus {
                Selection::Index(_) if !focus.is_selected(seg.series) => {
                    def.color.with_alpha(DIM_ALPHA)
                }
                _ => def.color,
            };
            doc.rect(seg.rect, color, 3.0);
        }
        doc.text(
            Point::new(bar.slot.center().x, surface.height - 6.0),
            &bar.label,
            TextAnchor::Middle,
            LABEL_SIZE,
            MUTED,
        );
    }
    legend(&mut doc, surface, order);
    doc.finish()
}

fn legend(doc: &mut SvgDoc, surface: &Surface, order: &SeriesOrder) {
    let mut x = surface.left();
    let y = surface.top() * 0.5;
    for (name, color) in order.legend() {
        doc.rect(Rect::new(x, y - 4.0, x + 8.0, y + 4.0), color, 2.0);
        doc.text(Point::new(x + 12.0, y), name, TextAnchor::Start, LABEL_SIZE, MUTED);
        x += 20.0 + 6.0 * name.chars().count() as f64;
    }
}

/// A radar web with the skill polygon and outside labels.
pub(crate) fn radar_chart(
    size: f64,
    radar: &RadarGeometry,
    color: Color,
    highlight: Selection,
) -> String {
    let mut doc = SvgDoc::new(size, size, "Skill levels");
    let grid = Stroke::solid(GRID, 1.0);
    for ring in radar.rings(4) {
        doc.path(&ring, Fill::None, Some(grid));
    }
    for spoke in radar.spokes() {
        doc.line(spoke, grid);
    }
    doc.path(
        &radar.polygon(),
        color.with_alpha(0.25),
        Some(Stroke::solid(color, 2.0)),
    );
    for (i, v) in radar.vertices.iter().enumerate() {
        let r = if highlight.is_selected(i) { 4.5 } else { 3.0 };
        doc.circle(v.pos, r, color, None);
        let fill = if highlight.is_selected(i) { css::WHITE } else { MUTED };
        doc.text(v.label_pos, &v.name, v.anchor, LABEL_SIZE, fill);
    }
    doc.finish()
}

/// A horizontal timeline with alternating labels above and below the rule.
pub(crate) fn timeline_chart(
    surface: &Surface,
    timeline: &TimelineGeometry,
    details: &[&str],
    color: Color,
) -> String {
    let mut doc = SvgDoc::new(surface.width, surface.height, "Recent work streams");
    if let Some(axis) = timeline.axis() {
        doc.line(axis, Stroke::solid(GRID, 2.0));
    }
    for (i, stop) in timeline.stops.iter().enumerate() {
        doc.circle(stop.pos, 6.0, INK, Some(Stroke::solid(color, 2.0)));
        let dy = if i % 2 == 0 { -18.0 } else { 18.0 };
        let title_pos = Point::new(stop.pos.x, stop.pos.y + dy);
        let anchor = edge_anchor(i, timeline.stops.len());
        doc.text(title_pos, &stop.label, anchor, 12.0, css::WHITE);
        if let Some(detail) = details.get(i) {
            let detail_pos = Point::new(stop.pos.x, title_pos.y + dy.signum() * 14.0);
            doc.text(detail_pos, detail, anchor, 9.0, MUTED);
        }
    }
    doc.finish()
}

/// Keeps the first and last labels from running off the surface.
fn edge_anchor(index: usize, len: usize) -> TextAnchor {
    if len > 1 && index == 0 {
        TextAnchor::Start
    } else if len > 1 && index + 1 == len {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

/// Simple vertical bars with value labels.
pub(crate) fn bar_chart(surface: &Surface, bars: &[Bar], color: Color, unit: &str) -> String {
    let mut doc = SvgDoc::new(surface.width, surface.height, "Records analyzed per project");
    for bar in bars {
        doc.rect(bar.rect, color, 3.0);
        let cx = bar.rect.center().x;
        doc.text(
            Point::new(cx, bar.rect.y0 - 8.0),
            &format!("{}{unit}", bar.value),
            TextAnchor::Middle,
            LABEL_SIZE,
            css::WHITE,
        );
        doc.text(
            Point::new(cx, surface.height - 6.0),
            &bar.label,
            TextAnchor::Middle,
            LABEL_SIZE,
            MUTED,
        );
    }
    doc.finish()
}
