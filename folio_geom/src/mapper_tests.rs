// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;

use crate::{
    BarSpec, DataPoint, LineSpec, NamedSeriesRow, RadarSpec, SeriesDef, SeriesOrder, SkillLevel,
    StackedSpec, Surface, TimelineEvent, TimelineSpec,
};

const EPS: f64 = 1e-9;

fn assert_point_close(a: Point, b: Point) {
    assert!((a.x - b.x).abs() <= EPS, "x {a:?} != {b:?}");
    assert!((a.y - b.y).abs() <= EPS, "y {a:?} != {b:?}");
}

fn assert_rect_close(a: Rect, b: Rect) {
    assert!((a.x0 - b.x0).abs() <= EPS, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= EPS, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= EPS, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= EPS, "y1 {a:?} != {b:?}");
}

fn assert_inside(r: Rect, p: Point) {
    assert!(
        p.x >= r.x0 - EPS && p.x <= r.x1 + EPS && p.y >= r.y0 - EPS && p.y <= r.y1 + EPS,
        "{p:?} outside {r:?}"
    );
}

/// Small deterministic generator so property checks are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn explainer_order() -> SeriesOrder {
    SeriesOrder::new(
        1,
        [
            SeriesDef::new("Completion", css::LIME_GREEN),
            SeriesDef::new("Explainer", css::GOLD),
            SeriesDef::new("ColdStart", css::DEEP_SKY_BLUE),
        ],
    )
}

fn explainer_row(label: &str, completion: f64, explainer: f64, cold_start: f64) -> NamedSeriesRow {
    // Deliberately inserted out of stacking order.
    NamedSeriesRow::new(label)
        .with("ColdStart", cold_start)
        .with("Explainer", explainer)
        .with("Completion", completion)
}

#[test]
fn line_scenario_matches_reference_points() {
    let data = vec![
        DataPoint::new("T-4", 0.0, 0.0),
        DataPoint::new("T-3", 1.0, 0.06),
        DataPoint::new("Launch", 4.0, 0.32),
    ];
    let g = LineSpec::new(Surface::line_chart_default())
        .map(&data)
        .unwrap();
    assert_point_close(g.points[0].pos, Point::new(24.0, 116.0));
    assert_point_close(g.points[1].pos, Point::new(24.0 + 71.0, 116.0 - 0.06 / 0.32 * 92.0));
    assert_point_close(g.points[2].pos, Point::new(24.0 + 284.0, 24.0));
    assert_eq!(g.baseline(), 116.0);
}

#[test]
fn polar_scenario_matches_reference_point() {
    let skills: Vec<_> = [90.0, 80.0, 70.0, 60.0, 50.0, 40.0]
        .iter()
        .enumerate()
        .map(|(i, &l)| SkillLevel::new(format!("skill {i}"), l))
        .collect();
    let spec = RadarSpec::for_size(320.0);
    assert_eq!(spec.max_radius, 112.0);
    let g = spec.map(&skills).unwrap();
    assert_point_close(g.vertices[0].pos, Point::new(160.0, 160.0 - 100.8));
    assert_eq!(g.vertices.len(), 6);
}

#[test]
fn stacked_scenario_splits_height_by_max_total() {
    let rows = vec![explainer_row("Row 1", 40.0, 28.0, 12.0)];
    let surface = Surface::stacked_chart_default();
    let g = StackedSpec::new(surface)
        .map(&rows, &explainer_order())
        .unwrap();
    assert_eq!(g.max_total, 80.0);

    let h = surface.draw_height();
    let base = surface.baseline();
    let bar = &g.bars[0];
    let x0 = surface.left();
    let x1 = x0 + surface.draw_width() - 8.0;
    let c = base - 40.0 / 80.0 * h;
    let e = c - 28.0 / 80.0 * h;
    let k = e - 12.0 / 80.0 * h;
    assert_rect_close(bar.segments[0].rect, Rect::new(x0, c, x1, base));
    assert_rect_close(bar.segments[1].rect, Rect::new(x0, e, x1, c));
    assert_rect_close(bar.segments[2].rect, Rect::new(x0, k, x1, e));
    assert!((k - surface.top()).abs() <= EPS);
}

#[test]
fn stacked_rows_share_the_tallest_total() {
    let rows = vec![
        explainer_row("Row 1", 40.0, 28.0, 12.0),
        explainer_row("Row 2", 52.0, 33.0, 15.0),
        explainer_row("Row 3", 61.0, 40.0, 18.0),
    ];
    let surface = Surface::stacked_chart_default();
    let g = StackedSpec::new(surface)
        .map(&rows, &explainer_order())
        .unwrap();
    assert_eq!(g.max_total, 119.0);
    let tallest = &g.bars[2];
    let top = tallest.segments.last().unwrap().rect.y0;
    assert!((top - surface.top()).abs() <= EPS);
    let labels: Vec<_> = g.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Row 1", "Row 2", "Row 3"]);
    for bar in &g.bars {
        let names: Vec<_> = bar.segments.iter().map(|s| s.series).collect();
        assert_eq!(names, [0, 1, 2]);
    }
}

#[test]
fn line_and_bar_outputs_stay_inside_plot() {
    let mut rng = Lcg(7);
    let surface = Surface::new(320.0, 140.0, 24.0);
    let plot = surface.plot_rect();
    for n in 1..12 {
        let data: Vec<_> = (0..n)
            .map(|i| DataPoint::new(format!("p{i}"), rng.range(-50.0, 50.0), rng.range(-1e3, 1e3)))
            .collect();
        let line = LineSpec::new(surface).map(&data).unwrap();
        assert_eq!(line.points.len(), n);
        for p in &line.points {
            assert_inside(plot, p.pos);
        }
        let bars = BarSpec::new(surface).map(&data).unwrap();
        for b in &bars {
            assert_inside(plot, Point::new(b.rect.x0, b.rect.y0));
            assert_inside(plot, Point::new(b.rect.x1, b.rect.y1));
        }
    }
}

#[test]
fn stacked_and_timeline_outputs_stay_inside_plot() {
    let mut rng = Lcg(11);
    let surface = Surface::stacked_chart_default();
    let plot = surface.plot_rect();
    for n in 1..8 {
        let rows: Vec<_> = (0..n)
            .map(|i| {
                explainer_row(
                    &format!("r{i}"),
                    rng.range(0.0, 100.0),
                    rng.range(0.0, 100.0),
                    rng.range(0.0, 100.0),
                )
            })
            .collect();
        let g = StackedSpec::new(surface)
            .map(&rows, &explainer_order())
            .unwrap();
        for seg in g.bars.iter().flat_map(|b| b.segments.iter()) {
            assert_inside(plot, Point::new(seg.rect.x0, seg.rect.y0));
            assert_inside(plot, Point::new(seg.rect.x1, seg.rect.y1));
        }

        let events = TimelineEvent::sequence((0..n).map(|i| format!("e{i}")));
        let t = TimelineSpec::from_surface(&surface).map(&events).unwrap();
        for s in &t.stops {
            assert_inside(plot, s.pos);
        }
    }
}

#[test]
fn flat_series_maps_to_baseline_without_nan() {
    let data = vec![
        DataPoint::new("a", 1.0, 5.0),
        DataPoint::new("b", 1.0, 5.0),
    ];
    let surface = Surface::new(200.0, 100.0, 10.0);
    let g = LineSpec::new(surface).map(&data).unwrap();
    for p in &g.points {
        assert!(p.pos.is_finite());
        assert_eq!(p.pos, Point::new(10.0, 90.0));
    }
}

#[test]
fn every_mapper_accepts_empty_input() {
    let surface = Surface::stacked_chart_default();
    assert!(LineSpec::new(surface).map(&[]).unwrap().is_empty());
    assert!(BarSpec::new(surface).map(&[]).unwrap().is_empty());
    assert!(
        StackedSpec::new(surface)
            .map(&[], &explainer_order())
            .unwrap()
            .is_empty()
    );
    assert!(RadarSpec::for_size(320.0).map(&[]).unwrap().is_empty());
    assert!(
        TimelineSpec::from_surface(&surface)
            .map(&[])
            .unwrap()
            .is_empty()
    );
}
