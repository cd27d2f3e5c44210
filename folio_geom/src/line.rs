// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale mapping for line and area charts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::error::{GeometryError, finite};
use crate::scale::{Extent, ScaleLinear};
use crate::surface::Surface;

/// A single sample in data units.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Domain x value.
    pub x: f64,
    /// Domain y value.
    pub y: f64,
    /// Axis annotation for this sample.
    pub label: String,
}

impl DataPoint {
    /// Creates a data point.
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// A data point after mapping into pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct MappedPoint {
    /// Pixel position.
    pub pos: Point,
    /// Label carried over from the input.
    pub label: String,
    /// The original y value, for tooltips.
    pub value: f64,
}

/// Maps a series of [`DataPoint`]s onto a [`Surface`].
///
/// Both axes are scaled to the data extent. The y axis is inverted so larger values sit higher
/// on screen.
#[derive(Clone, Copy, Debug)]
pub struct LineSpec {
    /// Target surface.
    pub surface: Surface,
}

impl LineSpec {
    /// Creates a line spec for `surface`.
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }

    /// Builds the x/y scales for `data`.
    ///
    /// Returns `None` for empty input.
    pub fn scales(
        &self,
        data: &[DataPoint],
    ) -> Result<Option<(ScaleLinear, ScaleLinear)>, GeometryError> {
        self.surface.validate()?;
        for (i, d) in data.iter().enumerate() {
            finite("x", i, d.x)?;
            finite("y", i, d.y)?;
        }
        let (Some(ex), Some(ey)) = (
            Extent::of(data.iter().map(|d| d.x)),
            Extent::of(data.iter().map(|d| d.y)),
        ) else {
            return Ok(None);
        };
        let (ex, ey) = (ex.checked("x")?, ey.checked("y")?);
        if ex.is_collapsed() || ey.is_collapsed() {
            tracing::debug!(
                x_collapsed = ex.is_collapsed(),
                y_collapsed = ey.is_collapsed(),
                "degenerate line domain, using unit range"
            );
        }
        let s = &self.surface;
        let x = ScaleLinear::from_extent(ex, (s.left(), s.left() + s.draw_width()));
        let y = ScaleLinear::from_extent(ey, (s.baseline(), s.baseline() - s.draw_height()));
        Ok(Some((x, y)))
    }

    /// Maps `data` into pixel space, preserving input order.
    pub fn map(&self, data: &[DataPoint]) -> Result<LineGeometry, GeometryError> {
        let baseline = self.surface.baseline();
        let Some((x_scale, y_scale)) = self.scales(data)? else {
            return Ok(LineGeometry {
                points: Vec::new(),
                baseline,
            });
        };
        let points = data
            .iter()
            .map(|d| MappedPoint {
                pos: Point::new(x_scale.map(d.x), y_scale.map(d.y)),
                label: d.label.clone(),
                value: d.y,
            })
            .collect::<Vec<_>>();
        tracing::trace!(points = points.len(), "mapped line series");
        Ok(LineGeometry { points, baseline })
    }
}

/// Pixel-space output of [`LineSpec::map`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    /// Mapped points in input order.
    pub points: Vec<MappedPoint>,
    baseline: f64,
}

impl LineGeometry {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pixel y of the bottom of the plot area.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// A polyline through the points in input order.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, pt) in self.points.iter().enumerate() {
            if i == 0 {
                p.move_to(pt.pos);
            } else {
                p.line_to(pt.pos);
            }
        }
        p
    }

    /// A closed fill region: down to the baseline under the first point, along the line, and
    /// back down under the last point.
    pub fn area(&self) -> BezPath {
        let mut p = BezPath::new();
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return p;
        };
        p.move_to((first.pos.x, self.baseline));
        for pt in &self.points {
            p.line_to(pt.pos);
        }
        p.line_to((last.pos.x, self.baseline));
        p.close_path();
        p
    }

    /// Index of the point horizontally closest to a pointer at pixel `x`.
    ///
    /// Ties go to the earlier point.
    pub fn nearest(&self, x: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, pt) in self.points.iter().enumerate() {
            let d = (pt.pos.x - x).abs();
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::PathEl;

    use super::*;

    fn uplift() -> Vec<DataPoint> {
        vec![
            DataPoint::new("T-4", 0.0, 0.0),
            DataPoint::new("T-3", 1.0, 0.06),
            DataPoint::new("T-2", 2.0, 0.12),
            DataPoint::new("T-1", 3.0, 0.20),
            DataPoint::new("Launch", 4.0, 0.32),
        ]
    }

    #[test]
    fn empty_input_maps_to_empty_geometry() {
        let g = LineSpec::new(Surface::line_chart_default())
            .map(&[])
            .unwrap();
        assert!(g.is_empty());
        assert!(g.path().elements().is_empty());
        assert!(g.area().elements().is_empty());
        assert_eq!(g.nearest(10.0), None);
    }

    #[test]
    fn labels_and_values_pass_through_in_order() {
        let g = LineSpec::new(Surface::line_chart_default())
            .map(&uplift())
            .unwrap();
        let labels: Vec<_> = g.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["T-4", "T-3", "T-2", "T-1", "Launch"]);
        assert_eq!(g.points[4].value, 0.32);
    }

    #[test]
    fn unsorted_input_is_not_reordered() {
        let data = vec![
            DataPoint::new("c", 2.0, 1.0),
            DataPoint::new("a", 0.0, 3.0),
            DataPoint::new("b", 1.0, 2.0),
        ];
        let g = LineSpec::new(Surface::new(100.0, 100.0, 10.0))
            .map(&data)
            .unwrap();
        assert_eq!(g.points[0].pos, Point::new(90.0, 90.0));
        assert_eq!(g.points[1].pos, Point::new(10.0, 10.0));
        assert_eq!(g.points[2].pos, Point::new(50.0, 50.0));
    }

    #[test]
    fn area_closes_along_the_baseline() {
        let g = LineSpec::new(Surface::line_chart_default())
            .map(&uplift())
            .unwrap();
        let els = g.area().elements().to_vec();
        assert_eq!(els.first(), Some(&PathEl::MoveTo(Point::new(24.0, 116.0))));
        assert_eq!(els[els.len() - 2], PathEl::LineTo(Point::new(308.0, 116.0)));
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
        // move + 5 points + drop to baseline + close
        assert_eq!(els.len(), 8);
    }

    #[test]
    fn nearest_picks_closest_pixel_column() {
        let g = LineSpec::new(Surface::line_chart_default())
            .map(&uplift())
            .unwrap();
        assert_eq!(g.nearest(0.0), Some(0));
        assert_eq!(g.nearest(300.0), Some(4));
        assert_eq!(g.nearest(24.0 + 71.0 + 10.0), Some(1));
    }

    #[test]
    fn overflowing_domain_is_rejected() {
        let data = vec![
            DataPoint::new("lo", 0.0, -f64::MAX),
            DataPoint::new("hi", 1.0, f64::MAX),
        ];
        let err = LineSpec::new(Surface::line_chart_default())
            .map(&data)
            .unwrap_err();
        assert_eq!(err, GeometryError::DomainOverflow { field: "y" });

        let data = vec![
            DataPoint::new("lo", -f64::MAX, 0.0),
            DataPoint::new("hi", f64::MAX, 1.0),
        ];
        let err = LineSpec::new(Surface::line_chart_default())
            .map(&data)
            .unwrap_err();
        assert_eq!(err, GeometryError::DomainOverflow { field: "x" });
    }

    #[test]
    fn nan_is_rejected() {
        let data = vec![DataPoint::new("x", 0.0, f64::NAN)];
        let err = LineSpec::new(Surface::line_chart_default())
            .map(&data)
            .unwrap_err();
        assert!(
            matches!(
                err,
                GeometryError::NonFinite {
                    field: "y",
                    index: 0,
                    ..
                }
            ),
            "unexpected error: {err:?}"
        );
    }
}
