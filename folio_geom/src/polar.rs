// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar (radar) mapping.
//!
//! Entry `i` of `n` sits at angle `i * 2π/n - π/2`: the first entry points straight up and the
//! rest follow clockwise in screen coordinates.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Line, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{GeometryError, finite};

/// A named level in `[0, 100]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillLevel {
    /// Axis name.
    pub name: String,
    /// Level in `[0, 100]`.
    pub level: f64,
}

impl SkillLevel {
    /// Creates a skill level.
    pub fn new(name: impl Into<String>, level: f64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Horizontal text anchoring for a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point (label right of center).
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point (label left of center).
    End,
}

/// One mapped radar axis.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarVertex {
    /// Axis name.
    pub name: String,
    /// The original level.
    pub level: f64,
    /// Angle in radians.
    pub angle: f64,
    /// Data point at `max_radius * level / 100`.
    pub pos: Point,
    /// Label anchor outside the rim, independent of `level`.
    pub label_pos: Point,
    /// Which side of the label text sits on its anchor.
    pub anchor: TextAnchor,
}

/// Maps [`SkillLevel`]s around a center point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarSpec {
    /// Center of the radar.
    pub center: Point,
    /// Radius that a level of `100` reaches.
    pub max_radius: f64,
    /// Distance from the rim to the label anchors.
    pub label_offset: f64,
}

const SIZE_MARGIN: f64 = 48.0;
const ANCHOR_EPSILON: f64 = 1e-6;

impl RadarSpec {
    /// Creates a radar spec with an 18px label offset.
    pub fn new(center: Point, max_radius: f64) -> Self {
        Self {
            center,
            max_radius,
            label_offset: 18.0,
        }
    }

    /// A radar centered in a `size`×`size` square, leaving a 48px margin for labels.
    pub fn for_size(size: f64) -> Self {
        let half = size * 0.5;
        Self::new(Point::new(half, half), (half - SIZE_MARGIN).max(0.0))
    }

    /// Sets the distance from the rim to the label anchors.
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let all = [self.center.x, self.center.y, self.max_radius, self.label_offset];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::InvalidSurface {
                reason: "radar center and radii must be finite",
            });
        }
        if self.max_radius < 0.0 {
            return Err(GeometryError::InvalidSurface {
                reason: "radar radius must be non-negative",
            });
        }
        Ok(())
    }

    /// Angle of slot `index` out of `count`.
    pub fn angle(index: usize, count: usize) -> f64 {
        index as f64 * (TAU / count.max(1) as f64) - FRAC_PI_2
    }

    fn at(&self, angle: f64, radius: f64) -> Point {
        self.center + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    /// Maps `skills` into radar vertices, preserving input order.
    pub fn map(&self, skills: &[SkillLevel]) -> Result<RadarGeometry, GeometryError> {
        self.validate()?;
        for (i, s) in skills.iter().enumerate() {
            let level = finite("level", i, s.level)?;
            if !(0.0..=100.0).contains(&level) {
                return Err(GeometryError::LevelOutOfRange { index: i, level });
            }
        }

        let n = skills.len();
        let label_radius = self.max_radius + self.label_offset;
        let vertices = skills
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let angle = Self::angle(i, n);
                let label_pos = self.at(angle, label_radius);
                let dx = label_pos.x - self.center.x;
                let anchor = if dx > ANCHOR_EPSILON {
                    TextAnchor::Start
                } else if dx < -ANCHOR_EPSILON {
                    TextAnchor::End
                } else {
                    TextAnchor::Middle
                };
                RadarVertex {
                    name: s.name.clone(),
                    level: s.level,
                    angle,
                    pos: self.at(angle, self.max_radius * (s.level / 100.0)),
                    label_pos,
                    anchor,
                }
            })
            .collect::<Vec<_>>();
        tracing::trace!(axes = n, radius = self.max_radius, "mapped radar");
        Ok(RadarGeometry {
            spec: *self,
            vertices,
        })
    }
}

/// Pixel-space output of [`RadarSpec::map`].
#[derive(Clone, Debug, PartialEq)]
pub struct RadarGeometry {
    spec: RadarSpec,
    /// Vertices in input order.
    pub vertices: Vec<RadarVertex>,
}

impl RadarGeometry {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The [`RadarSpec`] these vertices were placed with.
    pub fn spec(&self) -> &RadarSpec {
        &self.spec
    }

    /// The data polygon, closed back to the first vertex.
    pub fn polygon(&self) -> BezPath {
        closed_path(self.vertices.iter().map(|v| v.pos))
    }

    /// Concentric grid polygons at `1/steps, 2/steps, …, 1` of the radius.
    pub fn rings(&self, steps: usize) -> Vec<BezPath> {
        let n = self.vertices.len();
        (1..=steps)
            .map(|k| {
                let r = self.spec.max_radius * (k as f64 / steps as f64);
                closed_path((0..n).map(|i| self.spec.at(RadarSpec::angle(i, n), r)))
            })
            .collect()
    }

    /// Lines from the center to the rim along each axis.
    pub fn spokes(&self) -> Vec<Line> {
        self.vertices
            .iter()
            .map(|v| Line::new(self.spec.center, self.spec.at(v.angle, self.spec.max_radius)))
            .collect()
    }

    /// Index of the vertex closest to `pos`.
    pub fn nearest(&self, pos: Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.vertices.iter().enumerate() {
            let d = v.pos.distance(pos);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

fn closed_path(points: impl Iterator<Item = Point>) -> BezPath {
    let mut p = BezPath::new();
    for (i, pt) in points.enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    if !p.elements().is_empty() {
        p.close_path();
    }
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::PathEl;

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn square() -> Vec<SkillLevel> {
        vec![
            SkillLevel::new("n", 100.0),
            SkillLevel::new("e", 50.0),
            SkillLevel::new("s", 0.0),
            SkillLevel::new("w", 100.0),
        ]
    }

    #[test]
    fn first_axis_points_up_and_rest_go_clockwise() {
        let g = RadarSpec::new(Point::new(0.0, 0.0), 10.0)
            .map(&square())
            .unwrap();
        assert!(close(g.vertices[0].pos, Point::new(0.0, -10.0)));
        assert!(close(g.vertices[1].pos, Point::new(5.0, 0.0)));
        assert!(close(g.vertices[2].pos, Point::new(0.0, 0.0)));
        assert!(close(g.vertices[3].pos, Point::new(-10.0, 0.0)));
    }

    #[test]
    fn labels_sit_outside_rim_regardless_of_level() {
        let g = RadarSpec::new(Point::new(0.0, 0.0), 10.0)
            .with_label_offset(5.0)
            .map(&square())
            .unwrap();
        for v in &g.vertices {
            let r = v.label_pos.distance(Point::ORIGIN);
            assert!((r - 15.0).abs() < 1e-9, "label radius {r}");
        }
    }

    #[test]
    fn anchors_follow_horizontal_half_plane() {
        let g = RadarSpec::new(Point::new(0.0, 0.0), 10.0)
            .map(&square())
            .unwrap();
        let anchors: Vec<_> = g.vertices.iter().map(|v| v.anchor).collect();
        assert_eq!(
            anchors,
            [
                TextAnchor::Middle,
                TextAnchor::Start,
                TextAnchor::Middle,
                TextAnchor::End
            ]
        );
    }

    #[test]
    fn polygon_closes_to_first_vertex() {
        let g = RadarSpec::for_size(320.0).map(&square()).unwrap();
        let els = g.polygon().elements().to_vec();
        assert_eq!(els.len(), 5);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn rings_and_spokes_match_axis_count() {
        let g = RadarSpec::for_size(320.0).map(&square()).unwrap();
        assert_eq!(g.rings(4).len(), 4);
        assert_eq!(g.spokes().len(), 4);
        let outer = g.spokes()[0];
        assert!(close(outer.p1, Point::new(160.0, 160.0 - 112.0)));
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let err = RadarSpec::for_size(320.0)
            .map(&[SkillLevel::new("x", 120.0)])
            .unwrap_err();
        assert_eq!(
            err,
            GeometryError::LevelOutOfRange {
                index: 0,
                level: 120.0
            }
        );
    }

    #[test]
    fn non_finite_level_is_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let skills = [SkillLevel::new("a", 50.0), SkillLevel::new("b", bad)];
            let err = RadarSpec::for_size(320.0).map(&skills).unwrap_err();
            assert!(
                matches!(err, GeometryError::NonFinite { field: "level", index: 1, .. }),
                "{err:?}"
            );
        }
    }

    #[test]
    fn non_finite_center_is_rejected() {
        let err = RadarSpec::new(Point::new(f64::NAN, 0.0), 10.0)
            .map(&[SkillLevel::new("a", 50.0)])
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidSurface { .. }));
    }

    #[test]
    fn empty_input_has_empty_polygon() {
        let g = RadarSpec::for_size(320.0).map(&[]).unwrap();
        assert!(g.is_empty());
        assert!(g.polygon().elements().is_empty());
        assert!(g.rings(3).iter().all(|r| r.elements().is_empty()));
        assert_eq!(g.nearest(Point::ORIGIN), None);
    }

    #[test]
    fn nearest_vertex_under_pointer() {
        let g = RadarSpec::new(Point::new(0.0, 0.0), 10.0)
            .map(&square())
            .unwrap();
        assert_eq!(g.nearest(Point::new(-9.0, 1.0)), Some(3));
        assert_eq!(g.nearest(Point::new(0.5, -8.0)), Some(0));
    }
}
