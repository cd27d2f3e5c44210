// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar mapping.
//!
//! Each input row becomes one bar. Within a bar, segments stack bottom-up in the order given
//! by a [`SeriesOrder`], never in the iteration order of the row's own map.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect};
use peniko::Color;
use smallvec::SmallVec;

use crate::error::{GeometryError, finite};
use crate::scale::ScaleSlots;
use crate::surface::Surface;

/// One named series and its fill color.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesDef {
    /// Series name, matched against [`NamedSeriesRow`] keys.
    pub name: String,
    /// Fill color used for segments and legend swatches.
    pub color: Color,
}

impl SeriesDef {
    /// Creates a series definition.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The bottom-up stacking order for a stacked chart.
///
/// The order is explicit configuration. Bump `version` whenever series are added, removed or
/// reordered so downstream consumers (legends, color keys) can detect the change.
///
/// Names must be unique; [`StackedSpec::map`] rejects an order that repeats one.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesOrder {
    /// Configuration version.
    pub version: u32,
    series: Vec<SeriesDef>,
}

impl SeriesOrder {
    /// Creates a series order. The first entry is drawn at the bottom of each bar.
    pub fn new(version: u32, series: impl IntoIterator<Item = SeriesDef>) -> Self {
        Self {
            version,
            series: series.into_iter().collect(),
        }
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether there are no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series definitions, bottom first.
    pub fn series(&self) -> &[SeriesDef] {
        &self.series
    }

    /// Index of the series called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.series.iter().position(|s| s.name == name)
    }

    /// Legend entries in stacking order.
    pub fn legend(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.series.iter().map(|s| (s.name.as_str(), s.color))
    }
}

/// A category with one value per named series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedSeriesRow {
    /// Category label shown under the bar.
    pub label: String,
    /// Series values keyed by series name.
    pub values: HashMap<String, f64>,
}

impl NamedSeriesRow {
    /// Creates an empty row.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: HashMap::new(),
        }
    }

    /// Adds or replaces a series value.
    pub fn with(mut self, series: impl Into<String>, value: f64) -> Self {
        self.values.insert(series.into(), value);
        self
    }

    /// The value for `series`, or `0.0` when the row does not carry it.
    pub fn get(&self, series: &str) -> f64 {
        self.values.get(series).copied().unwrap_or(0.0)
    }
}

/// One stacked segment.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSegment {
    /// Index into the [`SeriesOrder`].
    pub series: usize,
    /// The original value.
    pub value: f64,
    /// Pixel rectangle. Zero-valued series produce a zero-height rectangle.
    pub rect: Rect,
}

/// One stacked bar (a row).
#[derive(Clone, Debug, PartialEq)]
pub struct StackedBar {
    /// Position in the input sequence.
    pub index: usize,
    /// Category label.
    pub label: String,
    /// Sum of the row's series values.
    pub total: f64,
    /// The full slot occupied by the bar, from the top of the plot to the baseline.
    pub slot: Rect,
    /// Segments in series order, bottom first.
    pub segments: SmallVec<[StackedSegment; 4]>,
}

/// Pixel-space output of [`StackedSpec::map`].
#[derive(Clone, Debug, PartialEq)]
pub struct StackedGeometry {
    /// Bars in input order.
    pub bars: Vec<StackedBar>,
    /// The largest row total, floored at `1`.
    pub max_total: f64,
}

impl StackedGeometry {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns `(row, series)` for the segment under `pos`, if any.
    pub fn hit_test(&self, pos: Point) -> Option<(usize, usize)> {
        let bar = self
            .bars
            .iter()
            .find(|b| pos.x >= b.slot.x0 && pos.x < b.slot.x1)?;
        bar.segments
            .iter()
            .find(|s| s.rect.contains(pos))
            .map(|s| (bar.index, s.series))
    }
}

/// Maps [`NamedSeriesRow`]s into stacked bars.
#[derive(Clone, Copy, Debug)]
pub struct StackedSpec {
    /// Target surface.
    pub surface: Surface,
    /// Horizontal gap after each bar, in pixels.
    pub gutter: f64,
}

impl StackedSpec {
    /// Creates a stacked spec with an 8px gutter.
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            gutter: 8.0,
        }
    }

    /// Sets the gap after each bar.
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Maps `rows` into stacked bars, stacking series in `order`.
    pub fn map(
        &self,
        rows: &[NamedSeriesRow],
        order: &SeriesOrder,
    ) -> Result<StackedGeometry, GeometryError> {
        self.surface.validate()?;
        validate_order(order)?;
        for (i, row) in rows.iter().enumerate() {
            validate_row(i, row, order)?;
        }

        let totals: Vec<f64> = rows
            .iter()
            .map(|row| order.series().iter().map(|s| row.get(&s.name)).sum())
            .collect();
        if let Some(row) = totals.iter().position(|t| !t.is_finite()) {
            tracing::debug!(row, "stacked row total overflows");
            return Err(GeometryError::DomainOverflow { field: "total" });
        }
        let max_total = totals.iter().copied().fold(1.0_f64, f64::max);

        let s = &self.surface;
        let slots = ScaleSlots::new((s.left(), s.right()), rows.len()).with_gutter(self.gutter);
        let width = slots.slot_width();
        let draw_height = s.draw_height();

        let bars = rows
            .iter()
            .zip(&totals)
            .enumerate()
            .map(|(i, (row, &total))| {
                let x = slots.x(i);
                let mut y_base = s.baseline();
                let segments = order
                    .series()
                    .iter()
                    .enumerate()
                    .map(|(series, def)| {
                        let value = row.get(&def.name);
                        let h = value / max_total * draw_height;
                        y_base -= h;
                        StackedSegment {
                            series,
                            value,
                            rect: Rect::new(x, y_base, x + width, y_base + h),
                        }
                    })
                    .collect();
                StackedBar {
                    index: i,
                    label: row.label.clone(),
                    total,
                    slot: Rect::new(x, s.top(), x + width, s.baseline()),
                    segments,
                }
            })
            .collect::<Vec<_>>();

        tracing::trace!(
            rows = bars.len(),
            series = order.len(),
            version = order.version,
            max_total,
            "mapped stacked bars"
        );
        Ok(StackedGeometry { bars, max_total })
    }
}

fn validate_order(order: &SeriesOrder) -> Result<(), GeometryError> {
    let mut seen = HashSet::with_capacity(order.len());
    match order.series().iter().find(|s| !seen.insert(s.name.as_str())) {
        Some(dup) => Err(GeometryError::DuplicateSeries {
            series: dup.name.clone(),
        }),
        None => Ok(()),
    }
}

fn validate_row(
    index: usize,
    row: &NamedSeriesRow,
    order: &SeriesOrder,
) -> Result<(), GeometryError> {
    // Smallest offending name, independent of map iteration order.
    if let Some(unknown) = row
        .values
        .keys()
        .filter(|k| order.position(k).is_none())
        .min()
    {
        return Err(GeometryError::UnknownSeries {
            row: index,
            series: unknown.clone(),
        });
    }
    for def in order.series() {
        let Some(&value) = row.values.get(&def.name) else {
            tracing::debug!(row = index, series = %def.name, "series missing from row, using 0");
            continue;
        };
        finite("value", index, value)?;
        if value < 0.0 {
            return Err(GeometryError::NegativeValue {
                row: index,
                series: def.name.clone(),
                value,
            });
        }
    }
    Ok(())
}
