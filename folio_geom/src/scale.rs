// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities shared by the mappers.
//!
//! - [`Extent`] finds a data domain and collapses a zero-width domain to a unit range.
//! - [`ScaleLinear`] maps a continuous domain into a pixel range.
//! - [`ScaleSlots`] lays out equal-width slots separated by a fixed gutter.
//! - [`ScaleSequence`] spreads `n` ordered positions evenly over a span.

use crate::error::GeometryError;

/// The `(min, max)` of a set of finite values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Smallest value seen.
    pub min: f64,
    /// Largest value seen.
    pub max: f64,
}

impl Extent {
    /// Computes the extent of `values`.
    ///
    /// Returns `None` for an empty iterator. Callers validate finiteness beforehand.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut it = values.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// Widens the extent so it contains `value`.
    pub fn including(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Returns `max - min`, or `1.0` when the domain has collapsed to a single value.
    pub fn range(&self) -> f64 {
        let r = self.max - self.min;
        if r == 0.0 { 1.0 } else { r }
    }

    /// Returns the extent unchanged if `max - min` is finite.
    pub fn checked(self, field: &'static str) -> Result<Self, GeometryError> {
        if (self.max - self.min).is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::DomainOverflow { field })
        }
    }

    /// Whether every value in the domain was equal.
    pub fn is_collapsed(&self) -> bool {
        self.max == self.min
    }
}

/// A linear mapping from a continuous domain to a continuous range.
///
/// A zero-width domain behaves as if it had width `1`, so every in-domain value maps to the
/// range start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Creates a scale over an [`Extent`].
    pub fn from_extent(extent: Extent, range: (f64, f64)) -> Self {
        Self::new((extent.min, extent.max), range)
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let denom = if span == 0.0 { 1.0 } else { span };
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Equal-width slots laid out left to right with a fixed gutter after each slot.
///
/// For `count` slots over a span `w`, each slot is `w / count - gutter` wide and slot `i`
/// starts at `start + i * (w / count)`. The trailing gutter of the last slot stays inside the
/// range, so slots never overflow it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSlots {
    range: (f64, f64),
    count: usize,
    gutter: f64,
}

impl ScaleSlots {
    /// Creates `count` slots over `range` with no gutter.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            gutter: 0.0,
        }
    }

    /// Sets the gap left after each slot, in pixels.
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter.max(0.0);
        self
    }

    /// Returns the number of slots.
    pub fn count(&self) -> usize {
        self.count
    }

    fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0).abs() / self.count.max(1) as f64
    }

    /// Returns the width of each slot, floored at zero.
    pub fn slot_width(&self) -> f64 {
        (self.step() - self.gutter).max(0.0)
    }

    /// Returns the left edge of the slot at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        r0.min(r1) + self.step() * index as f64
    }
}

/// Where a lone position sits when a sequence has exactly one entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SinglePlacement {
    /// At the start of the span.
    #[default]
    Start,
    /// At the midpoint of the span.
    Center,
}

/// Evenly spaced positions over a span, first at the start and last at the end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSequence {
    start: f64,
    span: f64,
    count: usize,
    single: SinglePlacement,
}

impl ScaleSequence {
    /// Creates a sequence of `count` positions covering `[start, start + span]`.
    pub fn new(start: f64, span: f64, count: usize) -> Self {
        Self {
            start,
            span,
            count,
            single: SinglePlacement::Start,
        }
    }

    /// Sets the placement policy used when `count == 1`.
    pub fn with_single_placement(mut self, single: SinglePlacement) -> Self {
        self.single = single;
        self
    }

    /// Returns the position of entry `index`.
    pub fn x(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return match self.single {
                SinglePlacement::Start => self.start,
                SinglePlacement::Center => self.start + self.span * 0.5,
            };
        }
        let t = index as f64 / (self.count - 1) as f64;
        self.start + t * self.span
    }
}
