// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mapping: one rectangle per [`DataPoint`], rising from the zero line.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::error::{GeometryError, finite};
use crate::line::DataPoint;
use crate::scale::{Extent, ScaleLinear, ScaleSlots};
use crate::surface::Surface;

/// A single mapped bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Position in the input sequence.
    pub index: usize,
    /// Label carried over from the input.
    pub label: String,
    /// The original y value.
    pub value: f64,
    /// Pixel rectangle, between the zero line and the mapped value.
    pub rect: Rect,
}

/// Maps [`DataPoint`] y values to vertical bars laid out in input order.
///
/// The x values are ignored; bars occupy equal slots across the plot width. The y domain is
/// widened to include zero so every bar has a visible origin.
#[derive(Clone, Copy, Debug)]
pub struct BarSpec {
    /// Target surface.
    pub surface: Surface,
    /// Horizontal gap after each bar, in pixels.
    pub gutter: f64,
}

impl BarSpec {
    /// Creates a bar spec with an 8px gutter.
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

    /// Maps `data` into bars.
    pub fn map(&self, data: &[DataPoint]) -> Result<Vec<Bar>, GeometryError> {
        self.surface.validate()?;
        for (i, d) in data.iter().enumerate() {
            finite("y", i, d.y)?;
        }
        let Some(extent) = Extent::of(data.iter().map(|d| d.y)) else {
            return Ok(Vec::new());
        };
        let extent = extent.including(0.0).checked("y")?;
        let s = &self.surface;
        let y_scale = ScaleLinear::from_extent(extent, (s.baseline(), s.top()));
        let slots = ScaleSlots::new((s.left(), s.right()), data.len()).with_gutter(self.gutter);
        let zero = y_scale.map(0.0);
        let width = slots.slot_width();

        Ok(data
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let x = slots.x(i);
                let y = y_scale.map(d.y);
                Bar {
                    index: i,
                    label: d.label.clone(),
                    value: d.y,
                    rect: Rect::from_points(Point::new(x, zero), Point::new(x + width, y)),
                }
            })
            .collect())
    }
}
