// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surfaces: a width/height pair with padding insets.

use kurbo::{Point, Rect};

use crate::error::GeometryError;

/// Insets reserved around the plot area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Inset above the plot area.
    pub top: f64,
    /// Inset right of the plot area.
    pub right: f64,
    /// Inset below the plot area.
    pub bottom: f64,
    /// Inset left of the plot area.
    pub left: f64,
}

impl Padding {
    /// Creates the same inset on all four sides.
    pub const fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Creates per-side insets.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

/// A rectangular drawing area with padding insets.
///
/// Surfaces are plain values; mappers take them by reference and never mutate them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Total width in pixels.
    pub width: f64,
    /// Total height in pixels.
    pub height: f64,
    /// Insets excluded from the data-mapped region.
    pub padding: Padding,
}

impl Surface {
    /// Creates a surface with the given size and padding.
    pub fn new(width: f64, height: f64, padding: impl Into<Padding>) -> Self {
        Self {
            width,
            height,
            padding: padding.into(),
        }
    }

    /// The 320×140 surface used by the trend line chart.
    ///
    /// The line chart only reserves half a padding on the right, so the last point can sit
    /// closer to the edge than the first.
    pub const fn line_chart_default() -> Self {
        Self {
            width: 320.0,
            height: 140.0,
            padding: Padding::new(24.0, 12.0, 24.0, 24.0),
        }
    }

    /// The 320×140 surface used by the stacked bar chart.
    pub const fn stacked_chart_default() -> Self {
        Self {
            width: 320.0,
            height: 140.0,
            padding: Padding::uniform(26.0),
        }
    }

    /// Width of the data-mapped region.
    pub fn draw_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    /// Height of the data-mapped region.
    pub fn draw_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// Leftmost pixel X of the data-mapped region.
    pub fn left(&self) -> f64 {
        self.padding.left
    }

    /// Rightmost pixel X of the data-mapped region.
    pub fn right(&self) -> f64 {
        self.width - self.padding.right
    }

    /// Topmost pixel Y of the data-mapped region.
    pub fn top(&self) -> f64 {
        self.padding.top
    }

    /// Baseline (bottom) pixel Y of the data-mapped region.
    pub fn baseline(&self) -> f64 {
        self.height - self.padding.bottom
    }

    /// The data-mapped region as a rectangle.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.baseline())
    }

    /// The center of the whole surface.
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Checks that all dimensions are finite and that the padding leaves a non-negative plot
    /// area.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let Padding {
            top,
            right,
            bottom,
            left,
        } = self.padding;
        let all = [self.width, self.height, top, right, bottom, left];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::InvalidSurface {
                reason: "dimensions must be finite",
            });
        }
        if all.iter().any(|v| *v < 0.0) {
            return Err(GeometryError::InvalidSurface {
                reason: "dimensions and padding must be non-negative",
            });
        }
        if self.draw_width() < 0.0 {
            return Err(GeometryError::InvalidSurface {
                reason: "horizontal padding exceeds width",
            });
        }
        if self.draw_height() < 0.0 {
            return Err(GeometryError::InvalidSurface {
                reason: "vertical padding exceeds height",
            });
        }
        Ok(())
    }
}
