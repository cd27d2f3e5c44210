// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential (timeline) mapping.
//!
//! Events are spaced by their position in the sequence, not by any timestamp.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::error::GeometryError;
use crate::scale::{ScaleSequence, SinglePlacement};
use crate::surface::Surface;

/// A labeled event at a sequence position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Event label.
    pub label: String,
    /// Zero-based position in the sequence.
    pub order: usize,
}

impl TimelineEvent {
    /// Creates an event at `order`.
    pub fn new(label: impl Into<String>, order: usize) -> Self {
        Self {
            label: label.into(),
            order,
        }
    }

    /// Builds a sequence of events from labels, numbering them in iteration order.
    pub fn sequence<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Vec<Self> {
        labels
            .into_iter()
            .enumerate()
            .map(|(order, label)| Self::new(label, order))
            .collect()
    }
}

/// A mapped timeline stop.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStop {
    /// Position in the sequence.
    pub order: usize,
    /// Event label.
    pub label: String,
    /// Pixel position on the timeline.
    pub pos: Point,
}

/// Spreads events evenly along a horizontal line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSpec {
    /// Pixel x of the first event.
    pub left: f64,
    /// Horizontal distance from the first to the last event.
    pub span: f64,
    /// Shared pixel y of every event.
    pub y: f64,
    /// Placement of a lone event.
    pub single: SinglePlacement,
}

impl TimelineSpec {
    /// Creates a timeline from `left` across `span` at height `y`.
    pub fn new(left: f64, span: f64, y: f64) -> Self {
        Self {
            left,
            span,
            y,
            single: SinglePlacement::Start,
        }
    }

    /// A timeline across the drawable width of `surface`, at its vertical center.
    pub fn from_surface(surface: &Surface) -> Self {
        let y = surface.top() + surface.draw_height() * 0.5;
        Self::new(surface.left(), surface.draw_width(), y)
    }

    /// Sets the placement policy for a single event.
    pub fn with_single_placement(mut self, single: SinglePlacement) -> Self {
        self.single = single;
        self
    }

    /// Maps `events` onto the timeline, preserving input order.
    ///
    /// Each event's `order` must match its index in `events`.
    pub fn map(&self, events: &[TimelineEvent]) -> Result<TimelineGeometry, GeometryError> {
        if [self.left, self.span, self.y].iter().any(|v| !v.is_finite()) || self.span < 0.0 {
            return Err(GeometryError::InvalidSurface {
                reason: "timeline span must be finite and non-negative",
            });
        }
        if let Some((index, e)) = events.iter().enumerate().find(|(i, e)| e.order != *i) {
            return Err(GeometryError::OutOfOrder {
                index,
                order: e.order,
            });
        }
        if events.len() == 1 {
            tracing::debug!(policy = ?self.single, "placing single timeline event");
        }
        let seq = ScaleSequence::new(self.left, self.span, events.len())
            .with_single_placement(self.single);
        let stops = events
            .iter()
            .enumerate()
            .map(|(i, e)| TimelineStop {
                order: e.order,
                label: e.label.clone(),
                pos: Point::new(seq.x(i), self.y),
            })
            .collect();
        Ok(TimelineGeometry { stops })
    }
}

/// Pixel-space output of [`TimelineSpec::map`].
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineGeometry {
    /// Stops in input order.
    pub stops: Vec<TimelineStop>,
}

impl TimelineGeometry {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The rule joining the first and last stops.
    ///
    /// `None` when there are fewer than two stops.
    pub fn axis(&self) -> Option<Line> {
        match self.stops.as_slice() {
            [first, .., last] => Some(Line::new(first.pos, last.pos)),
            _ => None,
        }
    }

    /// Index of the stop horizontally closest to a pointer at pixel `x`.
    pub fn nearest(&self, x: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, s) in self.stops.iter().enumerate() {
            let d = (s.pos.x - x).abs();
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}
