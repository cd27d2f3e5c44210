// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure chart geometry mappers.
//!
//! This crate turns small, ordered collections of labeled values into pixel-space geometry:
//! - **Linear**: [`LineSpec`] (line + area paths) and [`BarSpec`] (bars from zero).
//! - **Stacked**: [`StackedSpec`] stacks named series per category in a fixed [`SeriesOrder`].
//! - **Polar**: [`RadarSpec`] places `0..=100` levels around a center.
//! - **Sequential**: [`TimelineSpec`] spreads ordered events along a line.
//!
//! Every mapper is a pure function of its input and a [`Surface`] (or center/radius). Empty
//! input yields empty geometry; a zero-width domain is treated as a unit range; non-finite
//! input is rejected with a [`GeometryError`].
//!
//! Rendering is out of scope: outputs are `kurbo` points, rects and paths that a renderer can
//! draw, plus a caller-owned [`Selection`] for highlighting.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bar;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod line;
#[cfg(test)]
mod mapper_tests;
mod polar;
mod scale;
mod selection;
mod stacked;
mod surface;
mod timeline;

pub use bar::{Bar, BarSpec};
pub use error::GeometryError;
pub use line::{DataPoint, LineGeometry, LineSpec, MappedPoint};
pub use polar::{RadarGeometry, RadarSpec, RadarVertex, SkillLevel, TextAnchor};
pub use scale::{Extent, ScaleLinear, ScaleSequence, ScaleSlots, SinglePlacement};
pub use selection::Selection;
pub use stacked::{
    NamedSeriesRow, SeriesDef, SeriesOrder, StackedBar, StackedGeometry, StackedSegment,
    StackedSpec,
};
pub use surface::{Padding, Surface};
pub use timeline::{TimelineEvent, TimelineGeometry, TimelineSpec, TimelineStop};
