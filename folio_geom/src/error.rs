// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors.
//!
//! Degenerate domains and empty inputs are not errors; they are handled by the mappers. The
//! variants here cover caller contract violations that would otherwise leak `NaN` into the
//! generated geometry.

extern crate alloc;

use alloc::string::String;

/// Errors returned by the geometry mappers when input data violates their contract.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A data value is `NaN` or infinite.
    #[error("non-finite {field} at index {index}: {value}")]
    NonFinite {
        /// Name of the offending field (`"x"`, `"y"`, `"level"`, ...).
        field: &'static str,
        /// Position of the offending item in the input sequence.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// Finite inputs whose span does not fit in an `f64`.
    #[error("{field} domain overflows: its span is not finite")]
    DomainOverflow {
        /// Which domain overflowed (`"x"`, `"y"`, `"total"`).
        field: &'static str,
    },
    /// The drawing surface cannot hold a plot area.
    #[error("invalid surface: {reason}")]
    InvalidSurface {
        /// Short description of the violated constraint.
        reason: &'static str,
    },
    /// A skill level falls outside `[0, 100]`.
    #[error("level {level} at index {index} is outside [0, 100]")]
    LevelOutOfRange {
        /// Position of the entry in the input sequence.
        index: usize,
        /// The rejected level.
        level: f64,
    },
    /// A stacked series value is negative.
    #[error("negative value {value} for series `{series}` in row {row}")]
    NegativeValue {
        /// Row index.
        row: usize,
        /// Series name.
        series: String,
        /// The rejected value.
        value: f64,
    },
    /// A row carries a series that the series order does not list.
    #[error("row {row} has series `{series}` missing from the series order")]
    UnknownSeries {
        /// Row index.
        row: usize,
        /// Series name found in the row.
        series: String,
    },
    /// A series order lists the same name twice.
    #[error("series `{series}` appears more than once in the series order")]
    DuplicateSeries {
        /// The repeated name.
        series: String,
    },
    /// A timeline event's `order` disagrees with its position in the sequence.
    #[error("timeline event at index {index} declares order {order}")]
    OutOfOrder {
        /// Position in the input sequence.
        index: usize,
        /// The declared order.
        order: usize,
    },
}

/// Returns `Ok(value)` if `value` is finite, or a [`GeometryError::NonFinite`] otherwise.
pub(crate) fn finite(field: &'static str, index: usize, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite {
            field,
            index,
            value,
        })
    }
}
