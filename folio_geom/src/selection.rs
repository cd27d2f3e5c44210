// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight state owned by the caller.
//!
//! Mappers never see a [`Selection`]. Renderers take one alongside a geometry value and decide
//! how to emphasize the selected item.

/// Which item (point, bar, series, axis) is currently highlighted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Nothing is highlighted.
    #[default]
    None,
    /// The item at this index is highlighted.
    Index(usize),
}

impl Selection {
    /// Whether `index` is the highlighted item.
    pub fn is_selected(self, index: usize) -> bool {
        self == Self::Index(index)
    }

    /// Returns the highlighted index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Index(i) => Some(i),
        }
    }

    /// Drops the selection if it does not address one of `len` items.
    pub fn within(self, len: usize) -> Self {
        match self {
            Self::Index(i) if i < len => self,
            _ => Self::None,
        }
    }
}

impl From<Option<usize>> for Selection {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::None, Self::Index)
    }
}
