// SPDX-License-Identifier: MPL-2.0
//! Index arithmetic for moving through the gallery.

use crate::config::NavigationMode;

/// Whether the previous and next controls are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub previous: bool,
    pub next: bool,
}

impl Affordances {
    pub const NONE: Self = Self {
        previous: false,
        next: false,
    };
}

/// Maps any requested index onto a valid position in a gallery of `len` images.
///
/// In circular mode a negative index selects the last image and an index past
/// the end selects the first. In clamped mode the index is pinned to the
/// nearest edge. Returns `None` for an empty gallery.
#[must_use]
pub fn normalize(index: isize, len: usize, mode: NavigationMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;

    let normalized = match (mode, usize::try_from(index)) {
        (NavigationMode::Circular, Err(_)) => last,
        (NavigationMode::Circular, Ok(i)) if i > last => 0,
        (NavigationMode::Clamped, Err(_)) => 0,
        (NavigationMode::Clamped, Ok(i)) => i.min(last),
        (NavigationMode::Circular, Ok(i)) => i,
    };
    Some(normalized)
}

/// Computes which controls are enabled while showing `index`.
#[must_use]
pub fn affordances(index: usize, len: usize, mode: NavigationMode) -> Affordances {
    if len == 0 {
        return Affordances::NONE;
    }
    match mode {
        NavigationMode::Circular => Affordances {
            previous: true,
            next: true,
        },
        NavigationMode::Clamped => Affordances {
            previous: index > 0,
            next: index + 1 < len,
        },
    }
}

/// Indices worth decoding ahead of time while `index` is displayed.
///
/// Only the immediate neighbours are considered and they never wrap around.
#[must_use]
pub fn preload_targets(index: usize, len: usize) -> Vec<usize> {
    let mut targets = Vec::with_capacity(2);
    if index > 0 && index - 1 < len {
        targets.push(index - 1);
    }
    if index + 1 < len {
        targets.push(index + 1);
    }
    targets
}
