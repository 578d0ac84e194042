// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequence mutation: move one element to a new position.
//!
//! [`move_item`] has "splice out, then splice in" semantics: the element at
//! `from` is removed and reinserted so that it ends up at index `to` of the
//! resulting sequence. It works in place on a slice by rotating the affected
//! range, so no element is cloned, dropped or recreated.
//!
//! ```
//! use understory_reorder::move_item;
//!
//! let mut items = ['a', 'b', 'c', 'd', 'e'];
//! move_item(&mut items, 1, 3).unwrap();
//! assert_eq!(items, ['a', 'c', 'd', 'b', 'e']);
//!
//! move_item(&mut items, 3, 0).unwrap();
//! assert_eq!(items, ['b', 'a', 'c', 'd', 'e']);
//! ```

use core::fmt;

/// Error returned by [`move_item`] when an index does not address the sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// `index` is not less than `len`.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for a sequence of length {len}")
            }
        }
    }
}

impl core::error::Error for MoveError {}

/// Moves the element at `from` so that it ends up at `to`.
///
/// Elements between the two positions shift by one toward the vacated slot;
/// everything else keeps its position. `from == to` is a no-op.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if either index is not less than
/// `items.len()`. The slice is left untouched in that case.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> Result<(), MoveError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(MoveError::OutOfBounds { index, len });
        }
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
    Ok(())
}
