//! # Comparator
//!
//! A `Comparator` decides which of two fitness values ranks lower. The winner
//! of a run is the first maximal candidate under this ordering, and
//! [`ElitistSelection`](crate::selection::ElitistSelection) keeps the maximal
//! candidates.
//!
//! ```rust
//! use genetics::evolution::{Comparator, Maximize, Minimize};
//!
//! assert!(Minimize.is_worse(&3.0, &1.0));
//! assert!(Maximize.is_worse(&1.0, &3.0));
//!
//! // Any `Fn(&R, &R) -> bool` works too, with the same meaning.
//! let by_distance_to_ten = |lhs: &i32, rhs: &i32| (lhs - 10).abs() > (rhs - 10).abs();
//! assert!(by_distance_to_ten.is_worse(&0, &9));
//! ```

use std::cmp::Ordering;

/// A strict weak ordering over fitness values.
pub trait Comparator<R> {
    /// Returns `true` when `lhs` ranks strictly below `rhs`.
    fn is_worse(&self, lhs: &R, rhs: &R) -> bool;

    /// Orders `lhs` before `rhs` when `lhs` is better.
    fn best_first(&self, lhs: &R, rhs: &R) -> Ordering {
        if self.is_worse(rhs, lhs) {
            Ordering::Less
        } else if self.is_worse(lhs, rhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<R, F> Comparator<R> for F
where
    F: Fn(&R, &R) -> bool,
{
    fn is_worse(&self, lhs: &R, rhs: &R) -> bool {
        self(lhs, rhs)
    }
}

/// Lower fitness is better. This is the engine's default.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl<R: PartialOrd> Comparator<R> for Minimize {
    fn is_worse(&self, lhs: &R, rhs: &R) -> bool {
        lhs > rhs
    }
}

/// Higher fitness is better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl<R: PartialOrd> Comparator<R> for Maximize {
    fn is_worse(&self, lhs: &R, rhs: &R) -> bool {
        lhs < rhs
    }
}
