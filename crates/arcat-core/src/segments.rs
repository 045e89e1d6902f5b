//! Maximal run detection
//!
//! Every stage that reasons about "events" needs the same thing: the maximal
//! contiguous index ranges where some per-timestep predicate holds. This
//! module provides one lazy iterator for that, so the collapse, duration and
//! cumulative stages share a single boundary scan.
//!
//! ```rust
//! use arcat_core::segments::{nonzero_runs, Segment};
//!
//! let categories = [0, 2, 3, 0, 0, 1];
//! let runs: Vec<Segment> = nonzero_runs(&categories).collect();
//! assert_eq!(runs, vec![Segment::new(1, 3), Segment::new(5, 6)]);
//! ```

use crate::Category;
use std::iter::FusedIterator;
use std::ops::Range;

/// A half-open index range `[start, end)` of consecutive timesteps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// First index in the run
    pub start: usize,
    /// One past the last index in the run
    pub end: usize,
}

impl Segment {
    /// Create a segment covering `[start, end)`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "segment start {start} after end {end}");
        Self { start, end }
    }

    /// Number of timesteps in the segment
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the segment covers no timesteps
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The segment as an index range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if an index falls inside the segment
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Borrow the part of `data` covered by the segment
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        &data[self.range()]
    }
}

/// Lazy iterator over the maximal runs where a predicate holds
///
/// Runs are yielded left to right, never overlap, and are never adjacent
/// (two adjacent runs would be one maximal run). A run touching the end of
/// the data is closed at `data.len()`.
#[derive(Clone)]
pub struct Segments<'a, T, P> {
    data: &'a [T],
    position: usize,
    predicate: P,
}

impl<'a, T, P> Iterator for Segments<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let data = self.data;
        let predicate = &mut self.predicate;

        let start = match data[self.position..].iter().position(|v| predicate(v)) {
            Some(offset) => self.position + offset,
            None => {
                self.position = data.len();
                return None;
            }
        };

        let end = data[start..]
            .iter()
            .position(|v| !predicate(v))
            .map_or(data.len(), |offset| start + offset);

        self.position = end;
        Some(Segment::new(start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.position;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl<'a, T, P> FusedIterator for Segments<'a, T, P> where P: FnMut(&T) -> bool {}

/// Iterate the maximal runs of `data` where `predicate` holds
pub fn segments_by<T, P>(data: &[T], predicate: P) -> Segments<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    Segments {
        data,
        position: 0,
        predicate,
    }
}

fn is_nonzero(category: &Category) -> bool {
    *category != 0
}

fn is_set(flag: &bool) -> bool {
    *flag
}

/// Iterate the maximal nonzero runs (events) of a category sequence
pub fn nonzero_runs(categories: &[Category]) -> Segments<'_, Category, fn(&Category) -> bool> {
    segments_by(categories, is_nonzero as fn(&Category) -> bool)
}

/// Iterate the maximal runs of `true` in a mask
pub fn true_runs(mask: &[bool]) -> Segments<'_, bool, fn(&bool) -> bool> {
    segments_by(mask, is_set as fn(&bool) -> bool)
}
