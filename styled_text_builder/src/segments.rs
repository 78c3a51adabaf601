// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep-line segmentation of overlapping ranges.
//!
//! Given a text length and a list of (possibly overlapping) ranges, [`Segments`] yields
//! contiguous, non-overlapping segments covering `0..len` and, for each segment, the ids of the
//! ranges active over it. Ids are positions in the input list, and the active set is kept
//! sorted, so its last element is always the most recently added range.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

#[derive(Clone, Debug)]
pub(crate) struct Segments {
    boundaries: Vec<usize>,
    start_offsets: Vec<usize>,
    start_events: Vec<usize>,
    end_offsets: Vec<usize>,
    end_events: Vec<usize>,
    active: Vec<usize>,
    index: usize,
}

impl Segments {
    /// Builds the segmentation. Empty ranges still split segments but are never active.
    pub(crate) fn new<I>(len: usize, ranges: I) -> Self
    where
        I: IntoIterator<Item = Range<usize>>,
        I::IntoIter: Clone,
    {
        let ranges = ranges.into_iter();
        let (count, _) = ranges.size_hint();

        let mut boundaries = Vec::with_capacity(2 + count.saturating_mul(2));
        boundaries.push(0);
        boundaries.push(len);
        for range in ranges.clone() {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let boundary_count = boundaries.len();

        // Start/end events are keyed by boundary index in a CSR-style layout: one flat event
        // buffer plus an offsets array giving the slice for each boundary.
        let mut start_counts = vec![0_usize; boundary_count];
        let mut end_counts = vec![0_usize; boundary_count];
        let mut span_boundaries = Vec::with_capacity(count);
        for (id, range) in ranges.enumerate() {
            if range.start >= range.end {
                continue;
            }
            let (Ok(start_boundary), Ok(end_boundary)) = (
                boundaries.binary_search(&range.start),
                boundaries.binary_search(&range.end),
            ) else {
                continue;
            };
            span_boundaries.push((id, start_boundary, end_boundary));
            start_counts[start_boundary] += 1;
            end_counts[end_boundary] += 1;
        }

        let mut start_offsets = vec![0_usize; boundary_count + 1];
        let mut end_offsets = vec![0_usize; boundary_count + 1];
        for i in 0..boundary_count {
            start_offsets[i + 1] = start_offsets[i] + start_counts[i];
            end_offsets[i + 1] = end_offsets[i] + end_counts[i];
        }

        let mut start_events = vec![0_usize; start_offsets[boundary_count]];
        let mut end_events = vec![0_usize; end_offsets[boundary_count]];

        // Reuse counts as per-boundary write cursors.
        start_counts.fill(0);
        end_counts.fill(0);
        for &(id, start_boundary, end_boundary) in &span_boundaries {
            let start_ix = start_offsets[start_boundary] + start_counts[start_boundary];
            start_events[start_ix] = id;
            start_counts[start_boundary] += 1;

            let end_ix = end_offsets[end_boundary] + end_counts[end_boundary];
            end_events[end_ix] = id;
            end_counts[end_boundary] += 1;
        }

        Self {
            boundaries,
            start_offsets,
            start_events,
            end_offsets,
            end_events,
            active: Vec::with_capacity(span_boundaries.len()),
            index: 0,
        }
    }

    fn update_active_for_boundary(&mut self, boundary_index: usize) {
        let end_range = self.end_offsets[boundary_index]..self.end_offsets[boundary_index + 1];
        for &id in &self.end_events[end_range] {
            if let Ok(ix) = self.active.binary_search(&id) {
                self.active.remove(ix);
            }
        }
        let start_range =
            self.start_offsets[boundary_index]..self.start_offsets[boundary_index + 1];
        for &id in &self.start_events[start_range] {
            if let Err(ix) = self.active.binary_search(&id) {
                self.active.insert(ix, id);
            }
        }
    }

    /// Ids of the ranges active over the most recently yielded segment, ascending.
    ///
    /// Empty before the first call to `next` and after exhaustion.
    pub(crate) fn active(&self) -> &[usize] {
        &self.active
    }
}

impl Iterator for Segments {
    type Item = Range<usize>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.boundaries.len().saturating_sub(self.index + 1);
        (remaining, Some(remaining))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 < self.boundaries.len() {
            self.update_active_for_boundary(self.index);
            let start = self.boundaries[self.index];
            let end = self.boundaries[self.index + 1];
            self.index += 1;
            debug_assert!(start < end, "boundaries are sorted + deduped");
            return Some(start..end);
        }
        self.active.clear();
        None
    }
}

impl ExactSizeIterator for Segments {}
