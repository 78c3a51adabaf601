// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::segments::Segments;
use crate::{StyleAttributes, StyledText};

/// The effective attributes for a contiguous range of text.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// The attributes in effect over the range: every attribution covering it, merged in
    /// declaration order.
    pub style: StyleAttributes,
}

/// An iterator over flattened style runs.
///
/// Yields contiguous, non-overlapping runs covering the whole text, including runs with no
/// attributes at all.
#[derive(Clone, Debug)]
pub struct ResolvedRuns<'a> {
    styled: &'a StyledText,
    segments: Segments,
}

impl<'a> ResolvedRuns<'a> {
    pub(crate) fn new(styled: &'a StyledText) -> Self {
        let segments = Segments::new(
            styled.len(),
            styled.attributions().iter().map(|a| a.range().as_range()),
        );
        Self { styled, segments }
    }

    fn style_for_current_segment(&self) -> StyleAttributes {
        let attributions = self.styled.attributions();
        let mut style = StyleAttributes::new();
        for &id in self.segments.active() {
            style.merge(attributions[id].style());
        }
        style
    }
}

impl Iterator for ResolvedRuns<'_> {
    type Item = StyleRun;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segments.size_hint()
    }

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.segments.next()?;
        Some(StyleRun {
            range,
            style: self.style_for_current_segment(),
        })
    }
}

impl ExactSizeIterator for ResolvedRuns<'_> {}

/// An iterator over flattened style runs, merging adjacent runs with equal attributes.
#[derive(Clone, Debug)]
pub struct CoalescedRuns<'a> {
    inner: ResolvedRuns<'a>,
    pending: Option<StyleRun>,
}

impl<'a> CoalescedRuns<'a> {
    pub(crate) fn new(styled: &'a StyledText) -> Self {
        Self {
            inner: ResolvedRuns::new(styled),
            pending: None,
        }
    }
}

impl Iterator for CoalescedRuns<'_> {
    type Item = StyleRun;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;

        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end && next_run.style == run.style {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run);
            break;
        }

        Some(run)
    }
}
