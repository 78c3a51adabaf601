// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive regions: identifiers, callbacks, and offset lookup.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::compose::ClickableMatch;
use crate::segments::Segments;
use crate::{Callback, TextRange};

/// Identifies one interactive region of a [`StyledText`](crate::StyledText).
///
/// The identifier is derived from the declaring rule's position and the resolved range, so two
/// rules selecting the same characters still get distinct identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId {
    rule: usize,
    start: usize,
    end: usize,
}

impl RegionId {
    /// Declaration order of the rule that owns this region.
    #[inline]
    pub fn rule(self) -> usize {
        self.rule
    }

    /// The byte range of the region.
    #[inline]
    pub fn range(self) -> TextRange {
        TextRange::new_unchecked(self.start, self.end)
    }
}

/// A range of text that dispatches a click handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractiveRegion {
    id: RegionId,
    range: TextRange,
}

impl InteractiveRegion {
    /// The region's identifier, the key into [`StyledText::callbacks`](crate::StyledText::callbacks).
    #[inline]
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// The byte range of the region.
    #[inline]
    pub fn range(&self) -> TextRange {
        self.range
    }
}

/// Point lookup from a byte offset to the topmost interactive region covering it.
///
/// Regions are flattened into sorted, non-overlapping segments, each remembering the
/// last-registered region covering it, so a lookup is one binary search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegionIndex {
    /// Segment start offsets, ascending. Segment `i` spans `starts[i]..starts[i + 1]`; the last
    /// entry only closes the previous segment.
    starts: Vec<usize>,
    /// Topmost region for each segment, as an index into the region list.
    topmost: Vec<Option<usize>>,
}

impl RegionIndex {
    fn build(len: usize, regions: &[InteractiveRegion]) -> Self {
        let mut index = Self::default();
        if regions.is_empty() {
            return index;
        }
        let mut segments = Segments::new(len, regions.iter().map(|r| r.range.as_range()));
        while let Some(segment) = segments.next() {
            let top = segments.active().last().copied();
            // Coalesce neighbours with the same topmost region.
            if index.topmost.last() == Some(&top) {
                continue;
            }
            index.starts.push(segment.start);
            index.topmost.push(top);
        }
        index.starts.push(len);
        index
    }

    /// Returns the index of the topmost region containing `offset`.
    pub(crate) fn lookup(&self, offset: usize) -> Option<usize> {
        let after = self.starts.partition_point(|&start| start <= offset);
        if after == 0 || after == self.starts.len() {
            return None;
        }
        self.topmost[after - 1]
    }
}

/// Everything the registry derives from the clickable matches of one build.
#[derive(Clone, Debug, Default)]
pub(crate) struct Registry {
    pub(crate) regions: Vec<InteractiveRegion>,
    pub(crate) callbacks: HashMap<RegionId, Callback>,
    pub(crate) index: RegionIndex,
}

/// Assigns identifiers to clickable matches and builds the offset index.
///
/// `matches` must be in declaration order; later matches win lookups where regions overlap.
pub(crate) fn register(len: usize, matches: Vec<ClickableMatch>) -> Registry {
    let mut regions = Vec::with_capacity(matches.len());
    let mut callbacks = HashMap::with_capacity(matches.len());
    for m in matches {
        let id = RegionId {
            rule: m.rule,
            start: m.range.start(),
            end: m.range.end(),
        };
        if callbacks.insert(id, m.callback).is_some() {
            log::warn!(
                "duplicate interactive region {id:?} (match {} of rule {}); keeping the later callback",
                m.ordinal,
                m.rule
            );
            continue;
        }
        regions.push(InteractiveRegion { id, range: m.range });
    }
    let index = RegionIndex::build(len, &regions);
    Registry {
        regions,
        callbacks,
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::register;
    use crate::compose::ClickableMatch;
    use crate::{Callback, TextRange};
    use alloc::vec::Vec;

    fn clickable(rule: usize, start: usize, end: usize) -> ClickableMatch {
        ClickableMatch {
            rule,
            ordinal: 0,
            range: TextRange::new_unchecked(start, end),
            callback: Callback::new(|| {}),
        }
    }

    #[test]
    fn lookup_finds_containing_region() {
        let registry = register(20, [clickable(0, 6, 10)].into());
        let id = registry.regions[0].id();
        assert_eq!(registry.index.lookup(7), Some(0));
        assert_eq!(registry.index.lookup(6), Some(0));
        assert_eq!(registry.index.lookup(10), None);
        assert_eq!(registry.index.lookup(5), None);
        assert_eq!(registry.index.lookup(20), None);
        assert_eq!(registry.index.lookup(200), None);
        assert!(registry.callbacks.contains_key(&id));
    }

    #[test]
    fn same_range_from_two_rules_gets_two_ids() {
        let registry = register(10, [clickable(0, 2, 5), clickable(1, 2, 5)].into());
        assert_eq!(registry.regions.len(), 2);
        assert_eq!(registry.callbacks.len(), 2);
        assert_ne!(registry.regions[0].id(), registry.regions[1].id());
        // The later rule is on top.
        assert_eq!(registry.index.lookup(3), Some(1));
    }

    #[test]
    fn topmost_region_wins_overlaps() {
        let registry = register(
            20,
            [clickable(0, 0, 10), clickable(1, 5, 8), clickable(2, 7, 15)].into(),
        );
        let hits: Vec<_> = [0, 4, 5, 6, 7, 9, 10, 14, 15]
            .iter()
            .map(|&offset| registry.index.lookup(offset))
            .collect();
        assert_eq!(
            hits,
            [
                Some(0),
                Some(0),
                Some(1),
                Some(1),
                Some(2),
                Some(2),
                Some(2),
                Some(2),
                None
            ]
        );
    }

    #[test]
    fn later_match_of_one_rule_sits_on_top() {
        let registry = register(10, [clickable(0, 0, 10), clickable(0, 3, 6)].into());
        // Regions of one rule: the later match sits on top over 3..6.
        assert_eq!(registry.index.lookup(4), Some(1));
        assert_eq!(registry.index.lookup(8), Some(0));
        assert_eq!(registry.index.starts, [0, 3, 6, 10]);
    }

    #[test]
    fn no_regions_means_no_hits() {
        let registry = register(10, Vec::new());
        assert!(registry.regions.is_empty());
        assert_eq!(registry.index.lookup(0), None);
    }
}
