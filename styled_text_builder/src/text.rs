// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::registry::{RegionIndex, Registry};
use crate::runs::{CoalescedRuns, ResolvedRuns};
use crate::{Callback, InteractiveRegion, RegionId, StyleAttribution, StyleAttributes};

/// The immutable result of [`StyledTextBuilder::build`](crate::StyledTextBuilder::build).
///
/// Holds the unchanged base text, the style attributions in application order, and the
/// interactive regions with their click handlers. A `StyledText` never changes after it is
/// built and has no link back to its builder; it is `Send + Sync` and can be read from any
/// number of threads.
///
/// Renderers paint [`attributions`](Self::attributions) in order, last value wins per
/// attribute per character, or use [`resolved_runs`](Self::resolved_runs) to get that result
/// directly. Taps are mapped to a byte offset by the renderer and handed to
/// [`dispatch`](Self::dispatch).
#[derive(Clone, Debug)]
pub struct StyledText {
    text: Arc<str>,
    attributions: Vec<StyleAttribution>,
    regions: Vec<InteractiveRegion>,
    callbacks: HashMap<RegionId, Callback>,
    index: RegionIndex,
}

impl StyledText {
    pub(crate) fn new(
        text: Arc<str>,
        attributions: Vec<StyleAttribution>,
        registry: Registry,
    ) -> Self {
        Self {
            text,
            attributions,
            regions: registry.regions,
            callbacks: registry.callbacks,
            index: registry.index,
        }
    }

    /// The base text, unchanged.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// A shared handle to the base text.
    #[inline]
    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Style attributions in application order.
    #[inline]
    pub fn attributions(&self) -> &[StyleAttribution] {
        &self.attributions
    }

    /// Interactive regions in registration (declaration) order.
    #[inline]
    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// Click handlers keyed by region identifier.
    #[inline]
    pub fn callbacks(&self) -> &HashMap<RegionId, Callback> {
        &self.callbacks
    }

    /// The click handler for `id`, if any.
    #[inline]
    pub fn callback(&self, id: RegionId) -> Option<&Callback> {
        self.callbacks.get(&id)
    }

    /// The topmost interactive region containing the byte `offset`.
    ///
    /// Where regions overlap, the one declared last wins. This is a binary search over the
    /// flattened regions.
    pub fn region_at(&self, offset: usize) -> Option<&InteractiveRegion> {
        self.index.lookup(offset).map(|ix| &self.regions[ix])
    }

    /// The click handler that a tap at `offset` would fire.
    pub fn callback_at(&self, offset: usize) -> Option<&Callback> {
        self.region_at(offset)
            .and_then(|region| self.callback(region.id()))
    }

    /// Fires the handler of the topmost region containing `offset`, on the calling thread.
    ///
    /// Returns `true` if a handler ran. At most one handler runs per call.
    ///
    /// ```
    /// use core::sync::atomic::{AtomicBool, Ordering};
    /// use std::sync::Arc;
    /// use styled_text_builder::{StyleAttributes, StyledTextBuilder};
    ///
    /// let clicked = Arc::new(AtomicBool::new(false));
    /// let flag = clicked.clone();
    /// let mut builder = StyledTextBuilder::new("Click here to continue");
    /// builder.style_text(
    ///     "here",
    ///     StyleAttributes::new().on_click(move || flag.store(true, Ordering::SeqCst)),
    /// );
    /// let text = builder.build();
    ///
    /// assert!(!text.dispatch(0));
    /// assert!(text.dispatch(7));
    /// assert!(clicked.load(Ordering::SeqCst));
    /// ```
    pub fn dispatch(&self, offset: usize) -> bool {
        match self.callback_at(offset) {
            Some(callback) => {
                callback.invoke();
                true
            }
            None => false,
        }
    }

    /// The effective attributes at the byte `offset`.
    ///
    /// This scans every attribution; use [`resolved_runs`](Self::resolved_runs) to style the
    /// whole text.
    pub fn style_at(&self, offset: usize) -> StyleAttributes {
        let mut style = StyleAttributes::new();
        for attribution in &self.attributions {
            if attribution.range().contains(offset) {
                style.merge(attribution.style());
            }
        }
        style
    }

    /// Returns an iterator over flattened style runs covering the whole text.
    ///
    /// Overlapping attributions are merged attribute by attribute in declaration order.
    #[inline]
    pub fn resolved_runs(&self) -> ResolvedRuns<'_> {
        ResolvedRuns::new(self)
    }

    /// Returns an iterator over flattened style runs, coalescing adjacent runs with the same
    /// attributes.
    #[inline]
    pub fn coalesced_runs(&self) -> CoalescedRuns<'_> {
        CoalescedRuns::new(self)
    }
}
