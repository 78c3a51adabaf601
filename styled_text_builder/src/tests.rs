// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    Callback, FontFamily, FontSize, FontStyle, FontWeight, GenericFamily, RegionId, Selector,
    StyleAttributes, StyleRun, StyledText, StyledTextBuilder, TextDecoration,
};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;
use core::sync::atomic::{AtomicUsize, Ordering};
use peniko::color::palette::css;

/// Reference implementation of style flattening.
///
/// Walks every byte offset and merges all attributions covering it in order. The sweep in
/// `runs` must agree with this at every offset.
fn reference_style_at(text: &StyledText, offset: usize) -> StyleAttributes {
    let mut style = StyleAttributes::new();
    for attribution in text.attributions() {
        let range = attribution.range();
        if range.start() <= offset && offset < range.end() {
            style = style.merged(attribution.style());
        }
    }
    style
}

fn assert_runs_match_reference(text: &StyledText) {
    let runs: Vec<StyleRun> = text.resolved_runs().collect();
    let mut expected_start = 0;
    for run in &runs {
        assert_eq!(run.range.start, expected_start, "runs must be contiguous");
        assert!(run.range.start < run.range.end, "runs must be non-empty");
        for offset in run.range.clone() {
            assert_eq!(
                run.style,
                reference_style_at(text, offset),
                "style mismatch at byte {offset}"
            );
        }
        expected_start = run.range.end;
    }
    assert_eq!(expected_start, text.len(), "runs must cover the text");
}

fn bold() -> StyleAttributes {
    StyleAttributes::new().weight(FontWeight::BOLD)
}

fn red() -> StyleAttributes {
    StyleAttributes::new().color(css::RED)
}

fn ranges(text: &StyledText) -> Vec<Range<usize>> {
    text.attributions()
        .iter()
        .map(|a| a.range().as_range())
        .collect()
}

#[test]
fn valid_index_rule_yields_exactly_one_attribution() {
    let base = "0123456789";
    for start in 0..base.len() {
        for end in start + 1..=base.len() {
            let mut builder = StyledTextBuilder::new(base);
            builder.style_range(start..end, red());
            let text = builder.build();
            assert_eq!(text.attributions().len(), 1);
            assert_eq!(text.attributions()[0].range().as_range(), start..end);
            assert_eq!(text.attributions()[0].style(), &red());
        }
    }
}

#[test]
#[expect(
    clippy::reversed_empty_ranges,
    reason = "Bad ranges must produce no attributions."
)]
fn invalid_index_rules_yield_nothing() {
    let base = "0123456789";
    for range in [3..3, 7..2, 0..11, 10..12, usize::MAX - 1..usize::MAX] {
        let mut builder = StyledTextBuilder::new(base);
        builder.style_range(range.clone(), red());
        assert!(
            builder.build().attributions().is_empty(),
            "{range:?} should be dropped"
        );
    }

    // Splitting a codepoint is invalid too.
    let mut builder = StyledTextBuilder::new("héllo");
    builder.style_range(0..2, red());
    assert!(builder.build().attributions().is_empty());
}

#[test]
fn occurrence_selectors() {
    let base = "apple banana apple cherry apple";

    let mut builder = StyledTextBuilder::new(base);
    builder.style_all("apple", red());
    let text = builder.build();
    assert_eq!(ranges(&text), [0..5, 13..18, 26..31]);

    let mut builder = StyledTextBuilder::new(base);
    builder.style_nth("apple", 2, red());
    assert_eq!(ranges(&builder.build()), [13..18]);

    let mut builder = StyledTextBuilder::new(base);
    builder.style_nth("apple", 5, red());
    assert!(builder.build().attributions().is_empty());
}

#[test]
fn overlap_keeps_attributes_independent() {
    let base = "0123456789";
    let mut red_first = StyledTextBuilder::new(base);
    red_first.style_range(0..10, red()).style_range(5..8, bold());
    let mut bold_first = StyledTextBuilder::new(base);
    bold_first.style_range(5..8, bold()).style_range(0..10, red());

    for text in [red_first.build(), bold_first.build()] {
        for offset in 0..10 {
            let style = text.style_at(offset);
            assert_eq!(style.color, Some(css::RED), "color at {offset}");
            let expected_weight = (5..8).contains(&offset).then_some(FontWeight::BOLD);
            assert_eq!(style.weight, expected_weight, "weight at {offset}");
        }
        assert_runs_match_reference(&text);
    }
}

#[test]
fn later_rule_wins_per_attribute() {
    let mut builder = StyledTextBuilder::new("0123456789");
    builder
        .style_range(0..10, red().weight(FontWeight::LIGHT))
        .style_range(3..6, StyleAttributes::new().color(css::BLUE));
    let text = builder.build();

    let inside = text.style_at(4);
    assert_eq!(inside.color, Some(css::BLUE));
    assert_eq!(inside.weight, Some(FontWeight::LIGHT));
    assert_eq!(text.style_at(7).color, Some(css::RED));
}

#[test]
fn resolved_runs_match_reference() {
    let mut builder = StyledTextBuilder::new("The quick brown fox jumps over the lazy dog");
    builder
        .style_all("o", red())
        .style_range(4..19, bold())
        .style_text("fox", StyleAttributes::new().size(FontSize::Px(20.0)))
        .style_range(10..30, StyleAttributes::new().font_style(FontStyle::Italic))
        .style_all("the", StyleAttributes::new().family(GenericFamily::Monospace))
        .style_range(
            0..43,
            StyleAttributes::new().decoration(TextDecoration::UNDERLINE),
        )
        .style_text("lazy", StyleAttributes::new().family(FontFamily::named("Inter")))
        .style_range(16..17, StyleAttributes::new().color(css::GREEN));
    let text = builder.build();
    assert_runs_match_reference(&text);
    assert_eq!(text.resolved_runs().len(), text.resolved_runs().count());
}

#[test]
fn coalesced_runs_merge_equal_neighbours() {
    let mut builder = StyledTextBuilder::new("aaaa bbbb");
    builder
        .style_range(0..2, red())
        .style_range(2..4, red())
        .style_range(5..9, bold());
    let text = builder.build();

    assert_eq!(text.resolved_runs().count(), 4);
    let runs: Vec<_> = text.coalesced_runs().collect();
    assert_eq!(
        runs,
        [
            StyleRun {
                range: 0..4,
                style: red(),
            },
            StyleRun {
                range: 4..5,
                style: StyleAttributes::new(),
            },
            StyleRun {
                range: 5..9,
                style: bold(),
            },
        ]
    );
}

#[test]
fn empty_text_has_no_runs() {
    let mut builder = StyledTextBuilder::new("");
    builder.style_range(0..1, red()).style_all("a", bold());
    let text = builder.build();
    assert!(text.is_empty());
    assert!(text.attributions().is_empty());
    assert_eq!(text.resolved_runs().count(), 0);
}

#[test]
fn build_is_idempotent() {
    let mut builder = StyledTextBuilder::new("Click here or there");
    builder
        .style_text("Click", bold())
        .style_all("ere", StyleAttributes::new().on_click(|| {}));

    let first = builder.build();
    let second = builder.build();

    assert_eq!(first.attributions(), second.attributions());
    assert_eq!(first.regions(), second.regions());
    assert_eq!(first.callbacks().len(), 2);
    assert_eq!(first.callbacks(), second.callbacks());
    assert!(!core::ptr::eq(first.callbacks(), second.callbacks()));
}

#[test]
fn regex_selects_email() {
    let mut builder = StyledTextBuilder::new("Email: test@example.com");
    builder
        .style_regex(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b", red())
        .unwrap();
    let text = builder.build();
    assert_eq!(ranges(&text), [7..23]);
    assert_eq!(&text.as_str()[7..23], "test@example.com");
}

#[test]
fn dispatch_fires_one_callback() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let mut builder = StyledTextBuilder::new("Click here to continue");
    builder.style_range(
        6..10,
        StyleAttributes::new().on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let text = builder.build();

    let region = text.region_at(7).unwrap();
    let id = region.id();
    assert_eq!(id.rule(), 0);
    assert_eq!(id.range().as_range(), 6..10);
    text.callback(id).unwrap().invoke();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    assert!(text.region_at(20).is_none());
    assert!(!text.dispatch(20));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn overlapping_regions_dispatch_latest_rule_only() {
    let outer_hits = Arc::new(AtomicUsize::new(0));
    let inner_hits = Arc::new(AtomicUsize::new(0));
    let outer = {
        let hits = outer_hits.clone();
        Callback::new(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    let inner = {
        let hits = inner_hits.clone();
        Callback::new(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    let mut builder = StyledTextBuilder::new("0123456789");
    builder
        .style_range(0..10, StyleAttributes::new().on_click(outer))
        .style_range(3..6, StyleAttributes::new().on_click(inner));
    let text = builder.build();

    assert!(text.dispatch(4));
    assert_eq!(inner_hits.load(Ordering::SeqCst), 1);
    assert_eq!(outer_hits.load(Ordering::SeqCst), 0);

    assert!(text.dispatch(8));
    assert_eq!(outer_hits.load(Ordering::SeqCst), 1);
    assert_eq!(inner_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn region_ids_are_distinct_per_rule_and_range() {
    let mut builder = StyledTextBuilder::new("link link");
    builder
        .style_all("link", StyleAttributes::new().on_click(|| {}))
        .style_text("link", StyleAttributes::new().on_click(|| {}));
    let text = builder.build();

    let ids: Vec<RegionId> = text.regions().iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(text.callbacks().len(), 3);
    assert_eq!(ids[0].range(), ids[2].range());
    assert_ne!(ids[0], ids[2]);
    // The second rule covers the first "link" and wins there.
    assert_eq!(text.region_at(1).map(|r| r.id()), Some(ids[2]));
    assert_eq!(text.region_at(6).map(|r| r.id()), Some(ids[1]));
}

#[test]
fn rules_without_matches_are_skipped() {
    let mut builder = StyledTextBuilder::new("nothing here");
    builder
        .style_text("absent", red())
        .add_rule(Selector::all(""), bold())
        .style_regex(r"\d+", red())
        .unwrap()
        .style_text("here", bold());
    let text = builder.build();
    assert_eq!(ranges(&text), [8..12]);
    assert_eq!(text.attributions()[0].rule(), 3);
}

#[test]
fn built_text_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StyledText>();
    assert_send_sync::<Callback>();
    assert_send_sync::<StyledTextBuilder>();
}
