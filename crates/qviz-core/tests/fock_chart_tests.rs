//! Fock bar chart integration tests
//!
//! Covers panel layout, ordering, annotation bookkeeping and template handling,
//! with property-based checks over panel counts and mode orderings.

mod common;

use common::fixtures;
use proptest::prelude::*;
use qviz_core::{build_fock_chart, ChartError, ChartSpec, Trace};

fn domains(chart: &ChartSpec, count: usize) -> Vec<[f64; 2]> {
    (0..count)
        .map(|idx| {
            let key = qviz_core::AxisName::x(idx).layout_key;
            chart
                .layout
                .axis(&key)
                .and_then(|axis| axis.domain)
                .unwrap_or_else(|| panic!("missing domain for {}", key))
        })
        .collect()
}

// === End-to-end example ===

#[test]
fn test_two_mode_example() {
    let (dists, means) = fixtures::two_mode_example();
    let chart = build_fock_chart(
        &ChartSpec::bar_chart_default(),
        &[0, 1],
        &dists,
        &means,
        &fixtures::labels(3),
    )
    .unwrap();

    assert_eq!(chart.data.len(), 2);
    let d = domains(&chart, 2);
    assert!((d[0][0] - 0.0).abs() < 1e-12);
    assert!((d[0][1] - 0.49).abs() < 1e-12);
    assert!((d[1][0] - 0.51).abs() < 1e-12);
    assert!((d[1][1] - 1.0).abs() < 1e-12);

    match &chart.data[0] {
        Trace::Bar(bar) => assert_eq!(bar.y, vec![0.6, 0.3, 0.1]),
        other => panic!("expected bar, got {}", other.kind()),
    }
    assert_eq!(chart.layout.annotations[1].text, "Mean: 0.120");
}

#[test]
fn test_json_cross_references() {
    let (dists, means) = fixtures::two_mode_example();
    let chart = build_fock_chart(
        &ChartSpec::bar_chart_default(),
        &[0, 1],
        &dists,
        &means,
        &fixtures::labels(3),
    )
    .unwrap();
    let value = chart.to_value().unwrap();

    assert_eq!(value["data"][1]["type"], "bar");
    assert_eq!(value["data"][1]["xaxis"], "x2");
    assert_eq!(value["data"][1]["marker"]["color"], "#1f9094");
    assert_eq!(value["layout"]["xaxis2"]["type"], "category");
    assert_eq!(value["layout"]["xaxis2"]["title"], "mode 1");
    assert_eq!(value["layout"]["yaxis"]["type"], "linear");
    assert_eq!(value["layout"]["title"], "Marginal Fock state probabilities");
    assert_eq!(value["config"]["displaylogo"], false);
}

// === Template handling ===

#[test]
fn test_template_not_mutated() {
    let (dists, means) = fixtures::two_mode_example();
    let template = ChartSpec::bar_chart_default();
    let snapshot = template.clone();

    let _ = build_fock_chart(&template, &[1, 0], &dists, &means, &fixtures::labels(3)).unwrap();

    assert_eq!(template, snapshot);
    assert_eq!(template.layout.annotations.len(), 1);
}

#[test]
fn test_edited_template_caption_propagates() {
    let (dists, means) = fixtures::synthetic(4, 3);
    let mut template = ChartSpec::bar_chart_default();
    template.layout.annotations[0].yanchor = Some("top".to_string());

    let chart = build_fock_chart(&template, &[3, 1, 2, 0], &dists, &means, &fixtures::labels(3))
        .unwrap();
    assert!(chart
        .layout
        .annotations
        .iter()
        .all(|a| a.yanchor.as_deref() == Some("top")));
}

#[test]
fn test_json_template_styling_reaches_every_panel() {
    let (dists, means) = fixtures::two_mode_example();
    let mut value = ChartSpec::bar_chart_default().to_value().unwrap();
    value["layout"]["bargap"] = serde_json::json!(0.2);
    value["layout"]["annotations"][0]["bgcolor"] = serde_json::json!("red");
    let template = ChartSpec::from_json(&value.to_string()).unwrap();

    let chart = build_fock_chart(&template, &[0, 1], &dists, &means, &fixtures::labels(3))
        .unwrap();
    let out = chart.to_value().unwrap();

    assert_eq!(out["layout"]["bargap"], 0.2);
    for idx in 0..2 {
        assert_eq!(out["layout"]["annotations"][idx]["bgcolor"], "red");
        assert_eq!(out["layout"]["annotations"][idx]["xref"], "paper");
    }
    assert_eq!(out["layout"]["annotations"][1]["text"], "Mean: 0.120");
}

#[test]
fn test_duplicate_modes_get_separate_panels() {
    let (dists, means) = fixtures::two_mode_example();
    let chart = build_fock_chart(
        &ChartSpec::bar_chart_default(),
        &[1, 0, 1],
        &dists,
        &means,
        &fixtures::labels(3),
    )
    .unwrap();

    assert_eq!(chart.data.len(), 3);
    assert_eq!(chart.layout.annotations.len(), 3);
    let titles: Vec<_> = (0..3)
        .map(|idx| {
            let key = qviz_core::AxisName::x(idx).layout_key;
            chart.layout.axis(&key).and_then(|a| a.title.clone()).unwrap()
        })
        .collect();
    assert_eq!(titles, vec!["mode 0", "mode 1", "mode 1"]);
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_counts_match_panel_count(count in 1usize..12, cutoff in 1usize..6) {
        let (dists, means) = fixtures::synthetic(count, cutoff);
        let modes: Vec<usize> = (0..count).collect();
        let chart = build_fock_chart(
            &ChartSpec::bar_chart_default(),
            &modes,
            &dists,
            &means,
            &fixtures::labels(cutoff),
        ).unwrap();

        prop_assert_eq!(chart.data.len(), count);
        prop_assert_eq!(chart.layout.annotations.len(), count);
        prop_assert_eq!(chart.layout.x_axis_names().count(), count);
    }

    #[test]
    fn test_domains_cover_unit_interval(count in 1usize..80) {
        let (dists, means) = fixtures::synthetic(count, 2);
        let modes: Vec<usize> = (0..count).collect();
        let result = build_fock_chart(
            &ChartSpec::bar_chart_default(),
            &modes,
            &dists,
            &means,
            &fixtures::labels(2),
        );

        // Inner panels shrink to nothing once 1/count <= 2 * 0.01
        if count >= 50 {
            let is_too_narrow = matches!(result, Err(ChartError::PanelTooNarrow { .. }));
            prop_assert!(is_too_narrow);
            return Ok(());
        }

        let chart = result.unwrap();
        let d = domains(&chart, count);
        prop_assert!(d[0][0].abs() < 1e-12, "first panel must start at 0");
        prop_assert!((d[count - 1][1] - 1.0).abs() < 1e-12, "last panel must end at 1");
        for pair in d.windows(2) {
            prop_assert!(pair[0][1] < pair[1][0], "adjacent panels overlap");
            prop_assert!((pair[1][0] - pair[0][1] - 0.02).abs() < 1e-9);
        }
        for slot in &d {
            prop_assert!(slot[0] < slot[1]);
        }
    }

    #[test]
    fn test_mode_order_does_not_matter(
        modes in Just((0usize..6).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let (dists, means) = fixtures::synthetic(6, 3);
        let mut sorted = modes.clone();
        sorted.sort_unstable();

        let template = ChartSpec::bar_chart_default();
        let shuffled = build_fock_chart(&template, &modes, &dists, &means, &fixtures::labels(3)).unwrap();
        let ordered = build_fock_chart(&template, &sorted, &dists, &means, &fixtures::labels(3)).unwrap();
        prop_assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_annotation_text_follows_ascending_modes(
        modes in prop::collection::btree_set(0usize..8, 1..8)
    ) {
        let (dists, means) = fixtures::synthetic(8, 4);
        let mut requested: Vec<usize> = modes.iter().copied().collect();
        requested.reverse();

        let chart = build_fock_chart(
            &ChartSpec::bar_chart_default(),
            &requested,
            &dists,
            &means,
            &fixtures::labels(4),
        ).unwrap();

        for (annotation, mode) in chart.layout.annotations.iter().zip(modes.iter()) {
            prop_assert_eq!(&annotation.text, &format!("Mean: {:.3}", means[mode]));
        }
    }

    #[test]
    fn test_build_is_deterministic(count in 1usize..6) {
        let (dists, means) = fixtures::synthetic(count, 3);
        let modes: Vec<usize> = (0..count).rev().collect();
        let template = ChartSpec::bar_chart_default();

        let first = build_fock_chart(&template, &modes, &dists, &means, &fixtures::labels(3)).unwrap();
        let second = build_fock_chart(&template, &modes, &dists, &means, &fixtures::labels(3)).unwrap();
        prop_assert_eq!(first, second);
    }
}
