mod common;

use brickwork::{
    BrickworkError, ErrorKind, Hooks, LayoutMode, Lifecycle, Options, OptionsPatch,
    RESIZE_QUIESCENCE, Size, SortValue, StyleDelta, StyleTarget, Surface,
};
use std::cell::Cell;
use std::rc::Rc;
use common::fixtures::*;
use common::{Harness, TestResult, id};
use serde_json::json;
use std::time::Duration;

#[test]
fn test_masonry_resize_only_relayouts_on_column_change() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(4, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    assert_position!(harness, 4, (0, 50));

    harness.surface.set_container_size(Size::new(350.0, 0.0));
    assert!(harness.brickwork.resize()?.is_none());

    harness.surface.set_container_size(Size::new(400.0, 0.0));
    let mut pass = harness.brickwork.resize()?.expect("column count changed");
    assert!(pass.is_complete());
    assert_position!(harness, 4, (300, 0));
    assert_eq!(harness.brickwork.container_size().height, Some(50.0));
    Ok(())
}

#[test]
fn test_cells_resize_tracks_columns() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(4, (50.0, 50.0), 300.0));
    harness.init(json!({
        "layoutMode": "cellsByRow",
        "cellsByRow": { "columnWidth": 100, "rowHeight": 100 }
    }))?;
    harness.surface.set_container_size(Size::new(320.0, 0.0));
    assert!(harness.brickwork.resize()?.is_none());
    harness.surface.set_container_size(Size::new(200.0, 0.0));
    assert!(harness.brickwork.resize()?.is_some());
    assert_position!(harness, 3, (25, 125));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_resize_burst_recomputes_once() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(4, (100.0, 40.0), 300.0));
    harness.init(json!({ "layoutMode": "fitRows" }))?;
    harness.brickwork.run_pending();
    harness.surface.set_container_size(Size::new(400.0, 0.0));

    for _ in 0..3 {
        harness.brickwork.notify_resize();
        tokio::time::advance(Duration::from_millis(50)).await;
        assert_eq!(harness.brickwork.run_pending(), 0);
    }
    assert_position!(harness, 4, (0, 40));

    tokio::time::advance(RESIZE_QUIESCENCE - Duration::from_millis(51)).await;
    assert_eq!(harness.brickwork.run_pending(), 0);
    tokio::time::advance(Duration::from_millis(1)).await;
    assert_eq!(harness.brickwork.run_pending(), 1);
    assert_position!(harness, 4, (300, 0));
    assert_eq!(harness.brickwork.next_deadline(), None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_resize_now_skips_the_window() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(4, (100.0, 40.0), 300.0));
    harness.init(json!({ "layoutMode": "fitRows" }))?;
    harness.surface.set_container_size(Size::new(400.0, 0.0));

    harness.brickwork.notify_resize_now();
    harness.brickwork.run_pending();
    assert_position!(harness, 4, (300, 0));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_resize_events_ignored_when_not_resizable() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(2, (100.0, 40.0), 300.0));
    harness.init(json!({ "resizable": false }))?;
    harness.brickwork.settle().await;

    harness.brickwork.notify_resize();
    assert_eq!(harness.brickwork.next_deadline(), None);

    harness
        .brickwork
        .reconfigure(OptionsPatch::from_json(r#"{ "resizable": true }"#)?)?;
    harness.brickwork.notify_resize();
    assert!(harness.brickwork.next_deadline().is_some());
    Ok(())
}

#[test]
fn test_destroy_restores_everything() -> TestResult {
    let mut harness = Harness::new(&tagged_scene());
    harness.init(json!({ "filter": ".rare" }))?;
    harness.brickwork.run_pending();
    assert!(harness.surface.has_class(StyleTarget::Container, "brickwork"));

    harness.brickwork.destroy()?;

    assert_eq!(harness.brickwork.lifecycle(), Lifecycle::Uninitialized);
    assert!(harness.brickwork.items().is_empty());
    assert_eq!(harness.container_style(), StyleDelta::default());
    assert!(!harness.surface.has_class(StyleTarget::Container, "brickwork"));
    for raw in 1..=6 {
        let target = StyleTarget::Item(id(raw));
        assert_eq!(harness.surface.style_of(target), StyleDelta::default(), "item {}", raw);
        assert!(!harness.surface.has_class(target, "brickwork-item"));
        assert!(!harness.surface.has_class(target, "brickwork-hidden"));
    }

    let err = harness.brickwork.relayout(None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precondition);
    Ok(())
}

#[test]
fn test_destroy_drops_pending_steps() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(1, (10.0, 10.0), 300.0));
    harness.init(json!({}))?;
    assert_eq!(harness.brickwork.pending(), 1);
    harness.brickwork.destroy()?;
    assert_eq!(harness.brickwork.run_pending(), 0);
    assert!(!harness.surface.has_class(StyleTarget::Container, "brickwork"));
    Ok(())
}

#[test]
fn test_container_style_is_restored_to_original() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(2, (100.0, 40.0), 300.0));
    let original = StyleDelta {
        width: Some(640.0),
        ..StyleDelta::default()
    };
    harness.surface.apply_style(StyleTarget::Container, &original);

    harness.init(json!({}))?;
    assert_eq!(harness.container_style().height, Some(40.0));
    harness.brickwork.destroy()?;
    assert_eq!(harness.container_style(), original);
    Ok(())
}

#[test]
fn test_calls_by_name() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 40.0), 300.0));
    let err = harness.brickwork.call("shuffle").unwrap_err();
    assert!(matches!(err, BrickworkError::NotInitialized { .. }));

    harness.init(json!({}))?;
    assert!(harness.brickwork.call("shuffle")?.is_some());
    assert!(harness.brickwork.call("reLayout")?.is_some());
    assert!(harness.brickwork.call("reloadItems")?.is_none());
    assert_eq!(
        harness.brickwork.call("_sort").unwrap_err(),
        BrickworkError::ReservedOperation("_sort".to_string())
    );
    assert_eq!(
        harness.brickwork.call("explode").unwrap_err().kind(),
        ErrorKind::Precondition
    );
    assert!(harness.brickwork.call("destroy")?.is_none());
    assert_eq!(harness.brickwork.lifecycle(), Lifecycle::Uninitialized);
    Ok(())
}

#[test]
fn test_initialize_again_merges_and_arranges() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(4, (100.0, 40.0), 300.0));
    harness.init(json!({}))?;
    let options = Options {
        layout_mode: LayoutMode::StraightDown,
        ..Options::default()
    };
    let mut pass = harness.brickwork.initialize(options, Hooks::new(), None)?;

    assert!(pass.is_complete());
    assert_eq!(harness.brickwork.options().layout_mode, LayoutMode::StraightDown);
    assert_position!(harness, 4, (0, 120));
    Ok(())
}

#[test]
fn test_initialize_again_keeps_settings_left_at_default() -> TestResult {
    let mut harness = Harness::new(&tagged_scene());
    harness.init(json!({ "layoutMode": "fitRows", "filter": ".metal" }))?;
    assert_filtered!(harness, [1, 3, 5]);

    let options = Options {
        sort_ascending: false,
        ..Options::default()
    };
    harness.brickwork.initialize(options, Hooks::new(), None)?;

    assert_eq!(harness.brickwork.options().layout_mode, LayoutMode::FitRows);
    assert!(!harness.brickwork.options().sort_ascending);
    assert_filtered!(harness, [5, 3, 1]);
    assert_position!(harness, 5, (0, 0));
    assert_position!(harness, 1, (200, 0));
    Ok(())
}

#[test]
fn test_reinitialize_applies_only_the_patch() -> TestResult {
    let mut harness = Harness::new(&tagged_scene());
    harness.init(json!({ "filter": ".gas" }))?;

    let patch = OptionsPatch::new().with_layout_mode(LayoutMode::StraightDown);
    let mut pass = harness.brickwork.reinitialize(patch, Hooks::new(), None)?;

    assert!(pass.is_complete());
    assert_filtered!(harness, [2, 4, 6]);
    assert_position!(harness, 6, (0, 100));
    Ok(())
}

#[test]
fn test_failed_reinitialize_leaves_hooks_untouched() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 40.0), 300.0));
    harness.init(json!({}))?;

    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let hooks = Hooks::new().on_layout(move |_| counter.set(counter.get() + 1));
    let options = Options {
        sort_by: "nope".to_string(),
        layout_mode: LayoutMode::StraightDown,
        ..Options::default()
    };
    let err = harness.brickwork.initialize(options, hooks, None).unwrap_err();
    assert_eq!(err, BrickworkError::UnknownSortKey("nope".to_string()));

    harness.brickwork.relayout(None)?;
    assert_eq!(runs.get(), 0);
    assert_eq!(harness.brickwork.options().layout_mode, LayoutMode::Masonry);
    Ok(())
}

#[test]
fn test_reinitialize_sorts_by_a_key_it_registers() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(4, (100.0, 40.0), 300.0));
    harness.init(json!({}))?;

    let hooks = Hooks::new().sort_data("weight", |item| SortValue::from(-(item.get() as f64)));
    let options = Options {
        sort_by: "weight".to_string(),
        ..Options::default()
    };
    harness.brickwork.initialize(options, hooks, None)?;

    assert_filtered!(harness, [4, 3, 2, 1]);
    Ok(())
}

#[test]
fn test_configuration_errors_surface_at_parse_time() {
    let err = Options::from_json(r#"{ "layoutMode": "pyramid" }"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    let err = "pyramid".parse::<LayoutMode>().map_err(BrickworkError::from).unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: no such layout mode 'pyramid'");
}

#[test]
fn test_uninitialized_operations_are_no_ops() {
    let mut harness = Harness::new(&uniform_scene(2, (10.0, 10.0), 300.0));
    assert!(harness.brickwork.arrange(None).is_err());
    assert!(harness.brickwork.reload_items().is_err());
    assert!(harness.brickwork.resize().is_err());
    assert!(harness.surface.log().is_empty());
}
