mod common;

use brickwork::{
    ItemId, NO_TRANSITION_CLASS, REVEAL_DELAY, Size, StyleDelta, StyleTarget, Surface,
};
use common::fixtures::*;
use common::{Harness, TestResult, id, ids};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn visible_style() -> StyleDelta {
    StyleDelta::new().opacity(1.0).scale(1.0)
}

fn hidden_style() -> StyleDelta {
    StyleDelta::new().opacity(0.0).scale(0.001)
}

fn create(harness: &Harness, raw: &[u64], tags: &[&str]) {
    for r in raw {
        harness.surface.create_item(id(*r), Size::new(100.0, 50.0), tags);
    }
}

#[tokio::test(start_paused = true)]
async fn test_insert_reveals_each_item_once() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    harness.brickwork.run_pending();
    create(&harness, &[4, 5], &[]);

    let mut pass = harness.brickwork.insert(&ids(&[4, 5]), None)?;
    assert_eq!(harness.brickwork.items().len(), 5);
    assert!(harness.surface.is_attached(id(4)));

    harness.brickwork.run_pending();
    assert_filtered!(harness, [1, 2, 3, 4, 5]);
    assert!(harness.surface.has_class(StyleTarget::Item(id(4)), NO_TRANSITION_CLASS));
    assert_eq!(harness.applications(4, &hidden_style()), 1);
    assert_eq!(harness.applications(4, &visible_style()), 0);
    assert!(!pass.is_complete());

    tokio::time::advance(REVEAL_DELAY).await;
    harness.brickwork.run_pending();
    for raw in [4, 5] {
        assert_eq!(harness.applications(raw, &visible_style()), 1, "item {}", raw);
        assert!(!harness.surface.has_class(StyleTarget::Item(id(raw)), NO_TRANSITION_CLASS));
    }
    assert_position!(harness, 4, (0, 50));
    assert_position!(harness, 5, (100, 50));
    assert!(pass.is_complete());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_insert_respects_active_filter() -> TestResult {
    let mut harness = Harness::new(&tagged_scene());
    harness.init(json!({ "filter": ".metal" }))?;
    create(&harness, &[7], &["metal"]);
    create(&harness, &[8], &["gas"]);

    let pass = harness.brickwork.insert(&ids(&[7, 8]), None)?;
    harness.brickwork.settle().await;

    let laid_out = pass.await.unwrap_or_default();
    assert_eq!(laid_out, ids(&[7]));
    assert_filtered!(harness, [1, 3, 5, 7]);
    assert!(harness.surface.has_class(StyleTarget::Item(id(8)), "brickwork-hidden"));
    assert_eq!(harness.applications(8, &visible_style()), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_insert_callback_runs_after_reveal() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(1, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    create(&harness, &[2], &[]);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    harness
        .brickwork
        .insert(
            &ids(&[2]),
            Some(Box::new(move |items: &[ItemId]| {
                sink.borrow_mut().extend_from_slice(items)
            })),
        )?;

    harness.brickwork.run_pending();
    assert!(seen.borrow().is_empty());
    harness.brickwork.settle().await;
    assert_eq!(*seen.borrow(), ids(&[2]));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_appended_lays_out_only_new_items() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(2, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    for raw in [3, 4] {
        harness.surface.add_item(id(raw), Size::new(100.0, 50.0), &[]);
    }
    harness.surface.clear_log();

    let pass = harness.brickwork.appended(&ids(&[3, 4]), None)?;
    // earlier items keep their positions
    assert!(harness.surface.log_for(StyleTarget::Item(id(1))).is_empty());
    assert_position!(harness, 3, (200, 0));
    assert_position!(harness, 4, (0, 50));

    tokio::time::advance(Duration::from_millis(5)).await;
    harness.brickwork.run_pending();
    assert_eq!(harness.applications(3, &visible_style()), 0);

    harness.brickwork.settle().await;
    assert_eq!(harness.applications(3, &visible_style()), 1);
    assert_eq!(pass.await, Some(ids(&[3, 4])));
    Ok(())
}

#[test]
fn test_remove_visible_detaches_after_pass() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    harness.surface.clear_log();

    let mut pass = harness.brickwork.remove(&ids(&[2]), None)?;
    assert!(pass.is_complete());
    assert_eq!(harness.surface.detached(), ids(&[2]));
    assert_eq!(harness.applications(2, &hidden_style()), 1);
    assert_filtered!(harness, [1, 3]);
    assert_position!(harness, 3, (100, 0));
    Ok(())
}

#[test]
fn test_remove_waits_for_transition() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    harness.surface.set_transition_duration(Duration::from_millis(400));

    let mut pass = harness.brickwork.remove(&ids(&[1]), None)?;
    assert!(!pass.is_complete());
    assert!(harness.surface.is_attached(id(1)));

    harness.surface.finish_transitions();
    assert!(pass.is_complete());
    assert!(!harness.surface.is_attached(id(1)));
    Ok(())
}

#[test]
fn test_remove_hidden_detaches_immediately() -> TestResult {
    let mut harness = Harness::new(&tagged_scene());
    harness.init(json!({ "filter": ".rare" }))?;
    harness.surface.set_transition_duration(Duration::from_millis(400));
    harness.surface.clear_log();

    let mut pass = harness.brickwork.remove(&ids(&[5, 6]), None)?;
    assert!(pass.is_complete());
    assert_eq!(harness.surface.detached(), ids(&[5, 6]));
    // no layout pass ran
    assert!(harness.surface.log().is_empty());
    assert_eq!(harness.brickwork.items().len(), 4);
    Ok(())
}

#[test]
fn test_remove_unknown_items_skips_the_pass() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    harness.surface.set_transition_duration(Duration::from_millis(400));
    harness.surface.clear_log();

    let mut pass = harness.brickwork.remove(&ids(&[42, 43]), None)?;
    assert!(pass.is_complete());
    assert_eq!(harness.surface.pending_transitions(), 0);
    assert!(harness.surface.log().is_empty());
    assert_eq!(harness.brickwork.items().len(), 3);
    Ok(())
}

#[test]
fn test_reload_regenerates_original_order() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(3, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    harness.surface.detach(&ids(&[1]));
    harness.surface.add_item(id(9), Size::new(100.0, 50.0), &[]);

    harness.brickwork.reload_items()?;
    assert_eq!(harness.brickwork.items(), ids(&[2, 3, 9]).as_slice());
    assert_filtered!(harness, [2, 3]);

    harness.brickwork.arrange(None)?;
    assert_filtered!(harness, [2, 3, 9]);
    assert_position!(harness, 9, (200, 0));
    Ok(())
}

#[test]
fn test_add_items_skips_layout() -> TestResult {
    let mut harness = Harness::new(&uniform_scene(1, (100.0, 50.0), 300.0));
    harness.init(json!({}))?;
    harness.surface.add_item(id(2), Size::new(100.0, 50.0), &[]);

    let added = harness.brickwork.add_items(&ids(&[1, 2]))?;
    assert_eq!(added, ids(&[2]));
    assert_eq!(harness.brickwork.items().len(), 2);
    assert_filtered!(harness, [1]);
    assert_eq!(harness.surface.style_of(StyleTarget::Item(id(2))).translate, None);
    Ok(())
}
