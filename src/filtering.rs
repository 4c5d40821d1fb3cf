//! Partitioning items into visible and hidden sets.

use crate::collection::{ItemCollection, Visibility};
use crate::config::Filter;
use crate::style_queue::StyleQueue;
use brickwork_traits::{SelectorEngine, Surface};
use brickwork_types::{ItemId, StyleDelta, StyleTarget};

/// Styles and class used for filter transitions.
pub struct FilterStyles<'a> {
    pub hidden: &'a StyleDelta,
    pub visible: &'a StyleDelta,
    pub hidden_class: &'a str,
}

/// Applies `filter` to `ids` and returns the matching ones in the given order.
///
/// Hidden items that now match are queued with the visible style, visible
/// items that no longer match with the hidden style. Without a filter nothing
/// is queued and every id matches.
pub fn apply_filter(
    filter: Option<&Filter>,
    ids: &[ItemId],
    items: &mut ItemCollection,
    selectors: &dyn SelectorEngine,
    surface: &dyn Surface,
    queue: &mut StyleQueue,
    styles: &FilterStyles<'_>,
) -> Vec<ItemId> {
    let Some(filter) = filter else {
        return ids.to_vec();
    };

    let mut matching = Vec::with_capacity(ids.len());
    let mut to_show = Vec::new();
    let mut to_hide = Vec::new();
    for id in ids {
        let hidden = items.visibility(*id) == Some(Visibility::Hidden);
        let matches = filter.matches(*id, selectors);
        match (hidden, matches) {
            (true, true) => to_show.push(*id),
            (false, false) => to_hide.push(*id),
            _ => {}
        }
        if matches {
            matching.push(*id);
        }
    }

    if !to_hide.is_empty() {
        log::debug!("filter hides {} items", to_hide.len());
    }
    for id in &to_hide {
        items.set_visibility(*id, Visibility::Hidden);
        surface.add_class(StyleTarget::Item(*id), styles.hidden_class);
    }
    queue.enqueue_items(&to_hide, styles.hidden.clone());
    queue.enqueue_items(&to_show, styles.visible.clone());
    for id in &to_show {
        items.set_visibility(*id, Visibility::Visible);
        surface.remove_class(StyleTarget::Item(*id), styles.hidden_class);
    }

    matching
}
