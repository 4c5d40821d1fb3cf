use brickwork_types::ItemId;

/// Matches selector strings against items.
pub trait SelectorEngine {
    fn matches(&self, id: ItemId, selector: &str) -> bool;

    /// Items among `candidates` that match `selector`. Hosts with nested
    /// elements may also return matching descendants.
    fn select(&self, candidates: &[ItemId], selector: &str) -> Vec<ItemId> {
        candidates
            .iter()
            .copied()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }
}
