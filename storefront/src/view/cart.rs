//! Cart selection

use shared::models::ProductId;
use std::collections::BTreeSet;

/// Set of product ids the user has put in the cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSelection {
    ids: BTreeSet<ProductId>,
}

impl CartSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, add it otherwise. Returns whether it is now in the cart.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id)
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Badge count
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids, ascending
    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }
}
