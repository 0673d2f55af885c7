use std::collections::BTreeSet;

use super::common::ItemId;

/// Weapons the player carries. Membership is permanent once granted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeSet<ItemId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the item was already carried.
    pub(crate) fn insert(&mut self, item: ItemId) -> bool {
        self.items.insert(item)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_idempotent() {
        let mut inventory = Inventory::new();
        assert!(inventory.insert(ItemId(3)));
        assert!(!inventory.insert(ItemId(3)));
        assert!(inventory.contains(ItemId(3)));
        assert_eq!(inventory.len(), 1);
    }
}
