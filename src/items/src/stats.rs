//src/items/src/stats.rs
//! 背包聚合计算（纯函数，无副作用）

use crate::{Item, ItemId};

/// 背包内物品总重量（饱和加法，不会溢出）
pub fn inventory_weight(inventory: &[Item]) -> u32 {
    inventory
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.weight))
}

/// 背包内物品提供的护甲总和，超过 `u32::MAX` 时停在 `u32::MAX`
pub fn armour_total(inventory: &[Item]) -> u32 {
    inventory
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.armour))
}

/// 背包中是否已有相同 id 的物品
pub fn contains_id(inventory: &[Item], id: ItemId) -> bool {
    inventory.iter().any(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemBuilder;

    fn sample() -> Vec<Item> {
        vec![
            ItemBuilder::new().with_id(1).with_weight(10).with_armour(3).build(),
            ItemBuilder::new().with_id(2).with_weight(25).build(),
            ItemBuilder::new().with_id(3).with_weight(5).with_armour(40).build(),
        ]
    }

    #[test]
    fn test_empty_inventory() {
        assert_eq!(inventory_weight(&[]), 0);
        assert_eq!(armour_total(&[]), 0);
        assert!(!contains_id(&[], 1));
    }

    #[test]
    fn test_sums() {
        let inventory = sample();
        assert_eq!(inventory_weight(&inventory), 40);
        assert_eq!(armour_total(&inventory), 43);
    }

    #[test]
    fn test_armour_total_saturates() {
        let inventory = vec![
            ItemBuilder::new().with_id(1).with_armour(u32::MAX).build(),
            ItemBuilder::new().with_id(2).with_armour(1).build(),
        ];
        assert_eq!(armour_total(&inventory), u32::MAX);
    }

    #[test]
    fn test_contains_id() {
        let inventory = sample();
        assert!(contains_id(&inventory, 2));
        assert!(!contains_id(&inventory, 4));
    }
}
