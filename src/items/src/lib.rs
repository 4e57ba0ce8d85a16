//src/items/src/lib.rs
use serde::{Deserialize, Serialize};

pub use crate::builder::ItemBuilder;
pub use crate::kind::ItemKind;

pub mod builder;
pub mod kind;
pub mod stats;

/// 物品唯一标识（唯一物品的判重键）
pub type ItemId = u32;

/// 基础物品结构（不可变值，按 `id` 区分）
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub weight: u32, // 重量（千克）
    #[serde(default)]
    pub armour: u32, // 携带时提供的护甲
    #[serde(default)]
    pub heal: u32, // >0 表示消耗品，拾取即使用
    #[serde(default)]
    pub unique: bool, // 同一 id 最多携带一件
    #[serde(default)]
    pub rare: bool, // 拾取时播放稀有特效
    #[serde(default)]
    pub reduces_capacity: bool, // 拾取后负重上限减半
}

impl Item {
    pub fn new(id: ItemId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            weight: 0,
            armour: 0,
            heal: 0,
            unique: false,
            rare: false,
            reduces_capacity: false,
        }
    }

    /// 是否为消耗品（治疗物品不会进入背包）
    pub fn is_consumable(&self) -> bool {
        self.heal > 0
    }

    /// 根据名称识别物品种类
    pub fn kind(&self) -> ItemKind {
        ItemKind::from_name(&self.name)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_consumable_only_when_heal_positive() {
        let mut item = Item::new(1, "Bread");
        assert!(!item.is_consumable());

        item.heal = 1;
        assert!(item.is_consumable());
    }

    #[test]
    fn test_kind_follows_name() {
        assert_eq!(Item::new(7, "Stink Bomb").kind(), ItemKind::StinkBomb);
        assert_eq!(Item::new(7, "Longsword").kind(), ItemKind::Ordinary);
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let item: Item = serde_json::from_str(r#"{"id": 3, "name": "Helmet", "armour": 12}"#)
            .expect("item json");

        assert_eq!(item.armour, 12);
        assert_eq!(item.weight, 0);
        assert!(!item.unique);
        assert!(!item.reduces_capacity);
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::new(42, "Amulet").to_string(), "Amulet (#42)");
    }
}
