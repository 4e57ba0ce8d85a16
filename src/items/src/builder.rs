//src/items/src/builder.rs
use crate::{Item, ItemId};

/// 物品构建器（测试与场景脚本使用）
///
/// 默认值：id 0，名称 "Item"，其余属性为零或 false。
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: Item,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            item: Item::new(0, "Item"),
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.item.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.item.name = name.to_string();
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.item.weight = weight;
        self
    }

    pub fn with_armour(mut self, armour: u32) -> Self {
        self.item.armour = armour;
        self
    }

    pub fn with_heal(mut self, heal: u32) -> Self {
        self.item.heal = heal;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.item.unique = unique;
        self
    }

    pub fn rare(mut self, rare: bool) -> Self {
        self.item.rare = rare;
        self
    }

    pub fn reduces_capacity(mut self, reduces: bool) -> Self {
        self.item.reduces_capacity = reduces;
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

impl From<ItemBuilder> for Item {
    fn from(builder: ItemBuilder) -> Self {
        builder.build()
    }
}
