// src/hero/src/inventory.rs
use combat::{Effect, GameEngine};
use items::{Item, ItemId};
use thiserror::Error;

use crate::config::RulesConfig;
use crate::state::PlayerState;
use crate::usage::{UseContext, UseTable};

/// 拾取被拒绝的原因（正常的游戏结果，不是故障）
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickupError {
    #[error("物品过重: 已携带{carried}kg + {item_weight}kg 超过上限{capacity}kg")]
    Overweight {
        carried: u32,
        item_weight: u32,
        capacity: u32,
    },
    #[error("已携带唯一物品 #{0}")]
    DuplicateUnique(ItemId),
}

/// 成功拾取的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    /// 治疗物品被立即使用，不进入背包
    Consumed { healed: i32 },
    /// 物品放入背包
    Stored,
}

/// 背包管理器（借用玩家状态的短生命周期视图）
pub struct InventoryManager<'a> {
    state: &'a mut PlayerState,
    engine: &'a dyn GameEngine,
    config: &'a RulesConfig,
    uses: &'a UseTable,
}

impl<'a> InventoryManager<'a> {
    pub fn new(
        state: &'a mut PlayerState,
        engine: &'a dyn GameEngine,
        config: &'a RulesConfig,
        uses: &'a UseTable,
    ) -> Self {
        Self {
            state,
            engine,
            config,
            uses,
        }
    }

    /* ================== 拾取 ================== */
    /// 拾取物品，返回是否被使用或放入背包
    pub fn pick_up_item(&mut self, item: Item) -> bool {
        self.try_pick_up_item(item).is_ok()
    }

    /// 拾取物品并给出详细结果
    pub fn try_pick_up_item(&mut self, item: Item) -> Result<Pickup, PickupError> {
        let carried = self.state.inventory_weight();
        let capacity = self.state.carrying_capacity();
        if carried.saturating_add(item.weight) > capacity {
            tracing::debug!("Rejected {}: {}kg carried, capacity {}kg", item, carried, capacity);
            return Err(PickupError::Overweight {
                carried,
                item_weight: item.weight,
                capacity,
            });
        }

        if item.unique && self.state.item_exists_in_inventory(item.id) {
            tracing::debug!("Rejected {}: already carried", item);
            return Err(PickupError::DuplicateUnique(item.id));
        }

        // 治疗物品直接使用，不进入背包
        if item.is_consumable() {
            let healed = self.state.heal(item.heal);
            if item.heal > self.config.major_heal_threshold {
                self.engine.play_special_effect(Effect::MajorHeal);
            }
            tracing::debug!(
                "Consumed {}: healed {} (health {}/{})",
                item,
                healed,
                self.state.health(),
                self.state.max_health()
            );
            return Ok(Pickup::Consumed { healed });
        }

        if item.reduces_capacity {
            self.state.halve_carrying_capacity();
            tracing::debug!(
                "{} halves carrying capacity to {}kg",
                item,
                self.state.carrying_capacity()
            );
        }

        if let Some(effect) = pickup_effect(&item) {
            self.engine.play_special_effect(effect);
        }

        tracing::debug!("Stored {}", item);
        self.state.store(item);
        Ok(Pickup::Stored)
    }

    /* ================== 使用 ================== */
    /// 使用物品：按物品种类查表执行，无对应行为时什么也不做
    pub fn use_item(&self, item: &Item) {
        let ctx = UseContext {
            item,
            player: &*self.state,
            engine: self.engine,
            config: self.config,
        };
        if !self.uses.dispatch(&ctx) {
            tracing::debug!("{} has no use behaviour", item);
        }
    }

    /* ================== 查询方法 ================== */
    pub fn calculate_inventory_weight(&self) -> u32 {
        self.state.inventory_weight()
    }

    pub fn calculate_armour_total(&self) -> u32 {
        self.state.armour_total()
    }

    pub fn item_exists_in_inventory(&self, id: ItemId) -> bool {
        self.state.item_exists_in_inventory(id)
    }

    pub fn inventory(&self) -> &[Item] {
        self.state.inventory()
    }

    pub fn carrying_capacity(&self) -> u32 {
        self.state.carrying_capacity()
    }
}

/// 拾取稀有物品的特效；稀有且唯一时只播放后者
fn pickup_effect(item: &Item) -> Option<Effect> {
    match (item.rare, item.unique) {
        (true, true) => Some(Effect::MajorRareUnique),
        (true, false) => Some(Effect::MinorRare),
        _ => None,
    }
}
