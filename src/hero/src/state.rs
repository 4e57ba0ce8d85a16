// src/hero/src/state.rs
use combat::{Combatant, PlayerId};
use items::{Item, ItemId, stats};
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;

/// 玩家状态（生命、护甲、负重与背包的唯一来源）
///
/// 背包与战斗组件都借用同一份状态，因此生命值和护甲不会出现两套副本。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    id: PlayerId,
    health: i32,
    max_health: i32,
    armour: u32,            // 由背包物品推导
    carrying_capacity: u32, // 当前负重上限
    inventory: Vec<Item>,   // 按拾取顺序
}

impl PlayerState {
    pub fn new(id: PlayerId, config: &RulesConfig) -> Self {
        let max_health = config.max_health.max(0);
        Self {
            id,
            health: config.starting_health.min(max_health),
            max_health,
            armour: 0,
            carrying_capacity: config.max_carrying_capacity,
            inventory: Vec::new(),
        }
    }

    /* ================== 获取方法 ================== */
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn armour(&self) -> u32 {
        self.armour
    }

    pub fn carrying_capacity(&self) -> u32 {
        self.carrying_capacity
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /* ================== 生命值 ================== */
    /// 设置生命值，超出上限时截断
    pub fn set_health(&mut self, health: i32) {
        self.health = health.min(self.max_health);
    }

    /// 设置生命上限（负数视为0），当前生命随之截断
    pub fn set_max_health(&mut self, max_health: i32) {
        self.max_health = max_health.max(0);
        self.health = self.health.min(self.max_health);
    }

    /// 治疗并返回实际恢复量
    pub fn heal(&mut self, amount: u32) -> i32 {
        let before = self.health;
        self.health = self
            .health
            .saturating_add_unsigned(amount)
            .min(self.max_health);
        self.health - before
    }

    /* ================== 聚合查询 ================== */
    pub fn inventory_weight(&self) -> u32 {
        stats::inventory_weight(&self.inventory)
    }

    pub fn armour_total(&self) -> u32 {
        stats::armour_total(&self.inventory)
    }

    pub fn item_exists_in_inventory(&self, id: ItemId) -> bool {
        stats::contains_id(&self.inventory, id)
    }

    /* ================== 背包修改（仅限本crate） ================== */
    /// 负重上限减半（向下取整），可重复叠加
    pub(crate) fn halve_carrying_capacity(&mut self) {
        self.carrying_capacity /= 2;
    }

    /// 放入物品并完整重算护甲
    pub(crate) fn store(&mut self, item: Item) {
        self.inventory.push(item);
        self.armour = self.armour_total();
    }
}

impl Combatant for PlayerState {
    fn health(&self) -> i32 {
        self.health
    }

    fn armour(&self) -> u32 {
        self.armour
    }

    fn lose_health(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::ItemBuilder;
    use pretty_assertions::assert_eq;

    fn state() -> PlayerState {
        PlayerState::new(PlayerId(1), &RulesConfig::default())
    }

    #[test]
    fn test_new_state() {
        let state = state();
        assert_eq!(state.health(), 100);
        assert_eq!(state.max_health(), 100);
        assert_eq!(state.armour(), 0);
        assert_eq!(state.carrying_capacity(), 1000);
        assert!(state.inventory().is_empty());
    }

    #[test]
    fn test_set_health_clamps_to_max() {
        let mut state = state();
        state.set_health(150);
        assert_eq!(state.health(), 100);

        state.set_max_health(40);
        assert_eq!(state.health(), 40);
    }

    #[test]
    fn test_heal_reports_actual_amount() {
        let mut state = state();
        state.set_max_health(50);
        state.set_health(10);

        assert_eq!(state.heal(100), 40);
        assert_eq!(state.health(), 50);
        assert_eq!(state.heal(5), 0);
    }

    #[test]
    fn test_store_recomputes_armour() {
        let mut state = state();
        state.store(ItemBuilder::new().with_id(1).with_armour(30).build());
        state.store(ItemBuilder::new().with_id(2).with_armour(12).build());

        assert_eq!(state.armour(), 42);
        assert_eq!(state.armour(), state.armour_total());
        assert!(state.item_exists_in_inventory(2));
    }

    #[test]
    fn test_halving_truncates_and_compounds() {
        let mut state = PlayerState::new(
            PlayerId(1),
            &RulesConfig {
                max_carrying_capacity: 501,
                ..RulesConfig::default()
            },
        );
        state.halve_carrying_capacity();
        assert_eq!(state.carrying_capacity(), 250);
        state.halve_carrying_capacity();
        assert_eq!(state.carrying_capacity(), 125);
    }

    #[test]
    fn test_lose_health_goes_negative() {
        let mut state = state();
        state.lose_health(130);
        assert_eq!(state.health(), -30);
        assert!(!state.is_alive());
    }
}
