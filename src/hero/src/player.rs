// src/hero/src/player.rs
use combat::{CombatState, DamageOutcome, GameEngine, PlayerId};
use items::{Item, ItemKind};

use crate::config::RulesConfig;
use crate::inventory::{InventoryManager, Pickup, PickupError};
use crate::state::PlayerState;
use crate::usage::{UseHandler, UseTable};

/// 玩家：持有唯一的玩家状态与引擎，按需借出背包与战斗组件
pub struct Player<E: GameEngine> {
    state: PlayerState,
    engine: E,
    config: RulesConfig,
    uses: UseTable,
}

impl<E: GameEngine> Player<E> {
    /// 使用默认规则创建玩家
    pub fn new(id: PlayerId, engine: E) -> Self {
        Self::with_config(id, engine, RulesConfig::default())
    }

    pub fn with_config(id: PlayerId, engine: E, config: RulesConfig) -> Self {
        Self {
            state: PlayerState::new(id, &config),
            engine,
            config,
            uses: UseTable::default(),
        }
    }

    /* ================== 组件视图 ================== */
    pub fn inventory(&mut self) -> InventoryManager<'_> {
        InventoryManager::new(&mut self.state, &self.engine, &self.config, &self.uses)
    }

    pub fn combat(&mut self) -> CombatState<'_, PlayerState> {
        CombatState::new(&mut self.state, &self.engine)
    }

    /* ================== 玩家行动 ================== */
    pub fn pick_up_item(&mut self, item: Item) -> bool {
        self.inventory().pick_up_item(item)
    }

    pub fn try_pick_up_item(&mut self, item: Item) -> Result<Pickup, PickupError> {
        self.inventory().try_pick_up_item(item)
    }

    pub fn use_item(&mut self, item: &Item) {
        self.inventory().use_item(item)
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.combat().take_damage(amount)
    }

    /// 注册物品使用行为
    pub fn register_use(&mut self, kind: ItemKind, handler: UseHandler) -> Option<UseHandler> {
        self.uses.register(kind, handler)
    }

    /* ================== 获取方法 ================== */
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}
