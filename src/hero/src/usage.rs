// src/hero/src/usage.rs
//! 物品使用行为表：物品种类 → 行为函数。
//!
//! 新的可使用物品只需 `register` 一个处理函数，不需要修改分派代码。

use std::collections::HashMap;
use std::fmt;

use combat::GameEngine;
use items::{Item, ItemKind};

use crate::config::RulesConfig;
use crate::state::PlayerState;

/// 使用物品时传给处理函数的上下文
pub struct UseContext<'a> {
    pub item: &'a Item,
    pub player: &'a PlayerState,
    pub engine: &'a dyn GameEngine,
    pub config: &'a RulesConfig,
}

/// 物品使用处理函数
pub type UseHandler = fn(&UseContext<'_>);

/// 物品种类到使用行为的映射
#[derive(Clone)]
pub struct UseTable {
    handlers: HashMap<ItemKind, UseHandler>,
}

impl Default for UseTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(ItemKind::StinkBomb, area_damage);
        table
    }
}

impl fmt::Debug for UseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseTable")
            .field("kinds", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl UseTable {
    /// 不含任何行为的空表
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// 注册（或替换）某种物品的使用行为，返回被替换的旧行为
    pub fn register(&mut self, kind: ItemKind, handler: UseHandler) -> Option<UseHandler> {
        self.handlers.insert(kind, handler)
    }

    pub fn handler(&self, kind: ItemKind) -> Option<UseHandler> {
        self.handlers.get(&kind).copied()
    }

    pub fn is_usable(&self, kind: ItemKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// 按物品种类分派，返回是否执行了行为
    pub fn dispatch(&self, ctx: &UseContext<'_>) -> bool {
        match self.handler(ctx.item.kind()) {
            Some(handler) => {
                handler(ctx);
                true
            }
            None => false,
        }
    }
}

/// 范围伤害：玩家附近的每个敌人受到固定伤害
pub fn area_damage(ctx: &UseContext<'_>) {
    let enemies = ctx.engine.enemies_near(ctx.player.id());
    tracing::debug!(
        "{} hits {} nearby enemies for {}",
        ctx.item,
        enemies.len(),
        ctx.config.area_damage
    );
    for mut enemy in enemies {
        enemy.take_damage(ctx.config.area_damage);
    }
}
