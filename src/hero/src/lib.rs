// src/hero/src/lib.rs
//! 玩家规则核心：背包拾取/使用与受伤结算。
//!
//! [`PlayerState`] 是唯一的状态来源；[`InventoryManager`] 和
//! [`combat::CombatState`] 都只是借用它的视图，由 [`Player`] 借出。

mod config;
mod inventory;
mod player;
mod state;
mod usage;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// 重新导出主要类型
pub use self::{
    config::RulesConfig,
    inventory::{InventoryManager, Pickup, PickupError},
    player::Player,
    state::PlayerState,
    usage::{UseContext, UseHandler, UseTable, area_damage},
};
