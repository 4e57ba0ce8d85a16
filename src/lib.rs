//! 角色扮演游戏玩家规则引擎：背包拾取、物品使用与受伤结算。

pub mod scenario;

pub use combat::{CombatState, Combatant, DamageOutcome, Effect, Enemy, GameEngine, PlayerId};
pub use error::{GameError, handle_error};
pub use hero::{
    InventoryManager, Pickup, PickupError, Player, PlayerState, RulesConfig, UseContext,
    UseHandler, UseTable,
};
pub use items::{Item, ItemBuilder, ItemId, ItemKind};
