//src/combat/src/engine.rs
//! 外部协作者接口：特效播放、附近敌人查询、敌人受伤。
//!
//! 规则核心只通过这些 trait 与引擎交互，渲染与敌人AI都不在本仓库内实现。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effect::Effect;

/// 玩家标识（引擎据此判断“附近”）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// 游戏引擎能力
pub trait GameEngine {
    /// 播放特效（无返回、无错误）
    fn play_special_effect(&self, effect: Effect);

    /// 查询玩家附近的敌人（只读查询，返回可受伤的敌人句柄）
    fn enemies_near(&self, player: PlayerId) -> Vec<Box<dyn Enemy>>;
}

/// 敌人能力：承受伤害，状态由敌人自身维护
pub trait Enemy {
    fn take_damage(&mut self, amount: u32);
}
