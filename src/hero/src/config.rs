// src/hero/src/config.rs
use error::GameError;
use serde::{Deserialize, Serialize};

/// 规则常量（默认值与原版一致）
mod constants {
    pub const MAX_CARRYING_CAPACITY: u32 = 1000; // 初始负重上限（千克）
    pub const MAJOR_HEAL_THRESHOLD: u32 = 500; // 超过该治疗量播放大治疗特效
    pub const AREA_DAMAGE: u32 = 100; // 臭气弹对每个敌人的伤害
    pub const MAX_HEALTH: i32 = 100;
}

/// 玩家规则配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub max_carrying_capacity: u32,
    pub major_heal_threshold: u32,
    pub area_damage: u32,
    pub max_health: i32,
    pub starting_health: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_carrying_capacity: constants::MAX_CARRYING_CAPACITY,
            major_heal_threshold: constants::MAJOR_HEAL_THRESHOLD,
            area_damage: constants::AREA_DAMAGE,
            max_health: constants::MAX_HEALTH,
            starting_health: constants::MAX_HEALTH,
        }
    }
}

impl RulesConfig {
    /// 校验配置是否满足玩家状态的不变量
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_health < 0 {
            return Err(GameError::InvalidConfig(format!(
                "max_health must not be negative (got {})",
                self.max_health
            )));
        }
        if self.starting_health > self.max_health {
            return Err(GameError::InvalidConfig(format!(
                "starting_health {} exceeds max_health {}",
                self.starting_health, self.max_health
            )));
        }
        Ok(())
    }
}
