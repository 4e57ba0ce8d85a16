//src/items/src/kind.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 物品种类（决定“使用”时触发的行为）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum ItemKind {
    /// 普通物品，使用时无特殊行为
    #[default]
    Ordinary,
    /// 臭气弹：对附近所有敌人造成伤害
    #[strum(serialize = "Stink Bomb")]
    StinkBomb,
}

impl ItemKind {
    /// 由物品名解析种类，未识别的名称视为普通物品
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// 该种类的规范物品名
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }
}
