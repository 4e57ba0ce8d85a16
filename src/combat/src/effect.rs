//src/combat/src/effect.rs
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// 交给引擎播放的特效（封闭枚举，字符串标识保持稳定）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Effect {
    /// 护甲完全吸收了攻击
    #[strum(serialize = "parry")]
    #[serde(rename = "parry")]
    Parry,
    /// 受到伤害
    #[strum(serialize = "lots_of_gore")]
    #[serde(rename = "lots_of_gore")]
    Impact,
    /// 拾取稀有物品
    #[strum(serialize = "cool_swirly_particles")]
    #[serde(rename = "cool_swirly_particles")]
    MinorRare,
    /// 拾取稀有且唯一的物品
    #[strum(serialize = "blue_swirly")]
    #[serde(rename = "blue_swirly")]
    MajorRareUnique,
    /// 大量治疗
    #[strum(serialize = "green_swirly")]
    #[serde(rename = "green_swirly")]
    MajorHeal,
}

impl Effect {
    /// 引擎侧使用的稳定标识
    pub fn token(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tokens_are_stable() {
        assert_eq!(Effect::Parry.token(), "parry");
        assert_eq!(Effect::Impact.token(), "lots_of_gore");
        assert_eq!(Effect::MinorRare.token(), "cool_swirly_particles");
        assert_eq!(Effect::MajorRareUnique.token(), "blue_swirly");
        assert_eq!(Effect::MajorHeal.token(), "green_swirly");
    }

    #[test]
    fn test_token_parses_back() {
        for effect in Effect::iter() {
            assert_eq!(effect.token().parse::<Effect>(), Ok(effect));
            assert_eq!(effect.to_string(), effect.token());
        }
    }
}
