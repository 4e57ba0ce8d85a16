// src/combat/src/combatant.rs

/// 表示可以承受伤害的活体
pub trait Combatant {
    /// 获取当前生命值（可能为负）
    fn health(&self) -> i32;

    /// 获取护甲值
    fn armour(&self) -> u32;

    /// 扣除生命值，不设下限
    fn lose_health(&mut self, amount: u32);

    /// 是否存活（规则核心不强制死亡，由调用方决定）
    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}
