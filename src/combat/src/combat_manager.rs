//! Damage resolution against armour.
use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;
use crate::effect::Effect;
use crate::engine::GameEngine;

/// Result of a single incoming hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Armour absorbed the whole hit
    Parried,
    /// Damage that went through armour (may be zero when damage equals armour)
    Hit { dealt: u32 },
}

impl DamageOutcome {
    /// Effect the engine should play for this outcome
    pub fn effect(&self) -> Effect {
        match self {
            DamageOutcome::Parried => Effect::Parry,
            DamageOutcome::Hit { .. } => Effect::Impact,
        }
    }

    pub fn dealt(&self) -> u32 {
        match self {
            DamageOutcome::Parried => 0,
            DamageOutcome::Hit { dealt } => *dealt,
        }
    }
}

/// Parry only when damage is strictly below armour.
pub fn resolve_damage(amount: u32, armour: u32) -> DamageOutcome {
    if amount < armour {
        DamageOutcome::Parried
    } else {
        DamageOutcome::Hit {
            dealt: amount - armour,
        }
    }
}

/// Applies incoming damage to a combatant and reports it to the engine
pub struct CombatState<'a, C: Combatant + ?Sized> {
    combatant: &'a mut C,
    engine: &'a dyn GameEngine,
}

impl<'a, C: Combatant + ?Sized> CombatState<'a, C> {
    pub fn new(combatant: &'a mut C, engine: &'a dyn GameEngine) -> Self {
        Self { combatant, engine }
    }

    /// Take a hit: armour absorbs, the rest comes off health with no floor.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        let outcome = resolve_damage(amount, self.combatant.armour());

        if let DamageOutcome::Hit { dealt } = outcome {
            self.combatant.lose_health(dealt);
        }
        tracing::debug!(
            "Incoming damage {} vs armour {}: {:?} (health now {})",
            amount,
            self.combatant.armour(),
            outcome,
            self.combatant.health()
        );

        self.engine.play_special_effect(outcome.effect());
        outcome
    }

    pub fn health(&self) -> i32 {
        self.combatant.health()
    }

    pub fn armour(&self) -> u32 {
        self.combatant.armour()
    }
}
