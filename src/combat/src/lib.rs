// src/combat/src/lib.rs
pub mod combat_manager;
pub mod combatant;
pub mod effect;
pub mod engine;


pub use crate::combat_manager::{CombatState, DamageOutcome, resolve_damage};
pub use crate::combatant::Combatant;
pub use crate::effect::Effect;
pub use crate::engine::{Enemy, GameEngine, PlayerId};
