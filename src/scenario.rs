//! 场景回放：从 JSON 读取一串玩家行动，在记录型引擎上执行并生成报告。

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use combat::{DamageOutcome, Effect, Enemy, GameEngine, PlayerId};
use error::GameError;
use hero::{Pickup, Player, RulesConfig};
use items::Item;
use serde::{Deserialize, Serialize};

/// 场景脚本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: RulesConfig,
    #[serde(default)]
    pub player_id: PlayerId,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    pub actions: Vec<Action>,
}

/// 场景中的敌人（全部视为在玩家附近）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    pub health: i32,
}

/// 玩家行动
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    PickUp { item: Item },
    Use { item: Item },
    TakeDamage { amount: u32 },
    SetHealth { health: i32 },
}

impl Scenario {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, GameError> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.config.validate()?;

        if self.actions.is_empty() {
            return Err(GameError::InvalidScenario("no actions".into()));
        }

        let mut names = HashSet::new();
        for enemy in &self.enemies {
            if !names.insert(enemy.name.as_str()) {
                return Err(GameError::InvalidScenario(format!(
                    "duplicate enemy name '{}'",
                    enemy.name
                )));
            }
        }
        Ok(())
    }
}

/* ================== 记录型引擎 ================== */

/// 回放用敌人
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaEnemy {
    pub name: String,
    pub health: i32,
}

struct EnemyHandle(Rc<RefCell<ArenaEnemy>>);

impl Enemy for EnemyHandle {
    fn take_damage(&mut self, amount: u32) {
        let mut enemy = self.0.borrow_mut();
        enemy.health = enemy.health.saturating_sub_unsigned(amount);
        tracing::info!("{} takes {} damage (health {})", enemy.name, amount, enemy.health);
    }
}

/// 记录播放过的特效；所有敌人都算作“附近”
#[derive(Debug, Default)]
pub struct ArenaEngine {
    effects: RefCell<Vec<Effect>>,
    enemies: Vec<Rc<RefCell<ArenaEnemy>>>,
}

impl ArenaEngine {
    pub fn new(enemies: &[EnemySpec]) -> Self {
        Self {
            effects: RefCell::new(Vec::new()),
            enemies: enemies
                .iter()
                .map(|spec| {
                    Rc::new(RefCell::new(ArenaEnemy {
                        name: spec.name.clone(),
                        health: spec.health,
                    }))
                })
                .collect(),
        }
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    pub fn enemies(&self) -> Vec<ArenaEnemy> {
        self.enemies.iter().map(|e| e.borrow().clone()).collect()
    }
}

impl GameEngine for ArenaEngine {
    fn play_special_effect(&self, effect: Effect) {
        tracing::info!("Playing effect {}", effect);
        self.effects.borrow_mut().push(effect);
    }

    fn enemies_near(&self, player: PlayerId) -> Vec<Box<dyn Enemy>> {
        tracing::debug!("{} enemies near {}", self.enemies.len(), player);
        self.enemies
            .iter()
            .map(|enemy| Box::new(EnemyHandle(Rc::clone(enemy))) as Box<dyn Enemy>)
            .collect()
    }
}

/* ================== 回放报告 ================== */

/// 单步行动的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepReport {
    Stored { item: String },
    Consumed { item: String, healed: i32 },
    Rejected { item: String, reason: String },
    Used { item: String },
    Damaged { amount: u32, result: DamageOutcome },
    HealthSet { health: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub health: i32,
    pub max_health: i32,
    pub armour: u32,
    pub carrying_capacity: u32,
    pub inventory: Vec<String>,
    pub steps: Vec<StepReport>,
    pub effects: Vec<Effect>,
    pub enemies: Vec<ArenaEnemy>,
}

/// 依次执行场景中的行动
pub fn replay(scenario: &Scenario) -> ReplayReport {
    let engine = ArenaEngine::new(&scenario.enemies);
    let mut player = Player::with_config(scenario.player_id, engine, scenario.config.clone());
    let mut steps = Vec::with_capacity(scenario.actions.len());

    for action in &scenario.actions {
        let step = match action {
            Action::PickUp { item } => {
                let name = item.name.clone();
                match player.try_pick_up_item(item.clone()) {
                    Ok(Pickup::Stored) => StepReport::Stored { item: name },
                    Ok(Pickup::Consumed { healed }) => StepReport::Consumed { item: name, healed },
                    Err(reason) => StepReport::Rejected {
                        item: name,
                        reason: reason.to_string(),
                    },
                }
            }
            Action::Use { item } => {
                player.use_item(item);
                StepReport::Used {
                    item: item.name.clone(),
                }
            }
            Action::TakeDamage { amount } => StepReport::Damaged {
                amount: *amount,
                result: player.take_damage(*amount),
            },
            Action::SetHealth { health } => {
                player.state_mut().set_health(*health);
                StepReport::HealthSet {
                    health: player.state().health(),
                }
            }
        };
        steps.push(step);
    }

    let state = player.state();
    ReplayReport {
        health: state.health(),
        max_health: state.max_health(),
        armour: state.armour(),
        carrying_capacity: state.carrying_capacity(),
        inventory: state.inventory().iter().map(|i| i.name.clone()).collect(),
        steps,
        effects: player.engine().effects(),
        enemies: player.engine().enemies(),
    }
}
