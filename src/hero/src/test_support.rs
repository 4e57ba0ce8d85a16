// src/hero/src/test_support.rs
//! 测试用的引擎与敌人替身（单元测试和 `test-support` 特性共用）

use std::cell::RefCell;

use combat::{Effect, Enemy, GameEngine, PlayerId};
use mockall::mock;

/// 记录所有播放过的特效，附近没有敌人
#[derive(Default)]
pub struct RecordingEngine {
    effects: RefCell<Vec<Effect>>,
}

impl RecordingEngine {
    pub fn played(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    pub fn received(&self, effect: Effect) -> bool {
        self.count(effect) > 0
    }

    pub fn count(&self, effect: Effect) -> usize {
        self.effects.borrow().iter().filter(|e| **e == effect).count()
    }
}

impl GameEngine for RecordingEngine {
    fn play_special_effect(&self, effect: Effect) {
        self.effects.borrow_mut().push(effect);
    }

    fn enemies_near(&self, _player: PlayerId) -> Vec<Box<dyn Enemy>> {
        Vec::new()
    }
}

mock! {
    pub Engine {}
    impl GameEngine for Engine {
        fn play_special_effect(&self, effect: Effect);
        fn enemies_near(&self, player: PlayerId) -> Vec<Box<dyn Enemy>>;
    }
}

mock! {
    pub Foe {}
    impl Enemy for Foe {
        fn take_damage(&mut self, amount: u32);
    }
}
