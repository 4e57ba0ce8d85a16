#![allow(dead_code)]

//! Shared fixtures for the player rules integration tests.

pub use hero::test_support::{MockEngine, MockFoe, RecordingEngine};
use rpg_player::{Player, PlayerId};

/// Player with default rules and a recording engine
pub fn player() -> Player<RecordingEngine> {
    Player::new(PlayerId(1), RecordingEngine::default())
}

/// Player whose health and max health are both set
pub fn player_with_health(max_health: i32, health: i32) -> Player<RecordingEngine> {
    let mut player = player();
    player.state_mut().set_max_health(max_health);
    player.state_mut().set_health(health);
    player
}
