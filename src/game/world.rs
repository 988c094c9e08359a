// GameWorld struct and entity management
//
// This module contains the GameWorld struct which owns all game entities and world state.
// The per-tick simulation lives in update.rs; state transitions live in session.rs.

use crate::block::Block;
use crate::enemy::Enemy;
use crate::player::Player;
use crate::scoring::{self, ScoreBoard};

use super::constants::{SCREEN_WIDTH, SCROLL_SPEED};

/// GameWorld encapsulates all game entities and world state
/// This struct owns all the game objects that exist in the world
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub player: Player,
    pub blocks: Vec<Block>,
    pub enemies: Vec<Enemy>,
    pub scoreboard: ScoreBoard,
    /// Horizontal background offset, in `(-SCREEN_WIDTH, 0]`
    pub background_x: f32,
}

impl GameWorld {
    /// Build the level: player at spawn, fixed platforms, both enemies
    pub fn new() -> Self {
        GameWorld {
            player: Player::spawn(),
            blocks: Block::level_layout(),
            enemies: Enemy::level_roster(),
            scoreboard: ScoreBoard::new(),
            background_x: 0.0,
        }
    }

    /// Put everything back to its level-start state after a death.
    ///
    /// The high score survives; the run score does not. Scoring flags are
    /// cleared by `reset_enemy_scoring`, patrol state by `Enemy::reset`.
    pub fn reset_after_death(&mut self) {
        self.player.respawn();
        self.scoreboard.reset_score();
        scoring::reset_enemy_scoring(&mut self.enemies);
        for enemy in self.enemies.iter_mut() {
            enemy.reset();
        }
    }

    /// Advance the cosmetic background scroll, wrapping every screen width
    pub fn scroll_background(&mut self) {
        self.background_x -= SCROLL_SPEED;
        if self.background_x <= -SCREEN_WIDTH {
            self.background_x = 0.0;
        }
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let world = GameWorld::new();
        assert_eq!(world.player.position(), (50.0, 350.0));
        assert_eq!(world.blocks.len(), 3);
        assert_eq!(world.enemies.len(), 2);
        assert_eq!(world.score(), 0);
        assert_eq!(world.high_score(), 0);
    }

    #[test]
    fn test_scroll_wraps() {
        let mut world = GameWorld::new();
        for _ in 0..399 {
            world.scroll_background();
        }
        assert_eq!(world.background_x, -798.0);

        world.scroll_background();
        assert_eq!(world.background_x, 0.0);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut world = GameWorld::new();
        world.scoreboard.score = 3;
        world.scoreboard.record_high_score();
        world.enemies[0].body.x = 10.0;
        world.enemies[0].speed = -2.0;
        world.enemies[0].scored = true;
        world.enemies[1].scored = true;
        world.player.body.x = 420.0;

        world.reset_after_death();

        assert_eq!(world.score(), 0);
        assert_eq!(world.high_score(), 3);
        assert_eq!(world.player.position(), (50.0, 350.0));
        for enemy in &world.enemies {
            assert_eq!((enemy.body.x, enemy.body.y), enemy.start_position());
            assert!(enemy.speed > 0.0);
            assert!(!enemy.scored);
        }
    }
}
