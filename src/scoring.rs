//! Jump-over scoring
//!
//! A point is awarded when the player clears an enemy: the player's feet are
//! above the enemy's head and the player's right edge has passed the enemy's
//! right edge while still straddling it. Scoring is edge-triggered per enemy
//! through `Enemy::scored`, so holding the position only ever pays once.
//!
//! How the `scored` flag is re-armed is a policy choice:
//!
//! - [`ScoringPolicy::Strict`]: only a full reset (player death) clears it.
//! - [`ScoringPolicy::ReArmable`]: it also clears as soon as the player is no
//!   longer above the enemy, so every separate jump over it can score.

use crate::enemy::Enemy;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    Strict,
    ReArmable,
}

/// Policy the game is played with
pub const SCORING_POLICY: ScoringPolicy = ScoringPolicy::ReArmable;

/// Current run score and the best score seen this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }

    /// Fold the current score into the high score. Never lowers it.
    pub fn record_high_score(&mut self) {
        self.high_score = self.high_score.max(self.score);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Feet strictly above the enemy's head
pub fn is_above(player: &Player, enemy: &Enemy) -> bool {
    player.body.bottom() < enemy.body.top()
}

/// Above the enemy and crossing its right edge
pub fn has_cleared(player: &Player, enemy: &Enemy) -> bool {
    let enemy_right = enemy.body.right();
    is_above(player, enemy) && player.body.right() > enemy_right && player.body.left() < enemy_right
}

/// Evaluate one enemy for this tick. Returns `true` when a point is awarded.
pub fn check_jump_over(
    player: &Player,
    enemy: &mut Enemy,
    board: &mut ScoreBoard,
    policy: ScoringPolicy,
) -> bool {
    if policy == ScoringPolicy::ReArmable && !is_above(player, enemy) {
        enemy.scored = false;
    }

    if has_cleared(player, enemy) && !enemy.scored {
        board.award_point();
        enemy.scored = true;
        return true;
    }

    false
}

/// Clear every enemy's scored flag (used on restart)
pub fn reset_enemy_scoring(enemies: &mut [Enemy]) {
    for enemy in enemies.iter_mut() {
        enemy.scored = false;
    }
}
