// Per-tick simulation step
//
// Order within a tick is fixed:
//   jump -> gravity -> platform landing -> floor clamp -> horizontal move + walls
//   -> enemy patrol -> enemy contact -> scoring -> background scroll
// A contact ends the tick early: no scoring happens on the tick the player dies.

use crate::collision;
use crate::scoring::{self, SCORING_POLICY};

use super::types::{GameEvent, TickInput};
use super::world::GameWorld;

impl GameWorld {
    /// Run one fixed tick of gameplay and report what happened.
    ///
    /// A `GameEvent::Died` in the result means the caller must switch to the
    /// game-over state; the world itself is left exactly as it was at contact.
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if input.jump && self.player.jump() {
            events.push(GameEvent::Jumped);
        }

        self.player.update_vertical(&self.blocks);
        self.player.update_horizontal(input.left, input.right);

        for enemy in self.enemies.iter_mut() {
            enemy.update();
        }

        if let Some(enemy) = collision::first_collision(&self.player, &self.enemies) {
            events.push(GameEvent::Died { enemy });
            return events;
        }

        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if scoring::check_jump_over(&self.player, enemy, &mut self.scoreboard, SCORING_POLICY) {
                events.push(GameEvent::Scored { enemy: index });
            }
        }

        self.scroll_background();

        events
    }
}
