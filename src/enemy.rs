use crate::collision::{Bounds, Collidable};
use crate::entity::Entity;
use crate::game::constants::{ENEMY_SIZE, ENEMY_SPAWNS, SCREEN_WIDTH};

/// Which sprite an enemy is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Red,
    Blue,
}

/// A ground enemy that patrols back and forth across the screen.
///
/// `speed` is signed: positive moves right, negative moves left. The start
/// position and speed are kept so a restart can put the enemy back exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Entity,
    pub kind: EnemyKind,
    pub speed: f32,
    /// Set once the player has been awarded a point for clearing this enemy
    pub scored: bool,
    start_position: (f32, f32),
    start_speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32, kind: EnemyKind) -> Self {
        Enemy {
            body: Entity::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            kind,
            speed,
            scored: false,
            start_position: (x, y),
            start_speed: speed,
        }
    }

    /// The two enemies of the level: red first, blue second
    pub fn level_roster() -> Vec<Enemy> {
        ENEMY_SPAWNS
            .iter()
            .enumerate()
            .map(|(i, &(x, y, speed))| {
                let kind = if i % 2 == 0 { EnemyKind::Red } else { EnemyKind::Blue };
                Enemy::new(x, y, speed, kind)
            })
            .collect()
    }

    /// Advance one tick of patrol.
    ///
    /// Moves by `speed`; on crossing either screen edge the direction flips and
    /// the enemy is pulled back inside the screen.
    pub fn update(&mut self) {
        self.body.x += self.speed;

        if self.body.left() < 0.0 || self.body.right() > SCREEN_WIDTH {
            self.speed = -self.speed;
            self.body.x = self.body.x.clamp(0.0, SCREEN_WIDTH - self.body.width);
        }
    }

    /// Restore the spawn position. Direction is always reset to rightward.
    ///
    /// The `scored` flag belongs to scoring and is cleared there.
    pub fn reset(&mut self) {
        self.body.set_position(self.start_position());
        self.speed = self.start_speed.abs();
    }

    pub fn start_position(&self) -> (f32, f32) {
        self.start_position
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Bounds {
        self.body.bounds()
    }
}
