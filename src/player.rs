use crate::collision::{self, Bounds, Collidable, StaticCollidable};
use crate::entity::Entity;
use crate::game::constants::{
    GRAVITY, JUMP_VELOCITY, PLAYER_HEIGHT, PLAYER_SPAWN, PLAYER_SPEED, PLAYER_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::kinematics;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Entity,
    pub velocity_y: f32,
    pub grounded: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            body: Entity::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_y: 0.0,
            grounded: false,
        }
    }

    /// A fresh player at the level spawn point
    pub fn spawn() -> Self {
        Self::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1)
    }

    /// Start a jump if standing on something.
    ///
    /// Returns `true` when the jump happened; airborne requests are ignored.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity_y = JUMP_VELOCITY;
        self.grounded = false;
        true
    }

    /// Gravity, platform landing and floor clamp for one tick.
    ///
    /// Grounded starts false and is only set by a landing or the floor clamp,
    /// so the two checks can run in either order with the same result.
    pub fn update_vertical<P: StaticCollidable>(&mut self, platforms: &[P]) {
        kinematics::integrate_vertical(&mut self.body, &mut self.velocity_y, GRAVITY);

        let landed = collision::land_on_platforms(&mut self.body, &mut self.velocity_y, platforms);
        let on_floor = collision::clamp_to_floor(&mut self.body, &mut self.velocity_y, SCREEN_HEIGHT);

        self.grounded = landed || on_floor;
    }

    /// Held-key movement followed by the wall clamp
    pub fn update_horizontal(&mut self, left: bool, right: bool) {
        kinematics::step_horizontal(&mut self.body, left, right, PLAYER_SPEED);
        collision::clamp_to_walls(&mut self.body, SCREEN_WIDTH);
    }

    /// Back to spawn, standing still
    pub fn respawn(&mut self) {
        self.body.set_position(PLAYER_SPAWN);
        self.velocity_y = 0.0;
        self.grounded = false;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.body.x, self.body.y)
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Bounds {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    #[test]
    fn test_jump_when_grounded() {
        let mut player = Player::spawn();
        player.grounded = true;

        assert!(player.jump());
        assert_eq!(player.velocity_y, -15.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_jump_when_airborne_is_noop() {
        let mut player = Player::spawn();
        player.grounded = false;
        player.velocity_y = 3.5;

        assert!(!player.jump());
        assert_eq!(player.velocity_y, 3.5);
    }

    #[test]
    fn test_spawn_settles_on_floor() {
        let mut player = Player::spawn();
        let no_platforms: Vec<Block> = Vec::new();

        player.update_vertical(&no_platforms);

        assert!(player.grounded);
        assert_eq!(player.body.bottom(), 400.0);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_drop_onto_platform() {
        let platforms = vec![Block::new(400.0, 250.0)];
        let mut player = Player::new(410.0, 0.0);

        for _ in 0..120 {
            player.update_vertical(&platforms);
        }

        assert_eq!(player.body.bottom(), 250.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_walking_off_platform_loses_ground() {
        let platforms = vec![Block::new(400.0, 250.0)];
        let mut player = Player::new(410.0, 190.0);
        player.update_vertical(&platforms);
        assert!(player.grounded);

        // Step right until clear of the platform edge
        for _ in 0..10 {
            player.update_horizontal(false, true);
        }
        player.update_vertical(&platforms);

        assert!(!player.grounded);
        assert!(player.velocity_y > 0.0);
    }

    #[test]
    fn test_horizontal_clamped_to_screen() {
        let mut player = Player::new(2.0, 340.0);
        player.update_horizontal(true, false);
        assert_eq!(player.body.x, 0.0);

        let mut player = Player::new(758.0, 340.0);
        player.update_horizontal(false, true);
        assert_eq!(player.body.right(), 800.0);
    }

    #[test]
    fn test_respawn_resets_motion() {
        let mut player = Player::new(600.0, 100.0);
        player.velocity_y = 7.0;
        player.grounded = true;

        player.respawn();

        assert_eq!(player.position(), (50.0, 350.0));
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.grounded);
    }
}
