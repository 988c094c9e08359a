use crate::collision::{Bounds, StaticCollidable};
use crate::entity::Entity;
use crate::game::constants::{BLOCK_HEIGHT, BLOCK_POSITIONS, BLOCK_WIDTH};

/// A static platform. Never moves once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Entity,
}

impl Block {
    pub fn new(x: f32, y: f32) -> Self {
        Block {
            body: Entity::new(x, y, BLOCK_WIDTH, BLOCK_HEIGHT),
        }
    }

    /// The fixed platform layout for the level
    pub fn level_layout() -> Vec<Block> {
        BLOCK_POSITIONS
            .iter()
            .map(|&(x, y)| Block::new(x, y))
            .collect()
    }
}

impl StaticCollidable for Block {
    fn get_bounds(&self) -> Bounds {
        self.body.bounds()
    }
}
