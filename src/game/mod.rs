// Game module - Contains all game logic and state management
//
// This module contains:
// - constants.rs: Fixed gameplay values (screen, physics, level layout)
// - types.rs: Shared enums and helper structs
// - world.rs: GameWorld struct and entity management
// - update.rs: Per-tick simulation step
// - session.rs: Start/Playing/GameOver state machine

// Module declarations
pub mod constants;
pub mod session;
pub mod types;
pub mod update;
pub mod world;

// Re-export types for convenience
pub use session::GameSession;
pub use types::*;
pub use world::GameWorld;
