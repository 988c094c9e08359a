// Shared enums and helper structs used throughout the game

/// Game state enum for tracking current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title screen, waiting for the start button
    Start,
    Playing,
    /// Frozen after touching an enemy, waiting for restart
    GameOver,
}

/// Player intent for a single tick
///
/// `left`/`right` reflect keys held this tick; `jump` is a one-shot request
/// from a key press and should be cleared after the tick consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    /// A point was awarded for clearing the enemy at this index
    Scored { enemy: usize },
    /// The player touched the enemy at this index
    Died { enemy: usize },
}
