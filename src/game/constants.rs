// Gameplay constants
//
// Every value here is fixed for the life of the process. Positions are in
// logical screen pixels (origin top-left), speeds in pixels per tick.

/// Logical screen size
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 400.0;

/// Simulation ticks per second
pub const TICKS_PER_SECOND: u32 = 60;

/// Downward acceleration applied every tick
pub const GRAVITY: f32 = 0.5;
/// Horizontal displacement per tick while a direction key is held
pub const PLAYER_SPEED: f32 = 5.0;
/// Vertical velocity set instantly by a jump (negative = up)
pub const JUMP_VELOCITY: f32 = -15.0;

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
pub const PLAYER_SPAWN: (f32, f32) = (50.0, SCREEN_HEIGHT - 50.0);

pub const BLOCK_WIDTH: f32 = 60.0;
pub const BLOCK_HEIGHT: f32 = 40.0;
pub const BLOCK_POSITIONS: [(f32, f32); 3] = [(200.0, 300.0), (400.0, 250.0), (600.0, 200.0)];

pub const ENEMY_SIZE: f32 = 80.0;
/// (x, y, speed) for each enemy, in draw order (red first, blue second)
pub const ENEMY_SPAWNS: [(f32, f32, f32); 2] = [
    (500.0, SCREEN_HEIGHT - ENEMY_SIZE, 2.0),
    (700.0, SCREEN_HEIGHT - ENEMY_SIZE, 3.0),
];

/// Background scroll per tick (cosmetic)
pub const SCROLL_SPEED: f32 = 2.0;

/// Start-screen button (x, y, width, height)
pub const START_BUTTON: (f32, f32, f32, f32) = (300.0, 260.0, 200.0, 60.0);
