//! Game constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Default playfield width in pixels.
pub const DEFAULT_FIELD_WIDTH: f32 = 950.0;

/// Default playfield height in pixels.
pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

// --- Player ship ---

/// Fixed x position of the player ship (left side of the field).
pub const PLAYER_X: f32 = 50.0;

/// Player ship width as a fraction of the playfield width.
pub const PLAYER_WIDTH_RATIO: f32 = 0.1;

/// Player sprite aspect ratio (height over width).
pub const PLAYER_ASPECT: f32 = 630.0 / 950.0;

/// Vertical distance covered by one movement nudge (pixels).
pub const PLAYER_STEP: f32 = 15.0;

// --- Enemies ---

/// Enemy width and height in pixels (square sprite).
pub const ENEMY_SIZE: f32 = 60.0;

/// Minimum enemy drift speed (pixels per tick), inclusive.
pub const ENEMY_SPEED_MIN: f32 = 2.0;

/// Maximum enemy drift speed (pixels per tick), exclusive.
pub const ENEMY_SPEED_MAX: f32 = 5.0;

// --- Projectiles ---

/// Projectile width in pixels.
pub const PROJECTILE_WIDTH: f32 = 10.0;

/// Projectile height in pixels.
pub const PROJECTILE_HEIGHT: f32 = 5.0;

/// Speed of player shots (pixels per tick).
pub const PLAYER_SHOT_SPEED: f32 = 10.0;

/// Speed of enemy shots (pixels per tick).
pub const ENEMY_SHOT_SPEED: f32 = 7.0;

// --- Spawning ---

/// Minimum delay between enemy spawns (ticks). 1 second at 60Hz.
pub const SPAWN_DELAY_MIN_TICKS: u64 = 60;

/// Maximum delay between enemy spawns (ticks). 3 seconds at 60Hz.
pub const SPAWN_DELAY_MAX_TICKS: u64 = 180;

// --- Enemy fire ---

/// Minimum enemy fire interval (ticks). 2 seconds at 60Hz.
pub const FIRE_INTERVAL_MIN_TICKS: u64 = 120;

/// Maximum enemy fire interval (ticks). 5 seconds at 60Hz.
pub const FIRE_INTERVAL_MAX_TICKS: u64 = 300;

// --- Session ---

/// Points awarded per destroyed enemy.
pub const SCORE_PER_KILL: u32 = 100;

/// Score at which the session is won.
pub const WIN_SCORE: u32 = 500;

/// Lives at the start of a session.
pub const STARTING_LIVES: u32 = 3;
