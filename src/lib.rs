//! Invaders - a classic fixed-shooter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity updates, collisions, waves)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in game units (canvas pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Player y is fixed; the ship only moves horizontally
    pub const PLAYER_Y: f32 = PLAYFIELD_HEIGHT - 60.0;

    /// Bullets (player and invader share the same shape)
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;

    /// Invader formation
    pub const INVADER_ROWS: usize = 5;
    pub const INVADER_COLS: usize = 10;
    pub const INVADER_WIDTH: f32 = 30.0;
    pub const INVADER_HEIGHT: f32 = 20.0;
    pub const INVADER_SPACING: f32 = 10.0;
    /// Top-left corner of a freshly spawned formation
    pub const FORMATION_ORIGIN_X: f32 = 100.0;
    pub const FORMATION_ORIGIN_Y: f32 = 50.0;
    /// Formation reverses when its extent reaches this close to a side wall
    pub const EDGE_MARGIN: f32 = 10.0;

    /// Longest frame the simulation will integrate, in ms (stalled-tab guard)
    pub const MAX_FRAME_MS: f32 = 100.0;
}
