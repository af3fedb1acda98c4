//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState`; the host constructs
//! it, passes it to `tick`, and reads it back for rendering. No singletons.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first fire input; update is a no-op
    NotStarted,
    /// Active gameplay
    Running,
    /// Terminal. Restart means constructing a fresh `GameState`.
    GameOver,
}

/// Invader variety. Fast invaders occupy the top two rows, are worth
/// more points, and render in a distinct colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvaderKind {
    Fast,
    Normal,
}

/// Notifications for the UI layer, drained by the host once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LivesChanged(u32),
    WaveCleared(u32),
    GameOver { final_score: u32 },
}

/// The player's ship. Fixed y, fixed size, moves horizontally only.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, PLAYER_Y),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A projectile. Player bullets travel up, invader bullets travel down;
/// which is which is determined by the collection it lives in.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub pos: Vec2,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }
}

/// One invader in the formation. Destroyed invaders are only flagged
/// dead, never removed, so the formation Vec keeps its row-major order
/// for the whole wave.
#[derive(Debug, Clone)]
pub struct Invader {
    pub pos: Vec2,
    pub kind: InvaderKind,
    pub alive: bool,
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(INVADER_WIDTH, INVADER_HEIGHT))
    }
}

/// Complete session state, owned by the host entry point
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for logging/repro
    pub seed: u64,
    /// Balance values fixed at construction
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// 0-based wave counter
    pub wave_index: u32,
    pub player: Player,
    /// Player bullets (travel up, hard-deleted)
    pub bullets: Vec<Bullet>,
    /// Invader bullets (travel down, hard-deleted)
    pub invader_bullets: Vec<Bullet>,
    /// The 5x10 formation, row-major, soft-deleted via `alive`
    pub invaders: Vec<Invader>,
    /// Formation horizontal direction: -1.0 or +1.0
    pub invader_dir: f32,
    /// Formation speed for the current wave (units/sec)
    pub invader_speed: f32,
    /// Pending UI notifications
    pub events: Vec<GameEvent>,
    /// RNG driving invader fire, advanced nowhere else
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            tuning,
            phase: GamePhase::NotStarted,
            score: 0,
            lives: tuning.starting_lives,
            wave_index: 0,
            player: Player::new(),
            bullets: Vec::new(),
            invader_bullets: Vec::new(),
            invaders: Vec::new(),
            invader_dir: 1.0,
            invader_speed: tuning.invader_start_speed,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_formation();
        state
    }

    /// Build a fresh full formation: rows x cols, all alive, top two rows
    /// fast. Replaces whatever was there.
    pub fn spawn_formation(&mut self) {
        self.invaders.clear();
        for row in 0..INVADER_ROWS {
            for col in 0..INVADER_COLS {
                self.invaders.push(Invader {
                    pos: Vec2::new(
                        col as f32 * (INVADER_WIDTH + INVADER_SPACING) + FORMATION_ORIGIN_X,
                        row as f32 * (INVADER_HEIGHT + INVADER_SPACING) + FORMATION_ORIGIN_Y,
                    ),
                    kind: if row < 2 {
                        InvaderKind::Fast
                    } else {
                        InvaderKind::Normal
                    },
                    alive: true,
                });
            }
        }
    }

    /// Enqueue a player bullet centred on the ship. No-op outside Running;
    /// there is no cooldown, the input layer fires once per key press.
    pub fn shoot(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.bullets.push(Bullet {
            pos: Vec2::new(
                self.player.pos.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
                self.player.pos.y,
            ),
        });
    }

    pub fn alive_invaders(&self) -> impl Iterator<Item = &Invader> {
        self.invaders.iter().filter(|inv| inv.alive)
    }

    /// Take all pending UI events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_formation_layout() {
        let state = GameState::new(1);
        assert_eq!(state.invaders.len(), INVADER_ROWS * INVADER_COLS);
        assert!(state.invaders.iter().all(|inv| inv.alive));

        // Row-major order: top two rows are fast, the rest normal
        for (i, inv) in state.invaders.iter().enumerate() {
            let row = i / INVADER_COLS;
            let col = i % INVADER_COLS;
            let expected_kind = if row < 2 {
                InvaderKind::Fast
            } else {
                InvaderKind::Normal
            };
            assert_eq!(inv.kind, expected_kind, "row {row}");
            assert_eq!(
                inv.pos,
                Vec2::new(
                    col as f32 * 40.0 + FORMATION_ORIGIN_X,
                    row as f32 * 30.0 + FORMATION_ORIGIN_Y
                )
            );
        }
    }

    #[test]
    fn test_shoot_noop_before_start() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::NotStarted);
        state.shoot();
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_shoot_spawns_centred_bullet() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        state.shoot();
        assert_eq!(state.bullets.len(), 1);
        let bullet = &state.bullets[0];
        assert_eq!(
            bullet.pos.x,
            state.player.pos.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0
        );
        assert_eq!(bullet.pos.y, state.player.pos.y);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1);
        state.events.push(GameEvent::ScoreChanged(10));
        let events = state.drain_events();
        assert_eq!(events, vec![GameEvent::ScoreChanged(10)]);
        assert!(state.events.is_empty());
    }
}
