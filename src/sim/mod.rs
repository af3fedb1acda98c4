//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Entity collections owned exclusively by `GameState` and mutated
//!   only inside `tick`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Bullet, GameEvent, GamePhase, GameState, Invader, InvaderKind, Player};
pub use tick::{TickInput, tick};
