//! Per-frame simulation update
//!
//! `tick` advances the whole game by one frame of wall-clock time. Motion
//! is scaled by the elapsed milliseconds, so it is frame-rate independent;
//! the invader fire roll is the one per-call probability (see `invader_fire`).

use super::state::{GameEvent, GamePhase, GameState, InvaderKind};
use crate::consts::*;

/// Input snapshot for a single frame
///
/// `left`/`right` are held-key state; `fire` is a one-shot event the host
/// clears after each processed frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the game state by one frame of `dt_ms` elapsed milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    // A stalled tab can hand us a huge delta; a timer hiccup a negative one.
    let dt = dt_ms.clamp(0.0, MAX_FRAME_MS) / 1000.0;

    match state.phase {
        GamePhase::NotStarted => {
            // The first fire press starts the session without spawning a bullet
            if input.fire {
                state.phase = GamePhase::Running;
                log::info!("Game started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    if input.fire {
        state.shoot();
    }

    update_player(state, input, dt);
    update_bullets(state, dt);
    update_invaders(state, dt);
    update_invader_bullets(state, dt);
    check_collisions(state);
    if state.phase == GamePhase::GameOver {
        return;
    }
    invader_fire(state);

    if state.invaders.iter().all(|inv| !inv.alive) {
        next_wave(state);
    }

    // Invaders landing on the player's row ends the session
    if state
        .invaders
        .iter()
        .any(|inv| inv.alive && inv.pos.y + INVADER_HEIGHT >= state.player.pos.y)
    {
        game_over(state);
    }
}

/// Horizontal player movement. Left is applied before right, so holding
/// both cancels out; the result is clamped to the playfield.
fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let speed = state.tuning.player_speed;
    if input.left {
        state.player.pos.x -= speed * dt;
    }
    if input.right {
        state.player.pos.x += speed * dt;
    }
    state.player.pos.x = state.player.pos.x.clamp(0.0, PLAYFIELD_WIDTH - PLAYER_WIDTH);
}

/// Move player bullets up and drop any that fully left the playfield.
/// Reverse index order keeps removal safe mid-traversal.
fn update_bullets(state: &mut GameState, dt: f32) {
    for i in (0..state.bullets.len()).rev() {
        state.bullets[i].pos.y -= state.tuning.bullet_speed * dt;
        if state.bullets[i].pos.y + BULLET_HEIGHT < 0.0 {
            state.bullets.remove(i);
        }
    }
}

/// Move invader bullets down and cull below the bottom edge
fn update_invader_bullets(state: &mut GameState, dt: f32) {
    for i in (0..state.invader_bullets.len()).rev() {
        state.invader_bullets[i].pos.y += state.tuning.invader_bullet_speed * dt;
        if state.invader_bullets[i].pos.y > PLAYFIELD_HEIGHT {
            state.invader_bullets.remove(i);
        }
    }
}

/// Synchronized sweep-and-descend formation movement
///
/// Edge detection uses alive invaders only, so a formation thinned on one
/// side keeps sweeping past where the full grid would have turned. On an
/// edge hit the whole formation drops and no horizontal movement happens
/// that frame.
fn update_invaders(state: &mut GameState, dt: f32) {
    let mut leftmost = f32::INFINITY;
    let mut rightmost = f32::NEG_INFINITY;
    for inv in state.alive_invaders() {
        leftmost = leftmost.min(inv.pos.x);
        rightmost = rightmost.max(inv.pos.x + INVADER_WIDTH);
    }
    if !leftmost.is_finite() {
        return; // nothing alive this frame
    }

    let mut should_drop = false;
    if state.invader_dir > 0.0 && rightmost >= PLAYFIELD_WIDTH - EDGE_MARGIN {
        should_drop = true;
        state.invader_dir = -1.0;
    } else if state.invader_dir < 0.0 && leftmost <= EDGE_MARGIN {
        should_drop = true;
        state.invader_dir = 1.0;
    }

    let dx = state.invader_dir * state.invader_speed * dt;
    let drop = state.tuning.drop_distance;
    for inv in state.invaders.iter_mut().filter(|inv| inv.alive) {
        if should_drop {
            inv.pos.y += drop;
        } else {
            inv.pos.x += dx;
        }
    }
}

/// Resolve bullet hits. Each player bullet kills at most one invader
/// (first checked wins, and a dead invader is immediately ineligible);
/// at most one invader bullet hits the player per frame.
fn check_collisions(state: &mut GameState) {
    for i in (0..state.bullets.len()).rev() {
        let bullet_rect = state.bullets[i].rect();
        let hit = state
            .invaders
            .iter()
            .position(|inv| inv.alive && bullet_rect.intersects(&inv.rect()));
        if let Some(j) = hit {
            state.invaders[j].alive = false;
            state.bullets.remove(i);
            state.score += match state.invaders[j].kind {
                InvaderKind::Fast => state.tuning.score_fast,
                InvaderKind::Normal => state.tuning.score_normal,
            };
            state.events.push(GameEvent::ScoreChanged(state.score));
        }
    }

    let player_rect = state.player.rect();
    for i in (0..state.invader_bullets.len()).rev() {
        if state.invader_bullets[i].rect().intersects(&player_rect) {
            state.invader_bullets.remove(i);
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::LivesChanged(state.lives));
            if state.lives == 0 {
                game_over(state);
            }
            break;
        }
    }
}

/// Uniform-random invader fire
///
/// The roll happens once per update call, so the effective fire rate
/// tracks the caller's frame rate rather than wall time. That matches the
/// original game's behaviour and is kept as-is.
fn invader_fire(state: &mut GameState) {
    use rand::Rng;

    let alive_count = state.invaders.iter().filter(|inv| inv.alive).count();
    if alive_count == 0 {
        return;
    }
    if state.rng.random::<f32>() >= state.tuning.fire_chance {
        return;
    }

    let pick = state.rng.random_range(0..alive_count);
    if let Some(inv) = state.invaders.iter().filter(|inv| inv.alive).nth(pick) {
        let pos = glam::Vec2::new(
            inv.pos.x + INVADER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
            inv.pos.y + INVADER_HEIGHT,
        );
        state.invader_bullets.push(super::state::Bullet { pos });
    }
}

/// Full formation reset with a speed bump. Score, lives, and the current
/// sweep direction carry over; bullets do not.
fn next_wave(state: &mut GameState) {
    state.spawn_formation();
    state.invader_speed += state.tuning.invader_speed_increment;
    state.bullets.clear();
    state.invader_bullets.clear();
    state.wave_index += 1;
    state.events.push(GameEvent::WaveCleared(state.wave_index));
    log::info!(
        "Wave {} cleared, invader speed now {}",
        state.wave_index,
        state.invader_speed
    );
}

fn game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver {
        final_score: state.score,
    });
    log::info!("Game over, final score {}", state.score);
}
