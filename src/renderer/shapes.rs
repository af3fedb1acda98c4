//! Shape generation for 2D primitives
//!
//! The frame is tessellated on the CPU into flat-colored quads in
//! playfield coordinates; the pipeline maps them to NDC on upload.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, InvaderKind};

/// Two triangles covering an axis-aligned rectangle (top-left + size)
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

fn push_quad(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    out.extend_from_slice(&quad(pos, size, color));
}

/// Player ship: hull plus the three turret blocks of the original sprite
pub fn player_ship(out: &mut Vec<Vertex>, pos: Vec2) {
    push_quad(
        out,
        pos,
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        colors::PLAYER,
    );
    push_quad(
        out,
        pos + Vec2::new(5.0, -10.0),
        Vec2::new(5.0, 10.0),
        colors::PLAYER_TURRET,
    );
    push_quad(
        out,
        pos + Vec2::new(15.0, -15.0),
        Vec2::new(10.0, 15.0),
        colors::PLAYER_TURRET,
    );
    push_quad(
        out,
        pos + Vec2::new(30.0, -10.0),
        Vec2::new(5.0, 10.0),
        colors::PLAYER_TURRET,
    );
}

/// Invader sprite: body with an inset core, colored by kind
pub fn invader_sprite(out: &mut Vec<Vertex>, pos: Vec2, kind: InvaderKind) {
    let (body, core) = match kind {
        InvaderKind::Fast => (colors::INVADER_FAST, colors::INVADER_FAST_CORE),
        InvaderKind::Normal => (colors::INVADER_NORMAL, colors::INVADER_NORMAL_CORE),
    };
    push_quad(out, pos, Vec2::new(INVADER_WIDTH, INVADER_HEIGHT), body);
    push_quad(
        out,
        pos + Vec2::new(5.0, 5.0),
        Vec2::new(INVADER_WIDTH - 10.0, INVADER_HEIGHT - 10.0),
        core,
    );
}

/// Tessellate one full frame of game state
///
/// The clear colour handles the background; while the session has not
/// started, a translucent overlay dims the playfield under the DOM
/// start prompt.
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(1024);

    player_ship(&mut out, state.player.pos);

    for bullet in &state.bullets {
        push_quad(
            &mut out,
            bullet.pos,
            Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            colors::BULLET,
        );
    }

    for inv in state.alive_invaders() {
        invader_sprite(&mut out, inv.pos, inv.kind);
    }

    for bullet in &state.invader_bullets {
        push_quad(
            &mut out,
            bullet.pos,
            Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            colors::INVADER_BULLET,
        );
    }

    if state.phase == GamePhase::NotStarted {
        push_quad(
            &mut out,
            Vec2::ZERO,
            Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            colors::START_OVERLAY,
        );
    }

    out
}
