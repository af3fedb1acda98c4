//! Data-driven game balance
//!
//! All gameplay-feel numbers live here so the host can override them
//! without recompiling (the web host reads a JSON blob from the page).
//! Geometry constants stay in [`crate::consts`]; tuning is only the
//! values a designer would want to turn.

use serde::{Deserialize, Serialize};

/// Balance values for one session. Plain data, copied into `GameState`
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player horizontal speed (units/sec)
    pub player_speed: f32,
    /// Player bullet speed (units/sec, upward)
    pub bullet_speed: f32,
    /// Invader bullet speed (units/sec, downward)
    pub invader_bullet_speed: f32,
    /// Formation speed on wave 1 (units/sec)
    pub invader_start_speed: f32,
    /// Added to formation speed each wave (units/sec)
    pub invader_speed_increment: f32,
    /// Vertical distance the formation descends on an edge hit
    pub drop_distance: f32,
    /// Chance per update call that some invader fires
    pub fire_chance: f32,
    /// Lives at session start
    pub starting_lives: u32,
    /// Points for a normal invader kill
    pub score_normal: u32,
    /// Points for a fast (top-two-rows) invader kill
    pub score_fast: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 300.0,
            bullet_speed: 400.0,
            invader_bullet_speed: 200.0,
            invader_start_speed: 50.0,
            invader_speed_increment: 20.0,
            drop_distance: 30.0,
            fire_chance: 0.001,
            starting_lives: 3,
            score_normal: 10,
            score_fast: 20,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields fall back to
    /// defaults; a malformed blob is rejected whole.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let parsed = Tuning::from_json(&json).unwrap();
        assert_eq!(parsed, tuning);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let parsed = Tuning::from_json(r#"{ "fire_chance": 0.01, "starting_lives": 5 }"#).unwrap();
        assert_eq!(parsed.fire_chance, 0.01);
        assert_eq!(parsed.starting_lives, 5);
        assert_eq!(parsed.player_speed, Tuning::default().player_speed);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
