//! Match state and core simulation types
//!
//! Entities are plain owned structs mutated in place; the ball and both
//! paddles are created once at match start and live for the whole process.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::config::{ConfigError, MatchConfig};
use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Fixed paddle x position for this side
    pub fn paddle_x(self) -> f32 {
        match self {
            Side::Left => -PADDLE_X,
            Side::Right => PADDLE_X,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a start signal
    Idle,
    /// Active gameplay
    Playing,
    /// Transient scoring state; folds back to Idle within the same step and
    /// is never observable across step boundaries
    RoundOver,
}

/// Per-step input intent for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    None,
}

/// The ball
///
/// `speed` is the scalar magnitude reapplied to the velocity direction on
/// every paddle hit; `|vel| == speed` holds immediately after any collision
/// response or reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub half_size: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            half_size: Vec2::splat(BALL_HALF_SIZE),
            vel: Vec2::new(BALL_BASE_SPEED, 0.0),
            speed: BALL_BASE_SPEED,
        }
    }

    /// Integrate one step, then reflect off the top/bottom walls
    ///
    /// Returns true when a wall bounce happened. There is no positional
    /// clamp after a bounce, so the ball can sit outside the bound for one
    /// step before the flipped velocity carries it back in.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.pos += self.vel * dt;

        if self.pos.y + self.half_size.y > FIELD_MAX || self.pos.y - self.half_size.y < FIELD_MIN {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Re-center the ball with a fresh serve toward a uniformly random side
    pub fn reset_to_center(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::ZERO;
        self.speed = BALL_BASE_SPEED;

        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir * self.speed, 0.0);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half_size)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A player paddle; x is fixed for the paddle's lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub half_size: Vec2,
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            pos: Vec2::new(side.paddle_x(), 0.0),
            half_size: Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT),
            side,
        }
    }

    /// Apply one step of held input (movement is a fixed per-step increment,
    /// not scaled by dt)
    pub fn apply_intent(&mut self, intent: PaddleIntent) {
        match intent {
            PaddleIntent::Up => self.pos.y += PADDLE_STEP,
            PaddleIntent::Down => self.pos.y -= PADDLE_STEP,
            PaddleIntent::None => {}
        }
    }

    /// Post-movement boundary enforcement, run every fixed step
    pub fn advance(&mut self) {
        if self.pos.y + self.half_size.y > FIELD_MAX {
            self.pos.y = FIELD_MAX - self.half_size.y;
        } else if self.pos.y - self.half_size.y < FIELD_MIN {
            self.pos.y = FIELD_MIN + self.half_size.y;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half_size)
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    pub config: MatchConfig,
    pub phase: Phase,
    pub left_score: u32,
    pub right_score: u32,
    /// Simulation tick counter (only advances while Playing)
    pub time_ticks: u64,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    /// Serve-direction RNG; the only source of randomness in the simulation
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh match in the Idle phase
    ///
    /// Degenerate configuration is rejected here; the simulation itself
    /// never validates.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            seed,
            config,
            phase: Phase::Idle,
            left_score: 0,
            right_score: 0,
            time_ticks: 0,
            ball: Ball::new(),
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }
}
