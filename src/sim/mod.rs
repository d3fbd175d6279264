//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (a single draw per serve)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{hit_offset, resolve_ball_paddle};
pub use state::{Ball, GameState, Paddle, PaddleIntent, Phase, Side};
pub use tick::{GameEvent, TickInput, tick};
