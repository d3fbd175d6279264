//! Duel Pong - deterministic two-player paddle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state)
//! - `config`: Externally tunable match parameters
//! - `timestep`: Fixed-timestep accumulator for frame-driven callers
//!
//! Rendering, window management and raw input polling live outside this
//! crate; callers feed [`sim::TickInput`] intents into [`sim::tick`] once
//! per pending fixed step and read entity state back between steps.

pub mod config;
pub mod sim;
pub mod timestep;

pub use config::{ConfigError, MatchConfig};
pub use timestep::FixedTimestep;

/// Game configuration constants
///
/// The play-field is the normalized square [-1, 1] x [-1, 1]; entity sizes
/// are multiples of a "virtual pixel" unit.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Virtual pixel: base unit for entity sizes
    pub const VP: f32 = 0.025;

    /// Play-field bounds
    pub const FIELD_MIN: f32 = -1.0;
    pub const FIELD_MAX: f32 = 1.0;

    /// Ball defaults
    pub const BALL_HALF_SIZE: f32 = VP;
    pub const BALL_BASE_SPEED: f32 = 15.0 * VP;
    /// Speed boost when ball hits a paddle (multiplicative, uncapped)
    pub const PADDLE_BOOST: f32 = 1.1;

    /// Paddle defaults
    pub const PADDLE_HALF_WIDTH: f32 = 0.5 * VP;
    pub const PADDLE_HALF_HEIGHT: f32 = 4.0 * VP;
    /// Distance of each paddle center from the center line
    pub const PADDLE_X: f32 = 0.9;
    /// Per-step paddle travel while an input intent is held
    pub const PADDLE_STEP: f32 = 0.02;

    /// Maximum deflection angle off a paddle face (radians, 45 degrees)
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;

    /// Default points needed to win a match
    pub const DEFAULT_MAX_SCORE: u32 = 11;
}
