//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one step. The driving loop decides
//! how many steps are due (see [`crate::timestep::FixedTimestep`]); the
//! simulation never measures wall-clock time itself.

use super::collision::resolve_ball_paddle;
use super::state::{GameState, Phase, Side};
use crate::consts::{FIELD_MAX, FIELD_MIN};

pub use super::state::PaddleIntent;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Request Idle -> Playing; ignored while a round is in progress
    pub start: bool,
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

/// What happened during a step, reported to the driving loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A round began; the driver should clear its step accumulator
    RoundStarted,
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball deflected off a paddle face
    PaddleHit { side: Side },
    /// A point was awarded; the driver should clear its step accumulator
    PointScored { side: Side },
    /// The point reached max_score; both scores were reset
    MatchWon { side: Side },
}

/// Advance the match by exactly one fixed timestep
///
/// Step order: start handling, paddle intents, entity advance, ball/paddle
/// collision (left paddle first, never both), out-of-bounds scoring.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.start && state.phase == Phase::Idle {
        state.phase = Phase::Playing;
        state.ball.reset_to_center(&mut state.rng);
        events.push(GameEvent::RoundStarted);
        log::debug!(
            "round started, serving toward {:?}",
            if state.ball.vel.x > 0.0 { Side::Right } else { Side::Left }
        );
    }

    if state.phase != Phase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Input intents land before entity advance
    state.left_paddle.apply_intent(input.left);
    state.right_paddle.apply_intent(input.right);

    if state.ball.advance(dt) {
        events.push(GameEvent::WallBounce);
    }
    state.left_paddle.advance();
    state.right_paddle.advance();

    // The ball resolves against at most one paddle per step; left wins ties
    let ball_box = state.ball.aabb();
    if ball_box.intersects(&state.left_paddle.aabb()) {
        resolve_ball_paddle(&mut state.ball, &state.left_paddle);
        events.push(GameEvent::PaddleHit { side: Side::Left });
    } else if ball_box.intersects(&state.right_paddle.aabb()) {
        resolve_ball_paddle(&mut state.ball, &state.right_paddle);
        events.push(GameEvent::PaddleHit { side: Side::Right });
    }

    check_out_of_bounds(state, &mut events);

    events
}

/// Score when the ball fully crosses a side bound
///
/// The scoring transition passes through RoundOver and folds back to Idle
/// within the same step; a fresh start signal is required to resume play.
fn check_out_of_bounds(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball = &state.ball;
    let scorer = if ball.pos.x + ball.half_size.x > FIELD_MAX {
        Some(Side::Left)
    } else if ball.pos.x - ball.half_size.x < FIELD_MIN {
        Some(Side::Right)
    } else {
        None
    };
    let Some(side) = scorer else { return };

    state.phase = Phase::RoundOver;
    match side {
        Side::Left => state.left_score += 1,
        Side::Right => state.right_score += 1,
    }
    events.push(GameEvent::PointScored { side });
    log::info!(
        "point to {:?}: {} - {}",
        side,
        state.left_score,
        state.right_score
    );

    if state.left_score >= state.config.max_score || state.right_score >= state.config.max_score {
        events.push(GameEvent::MatchWon { side });
        log::info!("match won by {:?}, scores reset", side);
        state.left_score = 0;
        state.right_score = 0;
    }

    state.ball.reset_to_center(&mut state.rng);
    state.phase = Phase::Idle;
}
