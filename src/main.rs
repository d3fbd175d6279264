//! Duel Pong headless demo driver
//!
//! Stands in for the presentation layer: runs the fixed-timestep loop with
//! scripted ball-tracking input and logs scoring as it happens. The scripted
//! paddles are a harness for exercising the simulation, not a gameplay
//! feature.
//!
//! Usage: `duel-pong [seed] [max_score]`

use duel_pong::consts::SIM_DT;
use duel_pong::sim::{GameEvent, GameState, PaddleIntent, Phase, TickInput, tick};
use duel_pong::{ConfigError, FixedTimestep, MatchConfig};

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xD0E1_F00D);
    let max_score = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(MatchConfig::default().max_score);

    let config = MatchConfig { max_score };
    let mut state = GameState::new(config, seed)?;
    let mut clock = FixedTimestep::new();

    log::info!("duel-pong demo, seed {seed}, playing to {max_score}");

    // Drive the loop with synthetic 60 FPS frames until a match concludes
    for _frame in 0..600_000u32 {
        let pending = clock.advance(SIM_DT);
        for _ in 0..pending {
            let input = scripted_input(&state);
            for event in tick(&mut state, &input, clock.step()) {
                match event {
                    GameEvent::RoundStarted | GameEvent::PointScored { .. } => clock.reset(),
                    GameEvent::MatchWon { side } => {
                        log::info!("match over after {} ticks, winner: {side:?}", state.time_ticks);
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }
    }

    log::warn!(
        "frame budget exhausted at {} - {}",
        state.left_score,
        state.right_score
    );
    Ok(())
}

/// Trivial ball-tracking input: chase the ball's y with a small dead zone
fn scripted_input(state: &GameState) -> TickInput {
    let track = |paddle_y: f32| {
        let dy = state.ball.pos.y - paddle_y;
        if dy > 0.01 {
            PaddleIntent::Up
        } else if dy < -0.01 {
            PaddleIntent::Down
        } else {
            PaddleIntent::None
        }
    };

    TickInput {
        start: state.phase == Phase::Idle,
        left: track(state.left_paddle.pos.y),
        right: track(state.right_paddle.pos.y),
    }
}
