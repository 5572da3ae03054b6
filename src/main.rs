//! Tube Runner entry point
//!
//! Headless demo driver: runs the simulation under the autopilot at a fixed
//! frame cadence and keeps a high score file across runs. A rendering layer
//! would replace this loop, feeding `tick` from its own frame callback and
//! drawing from the per-frame snapshot.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use tube_runner::sim::{GamePhase, GameSession, TickInput, tick};
use tube_runner::{HighScores, Tuning};

/// Frame cadence fed to the simulation (~60 Hz)
const FRAME_MS: f64 = 16.0;

const HIGHSCORE_PATH: &str = "highscores.json";
const TUNING_PATH: &str = "tuning.json";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    let tuning = Tuning::load(Path::new(TUNING_PATH));
    let mut highscores = HighScores::load(Path::new(HIGHSCORE_PATH));

    log::info!("seed {}, simulating {} frames", seed, frames);

    let mut session = GameSession::new(seed, tuning, 0.0);
    let input = TickInput {
        demo: true,
        ..Default::default()
    };

    let mut now = 0.0;
    let mut last_phase = session.phase;
    let mut runs = 0u32;
    for frame in 0..frames {
        now += FRAME_MS;
        tick(&mut session, &input, now);

        if session.phase == GamePhase::Lost && last_phase != GamePhase::Lost {
            runs += 1;
            let snapshot = session.snapshot(now);
            match highscores.add_score(snapshot.score, snapshot.player_depth, unix_ms()) {
                Some(rank) => log::info!(
                    "run {} ended: score {}, depth {:.0} - high score rank {}",
                    runs,
                    snapshot.score,
                    snapshot.player_depth,
                    rank
                ),
                None => log::info!(
                    "run {} ended: score {}, depth {:.0}",
                    runs,
                    snapshot.score,
                    snapshot.player_depth
                ),
            }
        }
        last_phase = session.phase;

        if frame % 600 == 0 {
            let snapshot = session.snapshot(now);
            log::debug!(
                "frame {}: phase {:?}, score {}, depth {:.0}, angle {:.0}",
                frame,
                snapshot.phase,
                snapshot.score,
                snapshot.player_depth,
                snapshot.player_angle.to_degrees()
            );
        }
    }

    highscores.save(Path::new(HIGHSCORE_PATH));

    let final_snapshot = session.snapshot(now);
    println!(
        "simulated {} frames, {} completed runs, final score {}",
        frames, runs, final_snapshot.score
    );
    for (i, entry) in highscores.entries.iter().enumerate() {
        println!(
            "  #{:<2} score {:>4}  depth {:>6.0}",
            i + 1,
            entry.score,
            entry.depth
        );
    }
}

fn unix_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
