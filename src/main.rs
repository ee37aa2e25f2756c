//! Dart Arcade entry point
//!
//! Headless demo: an autopilot plays a run through the fixed-timestep loop
//! and prints every throw and round outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use dart_arcade::consts::*;
use dart_arcade::sim::{AimEngine, HitResult, Phase, ThrowSink, TickInput, tick};
use dart_arcade::{ConfigError, DifficultyPreset, RunPhase, RunTracker, Settings};

#[derive(Parser, Debug)]
#[command(name = "dart-arcade", about = "Play a dart run with an autopilot")]
struct Cli {
    /// Jitter/autopilot seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Difficulty preset
    #[arg(long, value_enum, ignore_case = true)]
    difficulty: Option<DifficultyPreset>,
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Stop after this many rounds
    #[arg(long, default_value_t = 3)]
    rounds: u32,
    /// Print throws and round outcomes as JSON lines
    #[arg(long)]
    json: bool,
}

/// Presses confirm after a random reaction delay in each aiming phase
struct Autopilot {
    rng: Pcg32,
    wait: f32,
    last_phase: Phase,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        let mut pilot = Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5EED_DA27),
            wait: 0.0,
            last_phase: Phase::Locked,
        };
        pilot.wait = pilot.reaction();
        pilot
    }

    fn reaction(&mut self) -> f32 {
        self.rng.random_range(0.25..2.5)
    }

    /// Input for the next tick given the engine phase
    fn input(&mut self, phase: Phase, dt: f32) -> TickInput {
        if phase != self.last_phase {
            self.last_phase = phase;
            self.wait = self.reaction();
        }
        if phase == Phase::Locked {
            return TickInput::default();
        }
        self.wait -= dt;
        TickInput {
            confirm: self.wait <= 0.0,
        }
    }
}

/// Forwards throws to the run while printing them
struct Scoreboard<'a> {
    run: &'a mut RunTracker,
    json: bool,
}

impl ThrowSink for Scoreboard<'_> {
    fn submit_throw(&mut self, hit: HitResult) {
        if self.json {
            match serde_json::to_string(&hit) {
                Ok(line) => println!("{line}"),
                Err(e) => log::warn!("Failed to encode throw: {e}"),
            }
        } else {
            println!(
                "  dart {}: {:>4} {:>3} pts",
                self.run.darts_per_round - self.run.darts_left + 1,
                hit.label,
                hit.total
            );
        }
        self.run.submit_throw(hit);
    }
}

/// One JSON line per finished round
#[derive(Debug, Serialize)]
struct RoundSummary {
    round: u32,
    total: u32,
    target: u32,
    phase: RunPhase,
    coins: u32,
}

impl RoundSummary {
    fn from_run(run: &RunTracker) -> Self {
        Self {
            round: run.round,
            total: run.total_score(),
            target: run.target_score,
            phase: run.phase,
            coins: run.coins,
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(preset) = cli.difficulty {
        settings.difficulty = preset;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

fn play(cli: &Cli, settings: &Settings) {
    let mut engine: AimEngine = settings.engine(0xDA27_5EED);
    let mut pilot = Autopilot::new(engine.seed);
    let mut run = RunTracker::new();

    log::info!(
        "Starting run: seed={} difficulty={}",
        engine.seed,
        settings.difficulty.as_str()
    );

    // Host loop: fixed substeps out of a 60 Hz frame clock
    let frame_dt = 1.0 / 60.0_f32;
    let mut accumulator = 0.0_f32;

    loop {
        if !cli.json {
            println!(
                "Round {} - target {} ({} darts)",
                run.round, run.target_score, run.darts_left
            );
        }

        while run.phase == RunPhase::Aiming {
            accumulator += frame_dt.min(MAX_FRAME_DT);
            let mut substeps = 0;
            while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = pilot.input(engine.phase(), SIM_DT);
                let mut board = Scoreboard {
                    run: &mut run,
                    json: cli.json,
                };
                tick(&mut engine, &input, SIM_DT, &mut board);
                accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        if cli.json {
            match serde_json::to_string(&RoundSummary::from_run(&run)) {
                Ok(line) => println!("{line}"),
                Err(e) => log::warn!("Failed to encode round summary: {e}"),
            }
        } else {
            println!(
                "  total {} / {} - {}",
                run.total_score(),
                run.target_score,
                match run.phase {
                    RunPhase::RoundComplete => "cleared",
                    _ => "run over",
                }
            );
        }

        if run.phase == RunPhase::RunOver || run.round >= cli.rounds {
            break;
        }
        run.start_next_round();
    }

    if !cli.json {
        println!("Finished round {} with {} coins", run.round, run.coins);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    play(&cli, &settings);
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_flag_parses_presets() {
        let cli = Cli::try_parse_from(["dart-arcade", "--difficulty", "HARD"]).unwrap();
        assert_eq!(cli.difficulty, Some(DifficultyPreset::Hard));
        let cli = Cli::try_parse_from(["dart-arcade", "--difficulty", "medium"]).unwrap();
        assert_eq!(cli.difficulty, Some(DifficultyPreset::Normal));
        assert!(Cli::try_parse_from(["dart-arcade", "--difficulty", "nightmare"]).is_err());
    }

    #[test]
    fn test_round_summary_json_line() {
        let mut run = RunTracker::new();
        run.phase = RunPhase::RoundComplete;
        run.coins = 3;
        let line = serde_json::to_string(&RoundSummary::from_run(&run)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["round"], 1);
        assert_eq!(value["total"], 0);
        assert_eq!(value["target"], 75);
        assert_eq!(value["phase"], "RoundComplete");
        assert_eq!(value["coins"], 3);
        assert!(!line.contains('\n'));
    }
}
