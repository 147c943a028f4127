//! Breakout Env headless runner
//!
//! Plays episodes with the oracle or the scripted tracking agent and prints
//! per-episode results.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use breakout_env::controller::{
    AgentController, Controller, CsvReporter, DEFAULT_MAX_TICKS, LogReporter, OracleController, Reporter, RunOptions,
    TrackingAgent, run,
};
use breakout_env::{Config, Environment};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerKind {
    /// Paddle glued under the ball, tolerant catching
    Oracle,
    /// Scripted agent steering with normal inputs
    Tracker,
}

#[derive(Parser, Debug)]
#[command(name = "breakout-env", about = "Run Breakout episodes headlessly")]
struct Args {
    #[arg(long, value_enum, default_value = "oracle")]
    controller: ControllerKind,

    /// Number of episodes to play
    #[arg(long, default_value_t = 10)]
    episodes: u32,

    /// Seed for the launch-angle generator
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// JSON config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print `cum_score,score,time,bricks` rows to stdout
    #[arg(long)]
    csv: bool,

    /// Steps after which an episode is quit
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Agent model to load before playing (tracker only)
    #[arg(long)]
    model_in: Option<PathBuf>,

    /// Where to write the agent model afterwards (tracker only)
    #[arg(long)]
    model_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> breakout_env::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut controller: Box<dyn Controller> = match args.controller {
        ControllerKind::Oracle => Box::new(OracleController),
        ControllerKind::Tracker => Box::new(AgentController::new(
            TrackingAgent::default(),
            args.model_in.as_deref(),
            args.model_out.clone(),
        )?),
    };

    let mut env = Environment::new(config, controller.collision_policy(), args.seed)?;
    let options = RunOptions {
        episodes: args.episodes,
        max_ticks_per_episode: args.max_ticks,
    };

    let mut reporter: Box<dyn Reporter> = if args.csv {
        Box::new(CsvReporter::new(std::io::stdout().lock()))
    } else {
        Box::new(LogReporter)
    };

    log::info!("Breakout Env starting: {} x{}", controller.name(), args.episodes);
    let summary = run(controller.as_mut(), &mut env, &options, reporter.as_mut())?;

    if !args.csv {
        println!("Performance summary:");
        println!("\tGames: {}", summary.games);
        println!("\tMean score: {:.2}", summary.mean_score());
        println!("\tMean time: {:.2}", summary.mean_ticks());
    }
    Ok(())
}
