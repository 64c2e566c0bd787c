// Kalah command-line front end: interactive play, self-play, position analysis

mod analyze;
mod play;
mod selfplay;

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use kalah_core::Player;
use kalah_core::search::DEFAULT_DEPTH;
use kalah_core::zobrist::DEFAULT_SEED;

#[derive(Parser, Debug)]
#[command(author, version, about = "Kalah (6 pits, 4 stones) engine", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Search depth in turn-switching plies
    #[arg(long, global = true, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Seed for the position hash keys
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    hash_seed: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the engine on the terminal
    Play(PlayArgs),
    /// Engine against engine, one JSON line per game
    Selfplay(selfplay::SelfplayArgs),
    /// Search one position and print the result
    Analyze(analyze::AnalyzeArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct PlayArgs {
    /// Which side the human plays
    #[arg(long, value_enum, default_value_t = HumanSide::One)]
    human: HumanSide,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanSide {
    One,
    Two,
    /// Engine plays both sides
    None,
}

impl HumanSide {
    pub fn controls(self, player: Player) -> bool {
        match self {
            HumanSide::One => player == Player::One,
            HumanSide::Two => player == Player::Two,
            HumanSide::None => false,
        }
    }
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr);
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Command::Play(PlayArgs {
        human: HumanSide::One,
    }));
    match command {
        Command::Play(args) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let config = play::PlayConfig {
                human: args.human,
                depth: cli.depth,
                hash_seed: cli.hash_seed,
            };
            play::run_game(&config, stdin.lock(), stdout.lock())?;
        }
        Command::Selfplay(args) => selfplay::run(&args, cli.depth, cli.hash_seed)?,
        Command::Analyze(args) => analyze::run(&args, cli.depth, cli.hash_seed)?,
    }
    Ok(())
}
