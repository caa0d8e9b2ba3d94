use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use twenty48_core::{Direction, GameConfig, GameError, MoveOutcome, PlayEngine};

#[derive(Parser, Debug)]
#[command(version, about = "Play 2048 in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side length of the board
    #[arg(short = 'n', long, default_value_t = GameConfig::CLASSIC_SIZE)]
    size: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Move(Direction),
    Restart,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Self::Quit),
            "n" | "new" | "restart" => Ok(Self::Restart),
            other => other.parse().map(Self::Move),
        }
    }
}

fn render(out: &mut impl Write, engine: &PlayEngine) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", engine.board())?;
    writeln!(out, "Score: {}", engine.score())?;
    if engine.is_finished() {
        writeln!(out, "Game over! (n) new game, (q) quit")?;
    } else {
        write!(out, "Move with w/a/s/d, (n) new game, (q) quit: ")?;
    }
    out.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let config = GameConfig::new(args.size);
    log::info!("Starting a {0}x{0} game with seed {seed}", config.size);

    let mut engine = PlayEngine::from_seed(config, seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render(&mut stdout, &engine).context("Could not draw the board")?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read player input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Restart) => engine.restart(),
            Ok(Command::Move(_)) if engine.is_finished() => {
                log::debug!("Ignoring move, the game is over");
            }
            Ok(Command::Move(direction)) => match engine.play(direction) {
                MoveOutcome::NoChange => log::debug!("Nothing moved {direction}"),
                MoveOutcome::Moved => {}
                MoveOutcome::GameOver => log::info!(
                    "Game over with score {} after {} moves",
                    engine.score(),
                    engine.move_count()
                ),
            },
            Err(err) => writeln!(stdout, "{err}")?,
        }
        render(&mut stdout, &engine).context("Could not draw the board")?;
    }

    Ok(())
}
