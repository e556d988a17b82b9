use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use connect_four::config::GameConfig;
use connect_four::game::{ColumnChoice, GameLogic, PlayerKind, TurnOutcome};

/// Upper bound on re-asking an automated seat for a playable column.
const MAX_CHOICE_ATTEMPTS: usize = 16;

/// Play a headless game of Connect Four between the configured seats.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the automated opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override the random seed of the automated seats
    #[arg(long)]
    seed: Option<u64>,

    /// Columns played by passive seats, in turn order (e.g. 3,3,4)
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// Make both seats automated
    #[arg(long)]
    autoplay: bool,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: log::Level,

    /// Print a configuration file with all defaults and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    simple_logger::init_with_level(cli.log_level).context("initialising logger")?;

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.autoplay {
        config.first.kind = PlayerKind::Automated;
        config.second.kind = PlayerKind::Automated;
    }

    let mut game = config.build_game();
    let mut scripted = cli.moves.into_iter();

    loop {
        let seat = game.current_seat();
        let token = game.current_player().token().clone();
        let col = match game.current_player().kind() {
            PlayerKind::Automated => automated_column(&mut game)?,
            PlayerKind::Passive => match scripted.next() {
                Some(col) => col,
                None => {
                    println!("{}\n", game.board());
                    println!("Waiting for the {} seat ({token}) to move.", seat.name());
                    return Ok(());
                }
            },
        };

        info!("{} seat ({token}) plays column {col}", seat.name());
        match game.play_turn(col) {
            Ok(TurnOutcome::Continue) => {}
            Ok(TurnOutcome::Won { winner }) => {
                println!("{}\n", game.board());
                println!("Game over! {} seat ({token}) wins!", winner.name());
                return Ok(());
            }
            Ok(TurnOutcome::Drawn) => {
                println!("{}\n", game.board());
                println!("It's a draw!");
                return Ok(());
            }
            Err(err) => println!("Invalid move: {err}"),
        }
    }
}

/// Ask the current automated seat for a column until it names one the board
/// accepts.
fn automated_column(game: &mut GameLogic) -> Result<usize> {
    for _ in 0..MAX_CHOICE_ATTEMPTS {
        match game.choose_column() {
            ColumnChoice::Column(col) if game.board().is_valid_move(col) => return Ok(col),
            ColumnChoice::Column(col) => {
                warn!("automated seat chose invalid column {col}, choosing again");
            }
            ColumnChoice::NoLegalMove => bail!("no open column left for the automated seat"),
            ColumnChoice::Deferred => bail!("automated seat deferred its move"),
        }
    }
    bail!("automated seat failed to pick a playable column in {MAX_CHOICE_ATTEMPTS} attempts")
}
