//! Command-line interface for pocket_games.

use clap::{Parser, Subcommand};
use pocket_sliding::CELLS;
use pocket_tictactoe::{Board, Player};
use pocket_water_jug::JugOperation;

/// Pocket Games - perfect tic-tac-toe and two classic puzzles
#[derive(Parser, Debug)]
#[command(name = "pocket_games")]
#[command(about = "Tic-tac-toe solver, 8-puzzle and water jug puzzles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, default_value = "pocket_games.toml")]
    pub config: std::path::PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tic-tac-toe solver commands
    #[command(subcommand)]
    Tictactoe(TictactoeCommand),

    /// 8-puzzle commands
    #[command(subcommand)]
    EightPuzzle(EightPuzzleCommand),

    /// Water jug puzzle commands
    #[command(subcommand)]
    WaterJug(WaterJugCommand),
}

/// Tic-tac-toe commands
#[derive(Subcommand, Debug)]
pub enum TictactoeCommand {
    /// Print the solver's move for a board
    BestMove {
        /// Nine cells in row-major order, e.g. "XX_OO____"
        #[arg(short, long, value_parser = Board::parse)]
        board: Board,

        /// Player to move (defaults to whoever's turn the board implies)
        #[arg(short, long)]
        player: Option<Player>,
    },

    /// Play the solver against a random opponent
    SelfPlay {
        /// Number of games (defaults to the config value)
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Mark played by the solver
        #[arg(long, default_value = "O")]
        solver: Player,
    },
}

/// 8-puzzle commands
#[derive(Subcommand, Debug)]
pub enum EightPuzzleCommand {
    /// Generate a random solvable puzzle
    Shuffle {
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check whether an arrangement is solvable
    Check {
        /// Nine comma-separated tiles, 0 for the blank
        #[arg(value_parser = parse_tiles)]
        tiles: [u8; CELLS],
    },

    /// Apply slides to an arrangement
    Play {
        /// Nine comma-separated tiles, 0 for the blank
        #[arg(value_parser = parse_tiles)]
        tiles: [u8; CELLS],

        /// Cells to slide, as "row,col;row,col"
        #[arg(short, long, value_parser = parse_slides, default_value = "")]
        slides: Slides,
    },
}

/// Water jug commands
#[derive(Subcommand, Debug)]
pub enum WaterJugCommand {
    /// Check whether a target is measurable
    Check {
        /// Capacity of jug A
        capacity_a: u32,
        /// Capacity of jug B
        capacity_b: u32,
        /// Amount to measure
        target: u32,
    },

    /// Pick a random solvable preset
    Random {
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply operations from empty jugs
    Play {
        /// Capacity of jug A
        capacity_a: u32,
        /// Capacity of jug B
        capacity_b: u32,
        /// Amount to measure
        target: u32,
        /// Operations such as fill-a, pour-a-to-b, empty-b
        operations: Vec<JugOperation>,
    },
}

/// Slide coordinates in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slides(pub Vec<(usize, usize)>);

/// Parses "8,1,3,4,0,2,7,6,5" into a tile array.
pub fn parse_tiles(s: &str) -> Result<[u8; CELLS], String> {
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<u8>()
                .map_err(|e| format!("Invalid tile {:?}: {}", v, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let count = values.len();
    values
        .try_into()
        .map_err(|_| format!("Expected {} tiles, found {}", CELLS, count))
}

/// Parses "2,1;2,2" into slide coordinates.
pub fn parse_slides(s: &str) -> Result<Slides, String> {
    s.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (row, col) = pair
                .split_once(',')
                .ok_or_else(|| format!("Expected row,col but got {:?}", pair))?;
            let row = row
                .trim()
                .parse()
                .map_err(|e| format!("Invalid row {:?}: {}", row, e))?;
            let col = col
                .trim()
                .parse()
                .map_err(|e| format!("Invalid column {:?}: {}", col, e))?;
            Ok((row, col))
        })
        .collect::<Result<Vec<_>, String>>()
        .map(Slides)
}
