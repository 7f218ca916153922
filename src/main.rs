//! Wordgrid - CLI
//!
//! Timed word-finding game on a random letter grid, with TUI and plain-CLI
//! game modes plus solver utilities for arbitrary boards.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordgrid::{
    commands::{SolveConfig, check_word, run_simple, solve_board},
    dictionary::{DictionaryIndex, WORDS, loader},
    output::{print_check_result, print_solve_result},
    session::{DEFAULT_COLS, DEFAULT_ROWS},
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Timed word-finding game on a random letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Board rows
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board columns
    #[arg(long, global = true, default_value_t = DEFAULT_COLS)]
    cols: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// List every dictionary word on a board
    Solve {
        /// Board as comma-separated rows, e.g. "CATS,ONIE,RDXY,PQZW"; random if omitted
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Check whether a word traces a path on a board (no dictionary involved)
    Check {
        /// The word to trace
        word: String,

        /// Board as comma-separated rows, e.g. "CATS,ONIE,RDXY,PQZW"
        board: String,
    },
}

/// Load the dictionary based on the -w flag
///
/// An unreadable word list degrades to an empty dictionary with a warning:
/// the game stays playable, the solution list is just empty.
fn load_dictionary(wordlist_mode: &str) -> DictionaryIndex {
    match wordlist_mode {
        "embedded" => DictionaryIndex::new(WORDS.iter().copied()),
        path => match loader::load_from_file(path) {
            Ok(words) => DictionaryIndex::new(words),
            Err(e) => {
                eprintln!("⚠ Could not load wordlist '{path}': {e}");
                eprintln!("  Continuing with an empty dictionary.");
                DictionaryIndex::default()
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.rows, cli.cols, dictionary),
        Commands::Simple => {
            run_simple(cli.rows, cli.cols, dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { board } => {
            let config = SolveConfig::new(board, cli.rows, cli.cols);
            let result = solve_board(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Check { word, board } => {
            let result = check_word(&word, &board).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(rows: usize, cols: usize, dictionary: DictionaryIndex) -> Result<()> {
    use wordgrid::interactive::{App, run_tui};

    let app = App::new(rows, cols, dictionary);
    run_tui(app)
}
