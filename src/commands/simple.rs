//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: one round on a random board, wall-clock
//! timed, with the missed-word report at the end.

use crate::dictionary::DictionaryIndex;
use crate::output::formatters::format_grid;
use crate::session::{ROUND_TICKS, RoundState, Session, SubmitOutcome};
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(rows: usize, cols: usize, dictionary: DictionaryIndex) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordgrid - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find words on the board: each step moves to one of the 8 adjacent");
    println!("tiles and no tile is used twice in a word.");
    println!("You have {ROUND_TICKS} seconds per round.\n");
    println!("Commands: 'stop' to end the round, 'quit' to exit\n");

    if dictionary.is_empty() {
        println!("⚠ Dictionary is empty; the round will have no solution list.\n");
    }

    let mut session = Session::new(rows, cols);
    session.load_dictionary(dictionary);

    loop {
        if !session.start() {
            return Err("Dictionary not loaded".to_string());
        }

        let board = session.grid().ok_or("No board generated")?;
        println!("────────────────────────────────────────────────────────────");
        println!("{}", format_grid(board));
        println!("────────────────────────────────────────────────────────────");

        let round_start = Instant::now();

        while session.state() == RoundState::Running {
            let elapsed = round_start.elapsed().as_secs();
            if elapsed >= u64::from(ROUND_TICKS) {
                session.stop();
                println!("\n⏰ Time's up!");
                break;
            }
            let remaining = u64::from(ROUND_TICKS) - elapsed;

            let input = get_user_input(&format!("[{remaining:>2}s] Word"))?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "stop" => {
                    session.stop();
                }
                _ => {
                    // Reject late entries typed after the clock ran out
                    if round_start.elapsed().as_secs() >= u64::from(ROUND_TICKS) {
                        session.stop();
                        println!("\n⏰ Time's up!");
                        break;
                    }
                    let outcome = session.submit(&input);
                    let marker = if outcome.is_accepted() { "✔" } else { "❌" };
                    println!("{marker} {}", outcome.message());
                    if outcome == SubmitOutcome::Accepted {
                        println!("   Found so far: {}", session.found_words().join(", "));
                    }
                }
            }
        }

        print_round_report(&session)?;

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => {
                println!("\n🔄 New round!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_round_report(session: &Session) -> Result<(), String> {
    use colored::Colorize;

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", " Round over ".bright_yellow().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\nYou found {} word{}:",
        session.found_words().len(),
        if session.found_words().len() == 1 { "" } else { "s" }
    );
    for word in session.found_words() {
        println!("  • {}", word.bright_green());
    }

    if session.missed_words().is_empty() {
        println!("\nNothing missed — the whole board is yours!");
    } else {
        println!("\nWords you missed:");
        for word in session.missed_words() {
            println!("  • {}", word.bright_red());
        }
    }

    if !session.solutions().is_empty() {
        let show = get_user_input("\nShow all possible words? (yes/no)")?;
        if matches!(show.to_lowercase().as_str(), "yes" | "y") {
            println!("\nAll {} possible words:", session.solutions().len());
            for word in session.solutions() {
                println!("  • {word}");
            }
        }
    }

    println!();
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
