use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use tarot_core::persist::READING_EXTENSION;
use tarot_core::{ReadingSession, SessionConfig, Spread};

const MENU: &str = "\
Available Reading Types:
1. Single Card Reading
2. Three Card Reading (Past, Present, Future)
3. Celtic Cross Reading (10 cards)
4. Exit
h. Reading history
r. Reset the deck";

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut session = ReadingSession::new(SessionConfig::default().with_optional_seed(seed));

    println!("  {} Tarot Card Reader", "Welcome to the".bold());
    println!("  {}", "=".repeat(50));

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!("\n{MENU}");
        let Some(choice) = prompt(&mut reader, "\nSelect an option (1-4): ")? else {
            break; // EOF
        };

        let spread = match choice.as_str() {
            "1" => Spread::SingleCard,
            "2" => Spread::ThreeCard,
            "3" => Spread::CelticCross,
            "4" => break,
            "h" | "H" => {
                if !show_history(&mut reader, &session)? {
                    break;
                }
                continue;
            }
            "r" | "R" => {
                session.reset_deck();
                println!("Deck reset to {} cards.", session.deck().remaining_count());
                continue;
            }
            _ => {
                println!("{}", "Invalid choice. Please select 1-4.".yellow());
                continue;
            }
        };

        let reading = match session.reading(spread) {
            Ok(reading) => reading,
            Err(e) => {
                println!("{}", format!("Error: {e}").yellow());
                continue;
            }
        };

        super::print_reading(&reading);

        let Some(answer) = prompt(&mut reader, "\nSave this reading? (y/n): ")? else {
            break;
        };
        if !answer.eq_ignore_ascii_case("y") {
            continue;
        }

        let Some(name) = prompt(&mut reader, "Enter filename (without extension): ")? else {
            break;
        };
        if name.is_empty() {
            continue;
        }

        let path = PathBuf::from(format!("{name}.{READING_EXTENSION}"));
        if session.save_reading(&path, &reading) {
            println!("Reading saved to {}", path.display());
        } else {
            tracing::warn!(path = %path.display(), "console save failed");
            println!("{}", "Failed to save reading".yellow());
        }
    }

    println!("Thank you for using the Tarot Card Reader!");
    Ok(())
}

/// List past readings and re-render the one the user picks.
///
/// Returns `false` when input ended while waiting for a choice.
fn show_history(reader: &mut impl BufRead, session: &ReadingSession) -> Result<bool, String> {
    let history = session.history();
    if history.is_empty() {
        println!("No readings yet.");
        return Ok(true);
    }

    println!("\nReading History:");
    for (i, reading) in history.iter().enumerate() {
        let first = reading.cards.first().map_or("-", |c| c.name.as_str());
        println!("{}. {} - {first}", i + 1, reading.kind);
    }

    let Some(choice) = prompt(reader, "\nView reading number (blank to return): ")? else {
        return Ok(false);
    };
    if choice.is_empty() {
        return Ok(true);
    }

    match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
        Some(index) if index < history.len() => super::print_reading(&history[index]),
        _ => println!("{}", format!("No reading {choice}.").yellow()),
    }
    Ok(true)
}

/// Print `message` and read one trimmed line. `None` means end of input.
fn prompt(reader: &mut impl BufRead, message: &str) -> Result<Option<String>, String> {
    print!("{message}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}
