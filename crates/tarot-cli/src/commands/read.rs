use std::path::Path;

use tarot_core::{ReadingSession, SessionConfig, Spread};

pub fn run(spread: Spread, seed: Option<u64>, save: Option<&Path>) -> Result<(), String> {
    let mut session = ReadingSession::new(SessionConfig::default().with_optional_seed(seed));
    let reading = session.reading(spread).map_err(|e| e.to_string())?;

    super::print_reading(&reading);

    if let Some(path) = save {
        if !session.save_reading(path, &reading) {
            tracing::debug!(path = %path.display(), "save failed, exiting with error");
            return Err(format!("failed to save reading to {}", path.display()));
        }
        println!();
        println!("  Reading saved to {}", path.display());
    }

    Ok(())
}
