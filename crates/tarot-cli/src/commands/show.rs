use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let reading = tarot_core::read_reading(file)
        .map_err(|e| format!("cannot load {}: {e}", file.display()))?;
    super::print_reading(&reading);
    Ok(())
}
