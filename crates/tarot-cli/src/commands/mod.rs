pub mod console;
pub mod read;
pub mod show;
pub mod spreads;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tarot_core::Reading;

const RULE_WIDTH: usize = 50;

/// Print a reading: header, interpretation, and a table of the cards.
fn print_reading(reading: &Reading) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("  {} Reading", reading.kind.bold());
    println!("  {rule}");
    for line in reading.interpretation.lines() {
        println!("  {line}");
    }
    println!("  {rule}");

    if reading.cards.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Position", "Card", "Orientation", "Image"]);

    for (i, (position, card)) in reading.positioned_cards().into_iter().enumerate() {
        let orientation = if card.reversed { "Reversed" } else { "Upright" };
        let image = card.image_file.as_deref().unwrap_or("(no image)");
        table.add_row(vec![
            (i + 1).to_string(),
            position.unwrap_or("-").to_string(),
            card.name.clone(),
            orientation.to_string(),
            image.to_string(),
        ]);
    }

    println!();
    println!("{table}");
}
