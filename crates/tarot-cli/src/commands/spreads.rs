use comfy_table::{ContentArrangement, Table};
use tarot_core::Spread;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spread", "Cards", "Positions"]);

    for spread in Spread::ALL {
        let positions = if spread.positions().is_empty() {
            "-".to_string()
        } else {
            spread.positions().join(", ")
        };
        table.add_row(vec![
            spread.to_string(),
            spread.card_count().to_string(),
            positions,
        ]);
    }

    println!("{table}");
    Ok(())
}
