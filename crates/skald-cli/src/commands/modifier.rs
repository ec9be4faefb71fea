use comfy_table::{ContentArrangement, Table};

use skald_mechanics::{format_modifier, modifier};

pub fn run(scores: &[i32]) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Score", "Modifier"]);

    for &score in scores {
        table.add_row(vec![score.to_string(), format_modifier(modifier(score))]);
    }

    println!("{table}");
    Ok(())
}
