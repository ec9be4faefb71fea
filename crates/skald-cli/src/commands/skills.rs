use comfy_table::{ContentArrangement, Table};

use skald_mechanics::SkillType;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Ability"]);

    for skill in SkillType::ALL {
        let ability = skill.ability();
        table.add_row(vec![
            skill.name().to_string(),
            format!("{} ({})", ability.name(), ability.abbreviation()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} skills", SkillType::ALL.len());

    Ok(())
}
