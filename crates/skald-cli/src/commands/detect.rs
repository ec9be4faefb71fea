use colored::Colorize;

use skald_mechanics::{detect_skill_check, get_check_reason};

pub fn run(action: &str) -> Result<(), String> {
    let Some(check) = detect_skill_check(action) else {
        println!("  No check needed");
        return Ok(());
    };

    println!(
        "  {}: {} ({})",
        check.kind_label(),
        check.name().bold(),
        check.effective_ability().abbreviation()
    );
    println!("  Reason: {}", get_check_reason(action, &check).dimmed());

    Ok(())
}
