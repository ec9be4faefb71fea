use colored::Colorize;

use skald_mechanics::SeededRolls;
use skald_mechanics::dice::{self, RollMode};

pub fn run(
    advantage: bool,
    disadvantage: bool,
    count: u32,
    seed: Option<u64>,
) -> Result<(), String> {
    if count == 0 {
        return Err("--count must be at least 1".into());
    }

    let mode = RollMode::from_flags(advantage, disadvantage);
    let mut rolls = match seed {
        Some(seed) => SeededRolls::from_seed(seed),
        None => SeededRolls::from_os(),
    };

    for _ in 0..count {
        let thrown = dice::roll_check(&mut rolls, mode);
        match thrown.kept {
            20 => println!("  {thrown}  {}", "NATURAL 20!".green().bold()),
            1 => println!("  {thrown}  {}", "NATURAL 1...".red().bold()),
            _ => println!("  {thrown}"),
        }
    }

    Ok(())
}
