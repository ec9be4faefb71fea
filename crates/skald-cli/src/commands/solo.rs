use std::io::{self, BufRead, Write};

use colored::Colorize;

use skald_solo::{CharacterClass, SoloConfig, SoloSession};

pub fn run(seed: Option<u64>, class: CharacterClass, name: &str) -> Result<(), String> {
    let mut config = SoloConfig::default().with_name(name).with_class(class);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = SoloSession::new(config);

    println!("  {} Solo Session", "Starting".bold());
    println!(
        "  {} the {class} | Seed: {}",
        session.character().name,
        seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
