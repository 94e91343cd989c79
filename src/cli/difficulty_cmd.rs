use crate::models::{config, Difficulty};

pub fn handle_difficulty(level: Option<Difficulty>) {
    let mut user_config = config::load_config();

    match level {
        None => {
            println!("Current difficulty: {}", user_config.difficulty.display_name());
            println!();
            println!("Complete the operation / quiz:");
            println!("  Easy:   small numbers, no carrying or borrowing");
            println!("  Medium: two-digit numbers, carrying and borrowing allowed");
            println!("  Hard:   three-digit numbers");
            println!();
            println!("Ordering blocks:");
            for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                let label = format!("{}:", level.display_name());
                println!("  {:<7} {} blocks", label, level.block_count());
            }
            println!();
            println!("To change: arithmo difficulty <level>");
        }
        Some(new_level) => {
            let old_level = user_config.difficulty;
            if old_level == new_level {
                println!("Difficulty is already set to {}", new_level.display_name());
                return;
            }

            user_config.difficulty = new_level;
            if let Err(e) = config::save_config(&user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!(
                "Difficulty changed from {} to {}",
                old_level.display_name(),
                new_level.display_name()
            );
        }
    }
}
