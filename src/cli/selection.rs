use crate::models::config::{self, UserConfig};
use crate::models::OperatorKind;

fn save_or_exit(user_config: &UserConfig) {
    if let Err(e) = config::save_config(user_config) {
        eprintln!("Failed to save config: {}", e);
        std::process::exit(1);
    }
}

pub fn handle_operator(operator: Option<OperatorKind>) {
    let mut user_config = config::load_config();

    match operator {
        None => {
            println!("Current operator: {}", user_config.operator.display_name());
            println!("To change: arithmo operator <addition|subtraction|multiplication>");
        }
        Some(new_operator) if new_operator == user_config.operator => {
            println!("Operator is already set to {}", new_operator.display_name());
        }
        Some(new_operator) => {
            let old_operator = user_config.operator;
            user_config.operator = new_operator;
            save_or_exit(&user_config);
            println!(
                "Operator changed from {} to {}",
                old_operator.display_name(),
                new_operator.display_name()
            );
        }
    }
}

pub fn handle_name(name: Option<String>) {
    let mut user_config = config::load_config();

    match name.map(|n| n.trim().to_string()) {
        None => println!("Player name: {}", user_config.player_name),
        Some(n) if n.is_empty() => {
            eprintln!("Player name cannot be empty");
            std::process::exit(1);
        }
        Some(n) => {
            user_config.player_name = n;
            save_or_exit(&user_config);
            println!("Player name set to {}", user_config.player_name);
        }
    }
}
