// src/cli/rules.rs — `questlog rules`: print the reward table

use crate::core::progress::LATE_HEALTH_PENALTY;
use crate::core::types::{Difficulty, EXP_PER_LEVEL, MAX_HEALTH};

pub fn run_rules() {
    println!("questlog v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("  Difficulty   EXP");
    for d in Difficulty::ALL {
        println!("  {:<12} {:>3}", d.label(), d.exp_reward());
    }
    println!();
    println!("  On time:  +quest gold, +EXP per the table above");
    println!("  Late:     -{LATE_HEALTH_PENALTY} HP, no rewards");
    println!();
    println!("  Level up every {EXP_PER_LEVEL} EXP.");
    println!("  Health starts at {MAX_HEALTH} and never drops below 0.");
    println!("  A quest only resolves when you complete it; nothing expires on its own.");
}
