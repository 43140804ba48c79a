// src/cli/mod.rs — CLI definition (clap derive)

pub mod rules;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "questlog",
    about = "RPG todo list for the terminal",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the reward and penalty table
    Rules,
}
