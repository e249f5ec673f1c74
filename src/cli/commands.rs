use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::task::Priority;

#[derive(Parser)]
#[command(name = "dodo", about = concat!("dodo v", env!("CARGO_PKG_VERSION"), " - a small to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding tasks.json and settings.json
    #[arg(
        short = 'd',
        long = "data-dir",
        env = "DODO_DATA_DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in display order
    List,
    /// Append a task
    Add(AddArgs),
    /// Flip a task between open and completed
    Toggle(IndexArgs),
    /// Set a task's priority
    Priority(PriorityArgs),
    /// Move a task to a new position
    Mv(MvArgs),
    /// Remove all completed tasks
    Clean,
    /// Show or change settings
    Settings(SettingsArgs),
    /// Show the row color for a priority
    Color(ColorArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Priority (normal, medium, high)
    #[arg(long, short, default_value = "normal")]
    pub priority: Priority,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Zero-based task index, as shown by `dodo list`
    pub index: usize,
}

#[derive(Args)]
pub struct PriorityArgs {
    /// Zero-based task index
    pub index: usize,
    /// New priority (normal, medium, high)
    pub priority: Priority,
}

#[derive(Args)]
pub struct MvArgs {
    /// Current index of the task
    pub from: usize,
    /// Index the task should end up at
    pub to: usize,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Font family
    #[arg(long)]
    pub font_family: Option<String>,
    /// Font size (8-24)
    #[arg(long, value_parser = clap::value_parser!(u32).range(8..=24))]
    pub font_size: Option<u32>,
    /// Enable or disable dark mode
    #[arg(long)]
    pub dark_mode: Option<bool>,
}

#[derive(Args)]
pub struct ColorArgs {
    /// Priority name; unknown names get the normal color
    pub priority: String,
    /// Use the dark theme
    #[arg(long)]
    pub dark: bool,
}
