use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Location-based checklists. Run with no subcommand to open the
/// interactive board.
#[derive(Parser)]
#[command(name = "spot", about = "Location-based checklists", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this store directory instead of the platform data dir
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List locations with item counts
    Locations,
    /// List items, unchecked first (all locations unless one is given)
    Items(ItemsArgs),
    /// Add a location, or list locations when no name is given
    Loc(LocArgs),
    /// Add an item to a location
    Add(AddArgs),
    /// Toggle an item between checked and unchecked
    Toggle(ToggleArgs),
    /// Validate stored data (dangling references, duplicate ids)
    Check,
    /// Move an item to another location
    Mv(MvArgs),
}

#[derive(Args)]
pub struct ItemsArgs {
    /// Location id or name to list (default: all locations)
    pub location: Option<String>,
    /// Include checked items
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct LocArgs {
    /// Name for the new location
    pub name: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Location id or name the item goes under
    pub location: String,
    /// Item name
    pub name: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Item id
    pub id: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Item id
    pub id: String,
    /// Destination location id or name
    pub location: String,
}
