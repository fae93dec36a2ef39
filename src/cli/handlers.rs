use std::path::PathBuf;

use crate::cli::commands::{AddArgs, Cli, Commands, ItemsArgs, MvArgs, ToggleArgs};
use crate::cli::output::{self, ItemJson, LocationJson};
use crate::io::store::Store;
use crate::model::Board;
use crate::ops::{self, check};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Resolve the store directory: the -C flag if given, else the platform
/// data dir (e.g. ~/.local/share/spotcheck).
pub fn resolve_store_dir(flag: Option<PathBuf>) -> PathBuf {
    match flag {
        Some(dir) => dir,
        None => dirs::data_dir()
            .map(|d| d.join("spotcheck"))
            .unwrap_or_else(|| PathBuf::from(".spotcheck")),
    }
}

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store = Store::new(resolve_store_dir(cli.store_dir));

    match cli.command {
        // main launches the TUI when no subcommand is given
        None => Ok(()),
        Some(cmd) => match cmd {
            // Read commands
            Commands::Locations => cmd_locations(&store, json),
            Commands::Items(args) => cmd_items(&store, args, json),
            Commands::Check => cmd_check(&store, json),

            // Write commands
            Commands::Loc(args) => match args.name {
                Some(name) => cmd_loc_add(&store, &name),
                None => cmd_locations(&store, json),
            },
            Commands::Add(args) => cmd_add(&store, args),
            Commands::Toggle(args) => cmd_toggle(&store, args),
            Commands::Mv(args) => cmd_mv(&store, args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a location argument (id or name) to its id
fn resolve_location_id(
    board: &Board,
    id_or_name: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    board
        .resolve_location(id_or_name)
        .map(|location| location.id.clone())
        .ok_or_else(|| format!("location not found: {}", id_or_name).into())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_locations(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let board = store.load_board();

    if json {
        let infos: Vec<LocationJson> = board
            .locations
            .iter()
            .map(|location| output::location_to_json(&board, location))
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        for line in output::format_location_listing(&board) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_items(store: &Store, args: ItemsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let board = store.load_board();
    let filter = args
        .location
        .as_deref()
        .map(|loc| resolve_location_id(&board, loc))
        .transpose()?;

    if json {
        let mut out: Vec<ItemJson> = Vec::new();
        for location in &board.locations {
            if let Some(ref only) = filter
                && *only != location.id
            {
                continue;
            }
            for item in ops::visible_items(&board, &location.id) {
                if item.checked && !args.all {
                    continue;
                }
                out.push(output::item_to_json(item));
            }
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let mut first = true;
        for location in &board.locations {
            if let Some(ref only) = filter
                && *only != location.id
            {
                continue;
            }
            if !first {
                println!();
            }
            first = false;
            for line in output::format_location_items(&board, location, args.all) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn cmd_check(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let board = store.load_board();
    let result = check::check_board(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if !result.errors.is_empty() {
            println!("Errors:");
            for err in &result.errors {
                println!("  {}", err);
            }
        }
        if result.valid {
            println!("✓ store is valid");
        } else {
            println!("✗ store has errors");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_loc_add(store: &Store, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = store.load_board();
    let id = ops::add_location(&mut board, name)?;

    store.save_locations(&board.locations)?;
    println!("{}", id);
    Ok(())
}

fn cmd_add(store: &Store, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = store.load_board();
    let location_id = resolve_location_id(&board, &args.location)?;
    let id = ops::add_item(&mut board, &location_id, &args.name)?;

    store.save_items(&board.items)?;
    println!("{}", id);
    Ok(())
}

fn cmd_toggle(store: &Store, args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = store.load_board();
    ops::toggle_item(&mut board, &args.id)?;

    store.save_items(&board.items)?;
    if let Some(item) = board.item(&args.id) {
        println!("{}", output::format_item_line(item));
    }
    Ok(())
}

fn cmd_mv(store: &Store, args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = store.load_board();
    let location_id = resolve_location_id(&board, &args.location)?;

    match ops::reassign_item(&mut board, &args.id, &location_id)? {
        ops::Reassign::Moved => {
            store.save_items(&board.items)?;
            println!("{} → {}", args.id, location_id);
        }
        ops::Reassign::Unchanged => {
            println!("{} already in {}", args.id, location_id);
        }
    }
    Ok(())
}
