use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

/// Append-only log of absorbed store failures (.store.log in the store
/// directory). Best-effort: a log failure itself is only a stderr warning,
/// never an error to the caller.
pub fn log_store_failure(store_dir: &Path, context: &str, err: &dyn std::fmt::Display) {
    if let Err(e) = append(store_dir, context, err) {
        eprintln!("warning: could not write to store log: {}", e);
    }
}

fn append(store_dir: &Path, context: &str, err: &dyn std::fmt::Display) -> io::Result<()> {
    let path = store_dir.join(".store.log");
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    let timestamp = Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    writeln!(file, "{} {}: {}", timestamp, context, err)
}
