use std::path::PathBuf;

use chrono::Utc;
use log::info;
use typed_repo::domain::inventory::{InventoryItem, InventoryLog};
use typed_repo::{default_log_level, init_logging};

const DEFAULT_FILE: &str = "inventory.json";

/// Snapshot path: first CLI argument, then `INVENTORY_FILE`, then `inventory.json`.
fn snapshot_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("INVENTORY_FILE").ok())
        .unwrap_or_else(|| DEFAULT_FILE.to_string())
        .into()
}

fn main() -> anyhow::Result<()> {
    init_logging(default_log_level())?;
    let path = snapshot_path();

    // First session: seed and save.
    let mut log = InventoryLog::new(&path);
    let now = Utc::now();
    for (id, name, quantity) in [
        (1, "Laptop", 5),
        (2, "Mouse", 20),
        (3, "Keyboard", 15),
        (4, "Monitor", 7),
        (5, "Headset", 10),
    ] {
        log.add(InventoryItem::new(id, name, quantity, now))?;
    }
    log.save()?;
    println!("Data saved to file.");

    // Second session: a fresh log reads the file back.
    let mut log = InventoryLog::new(&path);
    match log.load()? {
        Some(count) => {
            info!("event=inventory_loaded module=inventory count={}", count);
            println!("Data loaded from file.");
        }
        None => println!("File not found. Nothing to load."),
    }

    for item in log.items() {
        println!("{}", item);
    }
    Ok(())
}
