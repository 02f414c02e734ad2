//! CSV export command

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{receipts_csv, Ledger};

pub fn cmd_export(data_path: &Path, output: Option<&Path>) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let csv = receipts_csv(ledger.receipts());

    match output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "💾 Exported {} receipts to {}",
                ledger.receipts().len(),
                path.display()
            );
        }
        None => print!("{}", csv),
    }
    Ok(())
}
