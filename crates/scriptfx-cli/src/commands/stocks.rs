//! Custom film stock scanning command

use crate::StocksArgs;
use anyhow::Result;
use scriptfx_filters::{default_stock_dir, StockCatalog};
use serde::Serialize;

#[derive(Serialize)]
struct StockInfo<'a> {
    value: &'a str,
    label: &'a str,
}

pub fn run(args: StocksArgs, verbose: bool) -> Result<()> {
    let dir = match args.dir.or_else(default_stock_dir) {
        Some(dir) => dir,
        None => {
            println!("no stock directory configured");
            return Ok(());
        }
    };
    if verbose {
        println!("scanning {}", dir.display());
    }
    tracing::debug!("scanning stock directory {}", dir.display());

    let catalog = StockCatalog::scan(&dir);
    if args.json {
        let stocks: Vec<StockInfo> = catalog
            .stocks()
            .iter()
            .map(|s| StockInfo {
                value: &s.value,
                label: &s.label,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&stocks)?);
    } else {
        for s in catalog.stocks() {
            println!("{:<32} {}", s.label, s.value);
        }
        println!("{} stocks in {}", catalog.len(), dir.display());
    }
    Ok(())
}
