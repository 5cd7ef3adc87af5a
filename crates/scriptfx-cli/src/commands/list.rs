//! Catalog listing command

use super::PresetInfo;
use crate::ListArgs;
use anyhow::Result;
use scriptfx_filters::{FilterKind, FilterParams};

pub fn run(args: ListArgs) -> Result<()> {
    let entries: Vec<PresetInfo> = FilterKind::CATALOG
        .iter()
        .enumerate()
        .map(|(index, &kind)| PresetInfo {
            tag: kind.tag(),
            label: kind.label(),
            index,
            command: FilterParams::default_for(kind).command(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{:>5}  {:>3}  {:<28} default command", "index", "tag", "preset");
        for e in &entries {
            println!("{:>5}  {:>3}  {:<28} {}", e.index, e.tag, e.label, e.command);
        }
    }
    Ok(())
}
