//! Single-preset detail command

use super::PresetInfo;
use crate::ShowArgs;
use anyhow::{bail, Result};
use scriptfx_filters::{FilterKind, FilterParams};

pub fn run(args: ShowArgs) -> Result<()> {
    let kind = resolve(&args.filter)?;
    let params = FilterParams::default_for(kind);

    if args.json {
        let info = PresetInfo {
            tag: kind.tag(),
            label: kind.label(),
            index: kind.catalog_index(),
            command: params.command(),
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("preset:          {}", kind.label());
    println!("tag:             {}", kind.tag());
    println!("selector index:  {}", kind.catalog_index());
    println!("default command: {}", params.command());
    let script = kind.variant_script();
    if script.is_empty() {
        println!("script:          (none)");
    } else {
        println!("script:{script}");
    }
    Ok(())
}

fn resolve(name: &str) -> Result<FilterKind> {
    if let Ok(tag) = name.parse::<u32>() {
        if let Some(kind) = FilterKind::from_tag(tag) {
            return Ok(kind);
        }
        bail!("no preset with tag {tag}");
    }
    let lowered = name.to_lowercase();
    match FilterKind::CATALOG
        .into_iter()
        .find(|k| k.label().to_lowercase().contains(&lowered))
    {
        Some(kind) => Ok(kind),
        None => bail!("no preset matching '{name}'"),
    }
}
