//! Stored preset record validation command

use crate::CheckArgs;
use anyhow::{bail, Context, Result};
use scriptfx_filters::{FilterParams, StoredPreset};

pub fn run(args: CheckArgs, verbose: bool) -> Result<()> {
    let bytes = std::fs::read(&args.record)
        .with_context(|| format!("failed to read {}", args.record.display()))?;
    let Some(stored) = StoredPreset::from_bytes(&bytes) else {
        bail!(
            "{} is {} bytes, expected exactly {}",
            args.record.display(),
            bytes.len(),
            StoredPreset::WIRE_SIZE
        );
    };

    if verbose {
        println!("stored tag:     {}", stored.tag());
        println!("stored command: {}", stored.command());
    }

    let params = FilterParams::decode(&stored);
    println!("preset:             {}", params.kind().label());
    println!("normalized command: {}", params.command());
    if stored.command() != params.command() {
        println!("note: stored command was clamped or defaulted during decode");
    }
    Ok(())
}
