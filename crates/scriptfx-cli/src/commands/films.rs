//! Built-in film stock listing command

use crate::FilmsArgs;
use anyhow::Result;
use scriptfx_filters::FILM_PRESETS;
use serde::Serialize;

#[derive(Serialize)]
struct FilmInfo {
    id: &'static str,
    label: &'static str,
}

pub fn run(args: FilmsArgs) -> Result<()> {
    if args.json {
        let films: Vec<FilmInfo> = FILM_PRESETS
            .iter()
            .map(|f| FilmInfo {
                id: f.id,
                label: f.label,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&films)?);
    } else {
        for f in FILM_PRESETS {
            println!("{:<42} {}", f.id, f.label);
        }
        println!("{} built-in stocks", FILM_PRESETS.len());
    }
    Ok(())
}
