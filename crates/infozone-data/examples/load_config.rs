//! Load a main config and one map's zones, printing what was found.
//!
//! Reads loader settings from the first argument (`.ron`, `.toml` or
//! `.json`), or uses the default AMX Mod X layout when none is given. The
//! second argument names the map.
//!
//! Run with: `cargo run -p infozone-data --example load_config -- loader.ron de_dust2`

use std::path::Path;

use infozone_data::{InfoZoneData, LoaderConfig, TracingDiagnostics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => LoaderConfig::load(Path::new(&path))?,
        None => LoaderConfig::default(),
    };
    let map = args.next().unwrap_or_else(|| "de_dust2".to_string());

    let mut data = InfoZoneData::new(config);
    let summary = data.load_main_config(&mut TracingDiagnostics)?;
    println!(
        "main config: {} lines, {} entries, {} rejected",
        summary.lines, summary.rows_accepted, summary.rows_rejected
    );
    println!("  languages: {}", data.languages.languages().join(", "));
    println!("  phrases:   {}", data.languages.phrase_count());
    println!("  hud modes: {}", data.hud.rules().len());
    println!("  radio:     {}", data.radio.entries().len());
    println!(
        "  options:   hudpos {} block_radio {} block_fith {}",
        data.settings.default_options.hud_position(),
        data.settings.default_options.block_radio(),
        data.settings.default_options.block_fith()
    );

    let count = data.load_map_zones(&map, &mut TracingDiagnostics)?;
    println!("{map}: {count} zones");
    for zone in data.zones.zones() {
        let (min, max) = zone.shape.bounds();
        let name = zone.names.first().map_or("", |t| t.text.as_str());
        println!(
            "  {name:<24} ({:.0}, {:.0}, {:.0}) .. ({:.0}, {:.0}, {:.0})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    Ok(())
}
