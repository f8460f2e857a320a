//! CLI tool for vgrid - replays a JSON command script and outputs a snapshot
//!
//! Usage:
//!   vgrid_cli <script.json>                      # Snapshot JSON to stdout
//!   vgrid_cli <script.json> -c config.json       # Use a grid config
//!   vgrid_cli <script.json> -o out.json          # Write snapshot to file
//!
//! The script is a JSON array of commands, e.g.
//! `[{"type":"init","rows":3,"columns":2},{"type":"resize","width":60,"height":40}]`.
//! Set `RUST_LOG=vgrid=debug` to trace each applied command.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use vgrid::{GridCommand, GridConfig, GridView};

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        fail("Usage: vgrid_cli <script.json> [-c config.json] [-o output.json]");
    }

    let script_path = &args[1];
    let mut config_path = None;
    let mut output_path = None;
    let mut rest = args[2..].iter();
    while let Some(flag) = rest.next() {
        match (flag.as_str(), rest.next()) {
            ("-c", Some(path)) => config_path = Some(path.clone()),
            ("-o", Some(path)) => output_path = Some(path.clone()),
            _ => fail(&format!("Unexpected argument: {flag}")),
        }
    }

    let config = match config_path {
        Some(path) => GridConfig::from_json(&read(&path))
            .unwrap_or_else(|e| fail(&format!("Error in config {path}: {e}"))),
        None => GridConfig::default(),
    };

    let script = GridCommand::script_from_json(&read(script_path))
        .unwrap_or_else(|e| fail(&format!("Error parsing script: {e}")));

    let mut view = GridView::new(config).unwrap_or_else(|e| fail(&format!("Error: {e}")));
    for (step, command) in script.iter().enumerate() {
        if let Err(e) = view.apply(command) {
            fail(&format!("Command {step} ({}) failed: {e}", command.kind()));
        }
    }

    let json = serde_json::to_string_pretty(&view.snapshot())
        .unwrap_or_else(|e| fail(&format!("Error serializing JSON: {e}")));

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
