// crates/mapgraph-cli/src/main.rs

//! The `mapgraph` command-line entrypoint.
//!
//! Reads a dependency-map XML dump (by default `map.xml` in the current
//! working directory) and writes a Graphviz DOT digraph to standard output.
//!
//! Use `--edges-only` to suppress the per-symbol shape declarations.

use std::env;
use std::io;
use std::process;

use log::debug;
use mapgraph::{DotOptions, MapError};

/// The map file read when no path argument is given.
const DEFAULT_MAP_FILE: &str = "map.xml";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<map-file>] [--edges-only]\n\nReads a dependency-map XML dump (default: {DEFAULT_MAP_FILE}) and writes a\nGraphviz DOT digraph to standard output.\n\n--edges-only suppresses the per-symbol shape declarations and emits only\nthe dependency edges."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    map_file: Option<String>,
    edges_only: bool,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--edges-only" => {
                if options.edges_only {
                    return Err(());
                }
                options.edges_only = true;
            }
            "--help" | "-h" => {
                options.help = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.map_file.is_some() {
                    return Err(());
                }
                options.map_file = Some(arg);
            }
        }
    }

    Ok(options)
}

fn run(options: &CliOptions) -> Result<(), MapError> {
    let path = options.map_file.as_deref().unwrap_or(DEFAULT_MAP_FILE);
    debug!("loading dependency map from {path}");

    let map = mapgraph::load_map(path)?;

    let dot_options = DotOptions {
        classify: !options.edges_only,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    mapgraph::write_dot(&map, &dot_options, &mut out)
}

fn main() {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| String::from("mapgraph"));

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            process::exit(2);
        }
    };

    if options.help {
        print_usage(&program);
        return;
    }

    if let Err(err) = run(&options) {
        eprintln!("{program}: {err}");
        process::exit(1);
    }
}
