use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use careerspark::orchestration::{log_event, EventType};
use careerspark::workspace::{ensure_workspace_structure, load_or_default, save, AppConfig};
use careerspark::ProfileTable;

fn main() -> Result<()> {
    let paths = ensure_workspace_structure()?;
    let args = CliArgs::parse()?;
    let config_path = paths.config_file();
    let mut config = load_or_default(&paths)?;
    let mut changed = !config_path.exists();

    changed |= apply_overrides(&mut config, &args);

    let table = ProfileTable::shared();
    table
        .validate()
        .context("Built-in career table failed its self check")?;

    if changed {
        save(&paths, &config)?;
        log_event(
            &paths,
            EventType::WorkspaceInitialized,
            serde_json::json!({ "config": config_path }),
        )?;
        println!("CareerSpark settings recorded at {}", config_path.display());
    } else {
        println!("CareerSpark settings already configured.");
    }
    println!(
        "{} career profiles available; reports go to {}",
        table.len(),
        paths.export_dir(&config).display()
    );

    Ok(())
}

struct CliArgs {
    export_dir: Option<PathBuf>,
    delimiter: Option<String>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut export_dir = None;
        let mut delimiter = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--export-dir" => {
                    let value = args
                        .next()
                        .context("Expected a directory after --export-dir")?;
                    export_dir = Some(PathBuf::from(value));
                }
                "--delimiter" => {
                    let value = args.next().context("Expected text after --delimiter")?;
                    delimiter = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            export_dir,
            delimiter,
        })
    }
}

fn print_usage() {
    println!("CareerSpark setup");
    println!("Creates the workspace and records preferences in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --export-dir <path>   Directory for exported text reports");
    println!("  --delimiter <text>    Separator between traits on screen (default: \" · \")");
}

fn apply_overrides(config: &mut AppConfig, args: &CliArgs) -> bool {
    let mut changed = false;
    if let Some(dir) = &args.export_dir {
        if config.export.directory.as_ref() != Some(dir) {
            config.export.directory = Some(dir.clone());
            changed = true;
        }
    }
    if let Some(delimiter) = &args.delimiter {
        if &config.display.trait_delimiter != delimiter {
            config.display.trait_delimiter = delimiter.clone();
            changed = true;
        }
    }
    changed
}
