use std::env;

use anyhow::{anyhow, Context, Result};
use careerspark::reports::render_terminal;
use careerspark::{AdvisorSession, MbtiType};

fn main() -> Result<()> {
    match Command::parse(env::args().skip(1))? {
        Command::Help => print_usage(),
        command => run(&AdvisorSession::new()?, command)?,
    }
    Ok(())
}

fn run(session: &AdvisorSession, command: Command) -> Result<()> {
    match command {
        Command::List => {
            for (code, profile) in session.available_types() {
                println!("{code}  {}", profile.display_title);
            }
        }
        Command::Show { code, interest } => {
            let outcome = session.lookup(code, interest.as_deref())?;
            print!("{}", render_terminal(&outcome.view));
        }
        Command::Export {
            code,
            interest,
            force,
        } => {
            let record = session.export(code, interest.as_deref(), force)?;
            println!("Saved {} ({} bytes)", record.path.display(), record.bytes);
            println!("sha256 {}", record.sha256);
        }
        Command::History => {
            let events = session.history()?;
            if events.is_empty() {
                println!("No activity recorded yet.");
            }
            for event in events {
                println!(
                    "{} {:?} {}",
                    event.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    event.event_type,
                    event.details
                );
            }
        }
        Command::Help => print_usage(),
    }
    Ok(())
}

#[derive(Debug)]
enum Command {
    List,
    Show {
        code: MbtiType,
        interest: Option<String>,
    },
    Export {
        code: MbtiType,
        interest: Option<String>,
        force: bool,
    },
    History,
    Help,
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let Some(command) = args.next() else {
            return Ok(Command::Help);
        };
        match command.as_str() {
            "list" => Ok(Command::List),
            "history" => Ok(Command::History),
            "help" | "--help" | "-h" => Ok(Command::Help),
            "show" | "export" => {
                let code: MbtiType = args
                    .next()
                    .with_context(|| format!("Expected an MBTI type after '{command}'"))?
                    .parse()?;
                let mut interest = None;
                let mut force = false;
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--interest" | "-i" => {
                            let value = args
                                .next()
                                .context("Expected text after --interest")?;
                            interest = Some(value);
                        }
                        "--force" if command == "export" => force = true,
                        other => {
                            return Err(anyhow!(
                                "Unknown argument '{other}'. Run with --help for usage instructions."
                            ));
                        }
                    }
                }
                if command == "show" {
                    Ok(Command::Show { code, interest })
                } else {
                    Ok(Command::Export {
                        code,
                        interest,
                        force,
                    })
                }
            }
            other => Err(anyhow!(
                "Unknown command '{other}'. Run with --help for usage instructions."
            )),
        }
    }
}

fn print_usage() {
    println!("CareerSpark: MBTI career, study and activity suggestions");
    println!("Usage: careerspark <command> [options]");
    println!("Commands:");
    println!("  list                         List the sixteen types");
    println!("  show <TYPE>                  Show suggestions for a type");
    println!("  export <TYPE>                Save the text report to the export directory");
    println!("  history                      Print logged lookups and exports");
    println!("Options:");
    println!("  --interest, -i <text>        Career interest to include (optional)");
    println!("  --force                      Replace an existing report (export only)");
}
