use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use following_distance::{Event, Explorer, Parameter};
use itertools::Itertools;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore the minimum safe following distance", long_about = None)]
struct Cli {
    /// How to print the state after each command
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// A line of input from the session.
#[derive(Debug, PartialEq)]
enum Command {
    Apply(Event),
    Show,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let words = line.split_whitespace().collect_vec();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["set", name, value] => {
            let parameter = name.parse::<Parameter>()?;
            let value = value
                .parse::<f64>()
                .map_err(|err| format!("bad value `{}`: {}", value, err))?;
            Command::Apply(Event::ParameterChanged { parameter, value })
        }
        ["reset"] => Command::Apply(Event::ResetRequested),
        ["show"] => Command::Show,
        ["quit"] | ["exit"] => Command::Quit,
        _ => return Err(format!("unrecognised command `{}`", line.trim())),
    };
    Ok(Some(command))
}

fn print_state(out: &mut impl Write, explorer: &Explorer, format: Format) -> io::Result<()> {
    let params = explorer.params();
    match format {
        Format::Text => {
            let fields = Parameter::ALL
                .iter()
                .map(|p| format!("{}={}", p, params.get(*p)))
                .join(" ");
            writeln!(out, "{} -> separation {:.3} m", fields, explorer.distance())
        }
        Format::Json => {
            let curves = explorer
                .curves()
                .iter()
                .map(|curve| {
                    json!({
                        "parameter": curve.parameter().name(),
                        "label": curve.parameter().axis_label(),
                        "x": curve.points().iter().map(|p| p.x).collect_vec(),
                        "y": curve.distances().collect_vec(),
                    })
                })
                .collect_vec();
            let params = Parameter::ALL
                .iter()
                .map(|p| (p.name().to_string(), json!(params.get(*p))))
                .collect::<serde_json::Map<_, _>>();
            let state = json!({
                "params": params,
                "distance": explorer.distance(),
                "curves": curves,
            });
            writeln!(out, "{}", state)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut explorer = Explorer::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_state(&mut out, &explorer, cli.format).context("failed to write state")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("error: {}", err);
                continue;
            }
        };
        match command {
            Command::Apply(event) => {
                if let Err(err) = explorer.handle(event) {
                    eprintln!("error: {}", err);
                    continue;
                }
            }
            Command::Show => {}
            Command::Quit => break,
        }
        print_state(&mut out, &explorer, cli.format).context("failed to write state")?;
    }
    Ok(())
}
