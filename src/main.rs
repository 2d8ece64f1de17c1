//! Bugboard: QA dashboard generator CLI

use anyhow::{Context, Result};
use bugboard::aggregate::Aggregates;
use bugboard::config::{load_config, write_starter_config, Config, CONFIG_FILENAME};
use bugboard::filter::{FilterKeySets, KeyCollision};
use bugboard::loader::{duplicate_ids, load_records, LoadError};
use bugboard::output::{write_if_changed, WriteOutcome};
use bugboard::render::{DashboardRenderer, SummaryReporter};
use bugboard::watcher::InputWatcher;
use bugboard::Dimension;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Bugboard: turn a JSON bug list into a filterable QA dashboard page
#[derive(Parser, Debug)]
#[command(name = "bugboard")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bug records file (default: bugs.json, or `input` from the config)
    input: Option<PathBuf>,

    /// Output HTML file (default: qa-dashboard.html)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Path to config file (default: search .bugboardrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quiet mode (warnings and errors only)
    #[arg(long, short)]
    quiet: bool,

    /// Print a JSON summary of the counts to stdout
    #[arg(long)]
    json: bool,

    /// Rebuild whenever the input file changes
    #[arg(long)]
    watch: bool,

    /// Write the output even if its content is unchanged
    #[arg(long)]
    force: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .bugboardrc.json with a starter profile
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Name shown in the header and footer
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { dir, name }) = &args.command {
        return run_init(dir.as_deref(), name.as_deref());
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?
        .merge_with_cli(args.input.as_deref(), args.output.as_deref());

    if args.watch {
        return run_watch(&args, &config);
    }

    build(&args, &config)
}

/// Load, render and write once
fn build(args: &Args, config: &Config) -> Result<ExitCode> {
    let input = config.input_path();
    let output = config.output_path();

    info(args, "Building QA dashboard...");

    let records = match load_records(&input) {
        Ok(records) => records,
        Err(e @ LoadError::MissingInput { .. }) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            eprintln!(
                "Make sure {} exists, or pass the bug list path as an argument.",
                input.display()
            );
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e.into()),
    };

    for (id, count) in duplicate_ids(&records) {
        eprintln!(
            "{}: bug id {} appears {} times; ids should be unique",
            "Warning".yellow(),
            id,
            count
        );
    }

    let agg = Aggregates::from_records(&records);
    for collision in FilterKeySets::from_aggregates(&agg).collisions() {
        eprintln!("{}: {}", "Warning".yellow(), collision_message(&collision));
    }

    info(
        args,
        &format!("Loaded {} bug reports from {}", records.len(), input.display()),
    );

    let html = DashboardRenderer::new(config).render(&records);
    match write_if_changed(&output, &html, args.force)? {
        WriteOutcome::Written => {
            info(args, &format!("Dashboard written to {}", output.display()))
        }
        WriteOutcome::Unchanged => {
            info(args, &format!("{} is up to date", output.display()))
        }
    }
    info(
        args,
        &format!(
            "Stats: {} bugs across {} titles",
            agg.total,
            agg.unique_games()
        ),
    );

    if args.json {
        println!("{}", SummaryReporter::new().pretty().report(&agg));
    }
    if !args.quiet {
        eprintln!("{}", "Done".green().bold());
    }

    Ok(ExitCode::SUCCESS)
}

fn collision_message(collision: &KeyCollision) -> String {
    match collision {
        KeyCollision::Reserved { key, dimensions } => format!(
            "{} key \"{}\" is reserved for the All Bugs filter; its control shows every card",
            join_dimensions(dimensions),
            key
        ),
        KeyCollision::Shadowed {
            key,
            owner,
            shadowed,
        } => format!(
            "filter key \"{}\" is also a {} key; its control only matches the {} cards",
            key,
            join_dimensions(shadowed),
            owner
        ),
    }
}

fn join_dimensions(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}

fn info(args: &Args, message: &str) {
    if !args.quiet {
        eprintln!("{}: {}", "Info".blue(), message);
    }
}

fn run_init(dir: Option<&Path>, name: Option<&str>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);

    match write_starter_config(dir, name)? {
        Some(path) => {
            println!("{}: Created {}", "Done".green().bold(), path.display());
        }
        None => {
            eprintln!(
                "{}: {} already exists; use --dir to write elsewhere or remove it first",
                "Warning".yellow(),
                dir.join(CONFIG_FILENAME).display()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, config: &Config) -> Result<ExitCode> {
    let input = config.input_path();

    if let Err(e) = build(args, config) {
        eprintln!("{}: {:#}", "Error".red(), e);
    }

    let watcher = InputWatcher::watch(&input).context("Failed to create file watcher")?;
    eprintln!(
        "{}: Watching {} for changes... (Ctrl+C to stop)",
        "Info".blue(),
        input.display()
    );

    while watcher.next_change() {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        eprintln!("{}: [{}] {} changed, rebuilding", "Info".blue(), stamp, input.display());
        if let Err(e) = build(args, config) {
            eprintln!("{}: [{}] {:#}", "Error".red(), stamp, e);
        }
    }

    Ok(ExitCode::SUCCESS)
}
