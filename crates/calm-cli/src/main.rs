//! `calm` command-line driver
//!
//! ```text
//! calm generate --facts facts.json [--root .] [--output PATH] [--config calm.toml]
//! calm render --facts facts.json
//! ```

mod settings;

use anyhow::{Context, Result};
use calm_facts::{snapshot, FactTables};
use calm_graph::{render, synthesize};
use calm_regen::{FsStore, RegenAction, Regenerator};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use settings::Settings;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code when the facts describe no architecture
const EXIT_NOTHING_TO_GENERATE: u8 = 2;

fn cli() -> Command {
    let facts = Arg::new("facts")
        .long("facts")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Fact snapshot JSON file");
    let config = Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML settings file");

    Command::new("calm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a FINOS CALM architecture document from codebase facts")
        .subcommand_required(true)
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("generate")
                .about("Create, update or remove the architecture document")
                .arg(facts.clone())
                .arg(config.clone())
                .arg(
                    Arg::new("root")
                        .long("root")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory the document path is relative to"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Document path, overriding the settings file"),
                )
                .arg(
                    Arg::new("max-cycles")
                        .long("max-cycles")
                        .value_parser(value_parser!(usize))
                        .help("Upper bound on regeneration cycles"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Print the architecture document to stdout")
                .arg(facts)
                .arg(config),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_facts(path: &Path) -> Result<FactTables> {
    let (facts, report) = snapshot::load(path)
        .with_context(|| format!("failed to load facts from {}", path.display()))?;
    tracing::info!(
        rows = report.rows_loaded,
        skipped = report.rows_skipped,
        unknown_tables = report.unknown_tables.len(),
        "facts loaded"
    );
    Ok(facts)
}

fn settings(args: &ArgMatches) -> Result<Settings> {
    Settings::load(args.get_one::<PathBuf>("config").map(PathBuf::as_path))
}

fn generate(args: &ArgMatches) -> Result<ExitCode> {
    let mut settings = settings(args)?;
    if let Some(output) = args.get_one::<PathBuf>("output") {
        settings.regen.path.clone_from(output);
    }
    if let Some(max_cycles) = args.get_one::<usize>("max-cycles") {
        settings.regen.max_cycles = *max_cycles;
    }

    let facts = load_facts(args.get_one::<PathBuf>("facts").context("missing --facts")?)?;
    let root = args
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let max_cycles = settings.regen.max_cycles;
    let mut regen = Regenerator::new(FsStore::new(root), settings.regen, settings.synthesis);
    let actions = regen
        .run_until_stable(&facts, max_cycles)
        .context("regeneration failed")?;

    let wrote = actions.iter().any(|a| matches!(a, RegenAction::Write(_)));
    let deleted = actions.contains(&RegenAction::Delete);
    tracing::info!(cycles = regen.cycles(), wrote, deleted, "generation finished");
    Ok(ExitCode::SUCCESS)
}

fn render_command(args: &ArgMatches) -> Result<ExitCode> {
    let settings = settings(args)?;
    let facts = load_facts(args.get_one::<PathBuf>("facts").context("missing --facts")?)?;

    let Some(document) = synthesize(&facts, &settings.synthesis) else {
        tracing::warn!("no architectural facts, nothing to render");
        return Ok(ExitCode::from(EXIT_NOTHING_TO_GENERATE));
    };
    println!("{}", render(&document)?);
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));

    match matches.subcommand() {
        Some(("generate", args)) => generate(args),
        Some(("render", args)) => render_command(args),
        _ => Ok(ExitCode::FAILURE),
    }
}
