//! roomgraph: check a world's room graph for unreachable rooms, dangling
//! exits and one-way connections.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roomgraph::export::{render_report, write_result_json};
use roomgraph::{AnalysisConfig, Error, FileSource, World};

/// Room graph integrity checker
#[derive(Parser, Debug)]
#[command(name = "roomgraph")]
#[command(version, about = "Check a world's room graph for connectivity problems", long_about = None)]
struct Args {
    /// World JSON documents (districts → locations → rooms → exits)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON config file; command-line flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of hub rooms to rank
    #[arg(long = "hubs")]
    hubs: Option<usize>,

    /// Expected total room count
    #[arg(long = "expect")]
    expect: Option<usize>,

    /// Also require every compass exit to be answered by its opposite direction
    #[arg(long = "strict-directions")]
    strict_directions: bool,

    /// Write the full analysis as JSON to this file
    #[arg(long = "json-out")]
    json_out: Option<PathBuf>,

    /// Do not print the text report
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;

    let world = match World::load(args.files.iter().map(FileSource::new)) {
        Ok(world) => world,
        Err(err @ Error::EmptyCatalog { .. }) => {
            return Err(err).context("nothing to analyze");
        }
        Err(err) => return Err(err.into()),
    };

    let result = world.analyze(&config);

    if !args.quiet {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        render_report(&result, world.catalog(), &config, &mut out)?;
        out.flush()?;
    }

    if let Some(path) = &args.json_out {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_result_json(&result, world.catalog(), &mut out)?;
        out.flush()?;
        tracing::info!(path = %path.display(), "wrote analysis result");
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(hubs) = args.hubs {
        config = config.with_hub_limit(hubs);
    }
    if let Some(expect) = args.expect {
        config = config.with_expected_room_count(expect);
    }
    if args.strict_directions {
        config = config.with_strict_direction_pairing(true);
    }
    Ok(config)
}
