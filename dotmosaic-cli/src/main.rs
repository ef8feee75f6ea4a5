use clap::Parser;
use dotmosaic::batch::{convert_files, list_input_files, BatchSummary};
use dotmosaic::{DotConfig, Rgba};
use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert every image in a directory into a dot-style mosaic")]
struct Cli {
    /// Directory holding the input images (PNG or JPEG).
    #[arg(value_name = "INPUT_DIR", required_unless_present = "print_example")]
    input_dir: Option<PathBuf>,
    /// Directory receiving the PNG results.
    #[arg(value_name = "OUTPUT_DIR", required_unless_present = "print_example")]
    output_dir: Option<PathBuf>,
    /// Optional JSON config; command-line flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Source block size used for color averaging.
    #[arg(short, long, value_name = "PIXELS")]
    block_size: Option<usize>,
    /// Output cell size of each dot.
    #[arg(short, long, value_name = "PIXELS")]
    dot_size: Option<usize>,
    /// Spacing subtracted from the dot radius.
    #[arg(short, long, value_name = "PIXELS")]
    gap: Option<usize>,
    /// Do not ask before writing into the input directory.
    #[arg(short, long)]
    yes: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Emit per-stage spans in addition to per-file reports.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigJson {
    block_size: usize,
    dot_size: usize,
    gap: usize,
    background: [u8; 4],
    parallel: bool,
}

impl Default for ConfigJson {
    fn default() -> Self {
        let cfg = DotConfig::default();
        Self {
            block_size: cfg.block_size,
            dot_size: cfg.dot_size,
            gap: cfg.gap,
            background: cfg.background.to_array(),
            parallel: true,
        }
    }
}

impl From<ConfigJson> for DotConfig {
    fn from(value: ConfigJson) -> Self {
        Self {
            block_size: value.block_size,
            dot_size: value.dot_size,
            gap: value.gap,
            background: Rgba::from_array(value.background),
            parallel: value.parallel,
        }
    }
}

enum Confirmation {
    Proceed,
    Abort,
    Invalid,
}

fn parse_confirmation(answer: &str) -> Confirmation {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => Confirmation::Proceed,
        "no" | "n" => Confirmation::Abort,
        _ => Confirmation::Invalid,
    }
}

fn confirm_overwrite() -> io::Result<Confirmation> {
    println!("The input and output directories are set to same. This can override the input files.");
    print!("Are you sure? [yes|y|no|n] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_confirmation(&answer))
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn load_config(cli: &Cli) -> Result<DotConfig, Box<dyn std::error::Error>> {
    let json = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ConfigJson::default(),
    };
    let mut config = DotConfig::from(json);
    if let Some(block_size) = cli.block_size {
        config.block_size = block_size;
    }
    if let Some(dot_size) = cli.dot_size {
        config.dot_size = dot_size;
    }
    if let Some(gap) = cli.gap {
        config.gap = gap;
    }
    Ok(config)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let directive = if cli.trace { "dotmosaic=debug" } else { "dotmosaic=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_target(false)
        .init();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(input_dir), Some(output_dir)) = (&cli.input_dir, &cli.output_dir) else {
        return Err("INPUT_DIR and OUTPUT_DIR must be set".into());
    };
    let config = load_config(&cli)?;

    if !cli.yes && same_dir(input_dir, output_dir) {
        match confirm_overwrite()? {
            Confirmation::Proceed => {}
            Confirmation::Abort => return Ok(ExitCode::SUCCESS),
            Confirmation::Invalid => {
                println!("Invalid choice");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let files = list_input_files(input_dir)?;
    fs::create_dir_all(output_dir)?;
    let outcomes = convert_files(&files, output_dir, &config);
    let summary = BatchSummary::from_outcomes(&outcomes);
    tracing::info!(
        converted = summary.converted,
        failed = summary.failed,
        "batch finished"
    );

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
