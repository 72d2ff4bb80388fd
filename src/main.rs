//! Command-line interface for synth-table
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Defaults: 1000 rows, 3 numeric and 3 categorical columns
//! synth-table generate -o data.csv
//!
//! # Null-heavy, constant and datetime columns plus overlays
//! synth-table generate --rows 500 \
//!   --null-columns 2 --null-fraction 0.2 \
//!   --constant-columns 1 --constant-column-name contract_type --constant-value CONTRACT \
//!   --datetime-columns 2 --datetime-format "%d-%b-%Y" \
//!   --null-overlay first_name=0.1 --null-overlay city=0.15 \
//!   --seed 42 -o data.csv
//!
//! # From a YAML config
//! synth-table generate --config generator.yaml -o data.csv
//! ```
//!
//! ## Example
//! ```bash
//! # Fixed illustrative table written to synthetic_data.csv
//! synth-table example
//! ```
//!
//! ## Describe
//! ```bash
//! synth-table describe --rows 100 --head 5
//! synth-table describe --config generator.yaml --json
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use synth_table::report::{log_summary, render_text, TableReport};
use synth_table::{
    example_config, CommonGenerateArgs, CsvPopulateArgs, CsvPopulator, GeneratorConfig, Table,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "synth-table")]
#[command(about = "Generate synthetic mixed-type tables for data-cleaning demos")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a table and write it as CSV
    Generate {
        #[command(flatten)]
        args: CsvPopulateArgs,
    },

    /// Write the fixed illustrative table
    Example {
        /// Output CSV file
        #[arg(long, short = 'o', default_value = synth_table::EXAMPLE_OUTPUT)]
        output: PathBuf,
    },

    /// Generate a table and print its shape, schema and null counts
    Describe {
        #[command(flatten)]
        common: CommonGenerateArgs,

        /// Number of leading rows to print
        #[arg(long, default_value = "5")]
        head: usize,

        /// Print the schema report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let config = load_config(&args.common)?;
            let table = generate_table(&config);
            write_csv(&table, &args.output, !args.no_header)?;
        }
        Commands::Example { output } => {
            let config = example_config();
            let table = generate_table(&config);
            print!("{}", render_text(&table, 5));
            write_csv(&table, &output, true)?;
        }
        Commands::Describe { common, head, json } => {
            let config = load_config(&common)?;
            let table = generate_table(&config);
            if json {
                let report = TableReport::new(&table)
                    .to_json()
                    .context("Failed to serialize table report")?;
                println!("{report}");
            } else {
                print!("{}", render_text(&table, head));
            }
        }
    }

    Ok(())
}

fn load_config(args: &CommonGenerateArgs) -> anyhow::Result<GeneratorConfig> {
    let config = args.to_config().with_context(|| match &args.config {
        Some(path) => format!("Failed to load generator config from {}", path.display()),
        None => "Failed to build generator config".to_string(),
    })?;
    Ok(config)
}

fn generate_table(config: &GeneratorConfig) -> Table {
    info!(
        "Generating {} rows across {} columns (seed: {:?})",
        config.n_rows,
        config.total_columns(),
        config.seed
    );
    let table = synth_table::generate(config);
    log_summary(&table);
    table
}

fn write_csv(table: &Table, output: &Path, include_header: bool) -> anyhow::Result<()> {
    let metrics = CsvPopulator::new()
        .with_header(include_header)
        .populate(table, output)
        .with_context(|| format!("Failed to write CSV file {}", output.display()))?;
    info!(
        "Wrote {} rows ({} bytes) to {}",
        metrics.rows_written,
        metrics.file_size_bytes,
        output.display()
    );
    Ok(())
}
