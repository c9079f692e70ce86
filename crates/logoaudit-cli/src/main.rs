use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use logoaudit_core::ContractVersion;

mod audit;
mod slice;

#[derive(Debug, Parser)]
#[command(name = "logoaudit")]
#[command(about = "Grid slicing and model-scored audits for logo batches")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ContractArg {
    /// Eight product dimensions, every category always scored.
    Product,
    /// Product dimensions with icon/container allowed to be not-applicable.
    ProductGated,
    /// Defect-tag checklist over six QA dimensions.
    BugHunt,
}

impl From<ContractArg> for ContractVersion {
    fn from(arg: ContractArg) -> Self {
        match arg {
            ContractArg::Product => ContractVersion::Product,
            ContractArg::ProductGated => ContractVersion::ProductGated,
            ContractArg::BugHunt => ContractVersion::BugHunt,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Slice grid screenshots into per-batch tile directories.
    Slice {
        /// Directory of composite screenshots (default from config).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Where to write tiles (default from config).
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        rows: Option<u32>,
        #[arg(long)]
        cols: Option<u32>,
    },
    /// Score sliced tiles against a rubric contract and write the CSV report.
    Audit {
        #[arg(long, value_enum, default_value_t = ContractArg::Product)]
        contract: ContractArg,
        /// Root directory of sliced batches (default from config).
        #[arg(long)]
        slices: Option<PathBuf>,
        /// Report output path (default from config).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Per-batch sample cap; 0 audits everything (default from config).
        #[arg(long)]
        limit: Option<usize>,
        /// Seed for reproducible sampling.
        #[arg(long)]
        seed: Option<u64>,
        /// List what would be audited without calling the model.
        #[arg(long)]
        dry_run: bool,
    },
    /// Record one human comparison vote.
    Vote {
        #[arg(long)]
        user: String,
        #[arg(long)]
        winner_source: String,
        #[arg(long)]
        loser_source: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        winner_file: String,
        #[arg(long)]
        loser_file: String,
        /// Votes file (appended, created with header if absent).
        #[arg(long, default_value = "human_pulse_results.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse first so `--help` and usage errors never depend on the
    // environment being well-formed.
    let cli = Cli::parse();

    let config = logoaudit_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    match cli.command {
        Commands::Slice {
            input,
            output,
            rows,
            cols,
        } => {
            let input = input.unwrap_or_else(|| config.screenshots_dir.clone());
            let output = output.unwrap_or_else(|| config.slices_dir.clone());
            slice::run_slice(
                &input,
                &output,
                rows.unwrap_or(config.grid_rows),
                cols.unwrap_or(config.grid_cols),
            )
        }
        Commands::Audit {
            contract,
            slices,
            out,
            limit,
            seed,
            dry_run,
        } => {
            let slices = slices.unwrap_or_else(|| config.slices_dir.clone());
            let out = out.unwrap_or_else(|| config.report_path.clone());
            let limit = limit.unwrap_or(config.sample_limit);
            let seed = seed.or(config.sample_seed);
            audit::run_audit(
                &config,
                contract.into(),
                &slices,
                &out,
                limit,
                seed,
                dry_run,
            )
            .await
        }
        Commands::Vote {
            user,
            winner_source,
            loser_source,
            industry,
            winner_file,
            loser_file,
            out,
        } => {
            let record = logoaudit_report::VoteRecord {
                user,
                winner_source,
                loser_source,
                industry,
                timestamp: chrono::Utc::now(),
                winner_filename: winner_file,
                loser_filename: loser_file,
            };
            logoaudit_report::append_vote(&out, &record)?;
            println!("vote recorded in {}", out.display());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
