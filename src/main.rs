use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use customer_domains::{analysis, print_report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match analysis::analyze_customers(&args.input) {
        Ok(result) => {
            print_report(&result.report).context("Failed to write report")?;
            if args.summary {
                analysis::print_summary(&result.stats);
            }
            Ok(())
        }
        Err(e) => {
            error!(
                action = "abort",
                component = "customer_analysis",
                error = %format!("{e:#}"),
                "Analysis failed"
            );
            std::process::exit(1);
        }
    }
}
