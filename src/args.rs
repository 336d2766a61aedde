use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "customer-domains",
    about = "Count customers per email domain from a CSV export",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file with first name, last name, email, gender and IP columns
    #[arg(short, long, default_value = "customers.csv")]
    pub input: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a run summary to stderr after the report
    #[arg(long)]
    pub summary: bool,
}
