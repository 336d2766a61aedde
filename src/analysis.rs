use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::loader::load_customers;
use crate::report::SortedDomainReport;
use crate::stats::{aggregate, AnalysisResult, RunStats};

pub fn analyze_customers(input: &Path) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "customer_analysis", input = ?input, "Starting customer domain analysis");

    let loaded = load_customers(input)
        .with_context(|| format!("Error reading customers from file {}", input.display()))?;

    let table = aggregate(&loaded.records);
    let report = SortedDomainReport::from_counts(&table);

    let stats = RunStats {
        records_loaded: loaded.records.len(),
        rows_skipped: loaded.skipped.len(),
        without_domain: table.without_domain(),
        unique_domains: report.len(),
    };

    info!(
        action = "complete",
        component = "customer_analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult { report, stats })
}

pub fn print_summary(stats: &RunStats) {
    eprintln!("\n--- Customer Summary ---");
    eprintln!("Records loaded: {}", stats.records_loaded);
    eprintln!("Rows skipped (wrong field count): {}", stats.rows_skipped);
    eprintln!("Records without a domain: {}", stats.without_domain);
    eprintln!("Distinct domains: {}", stats.unique_domains);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn analyzes_valid_and_invalid_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        fs::write(
            &path,
            "Jo,Lee,jo@foo.com,F,1.1.1.1\n\
             Al,Ng,al@foo.com,M\n\
             Bo,Ka,weird@@case.com,M,1.1.1.3\n\
             Cy,Ro,cy@bar.com,F,1.1.1.4\n",
        )
        .unwrap();

        let result = analyze_customers(&path).unwrap();

        assert_eq!(
            result.stats,
            RunStats {
                records_loaded: 3,
                rows_skipped: 1,
                without_domain: 1,
                unique_domains: 2,
            }
        );
        let lines: Vec<_> = result.report.entries().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["Domain: bar.com, Customers: 1", "Domain: foo.com, Customers: 1"]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze_customers(&dir.path().join("absent.csv")).unwrap_err();

        assert!(format!("{err:#}").contains("absent.csv"));
    }
}
