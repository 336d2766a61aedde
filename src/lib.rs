pub mod analysis;
pub mod args;
pub mod domain;
pub mod loader;
pub mod report;
pub mod stats;
pub mod utils;

pub use analysis::analyze_customers;
pub use args::Args;
pub use domain::extract_domain;
pub use loader::{load_customers, CustomerRecord, LoadError, LoadedCustomers, SkippedRow};
pub use report::{print_report, write_report, DomainCount, SortedDomainReport};
pub use stats::{aggregate, AnalysisResult, DomainCountTable, RunStats};
