use std::collections::HashMap;
use std::time::Instant;
use tracing::info;

use crate::domain::extract_domain;
use crate::loader::CustomerRecord;
use crate::report::SortedDomainReport;

/// Customer counts keyed by email domain.
///
/// Backed by a `HashMap`; iteration order carries no meaning; go through
/// [`SortedDomainReport`] for ordered output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DomainCountTable {
    counts: HashMap<String, u64>,
    without_domain: u64,
}

impl DomainCountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one customer for `domain`. Empty domains and ones containing
    /// `@` are not valid keys and are refused.
    pub fn record(&mut self, domain: &str) -> bool {
        if domain.is_empty() || domain.contains('@') {
            return false;
        }
        *self.counts.entry(domain.to_string()).or_insert(0) += 1;
        true
    }

    pub fn get(&self, domain: &str) -> Option<u64> {
        self.counts.get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Records that yielded no domain or a domain refused as a key.
    pub fn without_domain(&self) -> u64 {
        self.without_domain
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(domain, count)| (domain.as_str(), *count))
    }
}

pub fn aggregate<'a, I>(records: I) -> DomainCountTable
where
    I: IntoIterator<Item = &'a CustomerRecord>,
{
    let start_time = Instant::now();
    let mut table = DomainCountTable::new();

    for record in records {
        let counted = extract_domain(&record.email).is_some_and(|domain| table.record(domain));
        if !counted {
            table.without_domain += 1;
        }
    }

    info!(
        action = "complete",
        component = "domain_aggregation",
        unique_domains = table.len(),
        without_domain = table.without_domain,
        duration_ms = start_time.elapsed().as_millis(),
        "Domain aggregation completed"
    );
    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub records_loaded: usize,
    pub rows_skipped: usize,
    pub without_domain: u64,
    pub unique_domains: usize,
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub report: SortedDomainReport,
    pub stats: RunStats,
}
