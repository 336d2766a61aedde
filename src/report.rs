use std::fmt;
use std::io::{self, Write};

use crate::stats::DomainCountTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

impl fmt::Display for DomainCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain: {}, Customers: {}", self.domain, self.count)
    }
}

/// Domain counts in ascending byte-wise order of domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedDomainReport {
    entries: Vec<DomainCount>,
}

impl SortedDomainReport {
    pub fn from_counts(table: &DomainCountTable) -> Self {
        let mut entries: Vec<DomainCount> = table
            .iter()
            .map(|(domain, count)| DomainCount {
                domain: domain.to_string(),
                count,
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.domain.cmp(&b.domain));

        Self { entries }
    }

    pub fn entries(&self) -> &[DomainCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn write_report<W: Write>(report: &SortedDomainReport, mut writer: W) -> io::Result<()> {
    for entry in report.entries() {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()
}

pub fn print_report(report: &SortedDomainReport) -> io::Result<()> {
    write_report(report, io::stdout().lock())
}
