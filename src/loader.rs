use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Number of columns in a customer row.
pub const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub ip_address: String,
}

impl CustomerRecord {
    /// Maps a row positionally; `None` unless it has exactly [`FIELD_COUNT`] fields.
    pub fn from_row(row: &StringRecord) -> Option<Self> {
        if row.len() != FIELD_COUNT {
            return None;
        }
        Some(Self {
            first_name: row[0].to_string(),
            last_name: row[1].to_string(),
            email: row[2].to_string(),
            gender: row[3].to_string(),
            ip_address: row[4].to_string(),
        })
    }
}

/// A row rejected for having the wrong number of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: Option<u64>,
    pub fields: Vec<String>,
}

#[derive(Debug, Default)]
pub struct LoadedCustomers {
    pub records: Vec<CustomerRecord>,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read customer file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse customer file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub fn load_customers(path: &Path) -> Result<LoadedCustomers, LoadError> {
    let start_time = Instant::now();
    info!(action = "start", component = "customer_loading", file_path = ?path, "Loading customer file");

    let input = read_input(path)?;
    let rows = parse_rows(path, &input)?;
    let loaded = partition_rows(rows);

    info!(
        action = "complete",
        component = "customer_loading",
        record_count = loaded.records.len(),
        skipped_count = loaded.skipped.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Customer file loaded"
    );
    Ok(loaded)
}

// The file handle lives only as long as this call.
fn read_input(path: &Path) -> Result<Vec<u8>, LoadError> {
    let file_access = |source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(file_access)?;
    let mut input = Vec::new();
    file.read_to_end(&mut input).map_err(file_access)?;
    Ok(input)
}

/// Parses every row up front, pairing each with the input line it starts on.
fn parse_rows(path: &Path, input: &[u8]) -> Result<Vec<(Option<u64>, StringRecord)>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    reader
        .records()
        .map(|row| -> Result<_, LoadError> {
            let row = row.map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            let line = row.position().map(|p| start_line(input, p.byte()));
            Ok((line, row))
        })
        .collect()
}

/// 1-based line of the first byte of the record at `offset`.
///
/// The reader's offset can sit on the terminator of the previous line or on
/// blank lines it skipped, so those bytes are stepped over first.
fn start_line(input: &[u8], offset: u64) -> u64 {
    let mut start = usize::try_from(offset).map_or(input.len(), |o| o.min(input.len()));
    while matches!(input.get(start), Some(b'\r' | b'\n')) {
        start += 1;
    }
    bytecount::count(&input[..start], b'\n') as u64 + 1
}

/// Splits rows into customer records and skipped-row diagnostics, keeping input order.
pub fn partition_rows<I>(rows: I) -> LoadedCustomers
where
    I: IntoIterator<Item = (Option<u64>, StringRecord)>,
{
    let mut loaded = LoadedCustomers::default();

    for (line, row) in rows {
        match CustomerRecord::from_row(&row) {
            Some(record) => loaded.records.push(record),
            None => {
                let skipped = SkippedRow {
                    line,
                    fields: row.iter().map(str::to_string).collect(),
                };
                warn!(
                    action = "skip",
                    component = "row_validation",
                    line_number = ?skipped.line,
                    field_count = row.len(),
                    row = ?skipped.fields,
                    "Skipping invalid line"
                );
                loaded.skipped.push(skipped);
            }
        }
    }

    loaded
}
