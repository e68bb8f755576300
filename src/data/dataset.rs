//! Season table loader.
//!
//! Reads the CSV export once at startup into an immutable, team-keyed
//! table. The header is checked against the required columns before any
//! row is parsed so a renamed or missing column fails fast.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::types::{MatchupError, Metric, TeamRecord};

/// Columns the season CSV must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "TEAM",
    "RECORD",
    "PF",
    "PA",
    "PSR_POINTS",
    "PSR_QB",
    "OFF",
    "DEF",
    "PROJ_WINS",
    "PROJ_PLAYOFFS",
    "PROJ_DIV",
    "PROJ_CONF",
    "PROJ_SB",
    "SOS_TO_DATE",
    "SOS_REMAIN",
    "OVER",
    "PAS",
    "PBLK",
    "RECV",
    "RUN",
    "RBLK",
    "RDEF",
    "TACK",
    "PRSH",
    "COV",
    "SPEC",
];

/// Immutable season table keyed by team identifier.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TeamRecord>,
    index: HashMap<String, usize>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Load the table from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open dataset: {}", path.display()))?;
        let dataset = Self::from_reader(file, &path.display().to_string())
            .with_context(|| format!("Failed to load dataset: {}", path.display()))?;

        info!(
            path = %path.display(),
            teams = dataset.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse the table from any CSV source. `source` is used for logging only.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers().context("Failed to read CSV header")?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(MatchupError::Dataset(format!(
                "missing columns: {}",
                missing.join(", ")
            ))
            .into());
        }

        let mut records = Vec::new();
        for (i, row) in rdr.deserialize::<TeamRecord>().enumerate() {
            // Header is line 1.
            let record = row.with_context(|| format!("Invalid row at line {}", i + 2))?;
            records.push(record);
        }

        Self::from_records(records, source)
    }

    /// Build the table from already-parsed records.
    ///
    /// Team order follows input order. When an identifier repeats, the
    /// first row is kept. Every metric must be finite.
    pub fn from_records(rows: Vec<TeamRecord>, source: &str) -> Result<Self> {
        if rows.is_empty() {
            return Err(MatchupError::Dataset(format!("{source} contains no teams")).into());
        }

        let mut records = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        for record in rows {
            if let Some(metric) = Metric::ALL.iter().find(|&&m| !record.value(m).is_finite()) {
                return Err(MatchupError::Dataset(format!(
                    "non-finite {} for {}",
                    metric.column(),
                    record.team
                ))
                .into());
            }
            if index.contains_key(&record.team) {
                warn!(team = %record.team, source, "Duplicate team row ignored");
                continue;
            }
            index.insert(record.team.clone(), records.len());
            records.push(record);
        }

        Ok(Self {
            records,
            index,
            source: source.to_string(),
            loaded_at: Utc::now(),
        })
    }

    /// Look up a team by identifier.
    pub fn get(&self, team: &str) -> Option<&TeamRecord> {
        self.index.get(team).map(|&i| &self.records[i])
    }

    /// Look up a team, failing with `TeamNotFound`.
    pub fn require(&self, team: &str) -> std::result::Result<&TeamRecord, MatchupError> {
        self.get(team)
            .ok_or_else(|| MatchupError::TeamNotFound(team.to_string()))
    }

    /// Team identifiers in table order.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.team.as_str())
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
