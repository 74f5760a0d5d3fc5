//! Trip file loading
//!
//! A trip file is the JSON snapshot the engine's input collaborator
//! contract describes: the member list plus the expense and share records.
//! The engine itself performs no I/O; this module is the cli's data source.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use trip_settlement_core_rs::{currencies, ExpenseRecord, Member, Roster, ShareRecord};

/// On-disk trip snapshot
#[derive(Debug, Deserialize)]
pub struct TripFile {
    pub name: String,
    pub members: Vec<Member>,

    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,

    #[serde(default)]
    pub shares: Vec<ShareRecord>,
}

impl TripFile {
    /// Load and parse a trip JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trip file {}", path.display()))?;
        let trip: TripFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse trip file {}", path.display()))?;
        Ok(trip)
    }

    /// Build the engine's roster from the member list
    ///
    /// Duplicate member ids in the file are rejected here, at the boundary,
    /// before anything reaches the engine.
    pub fn roster(&self) -> Result<Roster> {
        Roster::new(self.members.clone()).context("Invalid member list")
    }

    /// Currency buckets present in this trip, sorted
    pub fn currencies(&self) -> Vec<String> {
        currencies(&self.expenses)
    }
}
