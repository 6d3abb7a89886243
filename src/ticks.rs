//! Typed boundary over the tick export.
//!
//! Each row is deserialized into an [`Ascent`] up front so that a missing
//! required column fails fast with the offending row position instead of
//! surfacing as a field lookup deep in the pipeline.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One logged ascent from the tick export. The export carries many more
/// columns (date, pitches, notes); only the four named here are required.
#[derive(Debug, Clone, Deserialize)]
pub struct Ascent {
    /// Route name; repeats across the log when a route is climbed more
    /// than once.
    #[serde(rename = "Route")]
    pub route: String,
    /// Raw grade, possibly suffixed with a protection rating.
    #[serde(rename = "Rating")]
    pub rating: String,
    /// Comma-space separated category list such as "Sport, TR".
    #[serde(rename = "Route Type")]
    pub route_type: String,
    /// How the ascent was led ("Redpoint", "Onsight", "Fell/Hung", ...).
    #[serde(rename = "Lead Style")]
    pub lead_style: String,
}

pub fn read_ticks(path: &Path) -> Result<Vec<Ascent>> {
    let file = File::open(path).with_context(|| format!("Opening input file {path:?}"))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .double_quote(true)
        .flexible(false)
        .from_reader(BufReader::new(file));

    let mut ascents = Vec::new();
    for (row_idx, record) in reader.deserialize::<Ascent>().enumerate() {
        let ascent = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        ascents.push(ascent);
    }
    Ok(ascents)
}
