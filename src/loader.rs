use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::model::Match;

#[derive(Deserialize)]
#[serde(untagged)]
enum MatchFile {
    Many(Vec<Match>),
    One(Box<Match>),
}

/// Accepts either a JSON array of matches or a single match object.
pub fn parse_matches_json(raw: &str) -> Result<Vec<Match>> {
    let parsed: MatchFile = serde_json::from_str(raw).context("parse match json")?;
    Ok(match parsed {
        MatchFile::Many(matches) => matches,
        MatchFile::One(m) => vec![*m],
    })
}

pub fn load_matches(path: &Path) -> Result<Vec<Match>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read match file {}", path.display()))?;
    let matches = parse_matches_json(&raw)
        .with_context(|| format!("load match file {}", path.display()))?;
    debug!(path = %path.display(), count = matches.len(), "loaded matches");
    Ok(matches)
}
