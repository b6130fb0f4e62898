use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const POLICY_PATH_ENV: &str = "STATS_POLICY_PATH";

const HOME_ATTACK_CORNERS: f64 = 7.0;
const AWAY_CONCEDE_CORNERS: f64 = 6.0;
const HIGH_TOTAL_CORNERS: f64 = 10.5;
const LOW_TOTAL_CORNERS: f64 = 8.5;
const MIN_CORNER_LINE: f64 = 8.5;

const BTTS_EXPECTANCY: f64 = 0.9;
const BTTS_ADJUSTMENT: f64 = 10.0;
const OVER25_GOAL_LINE: f64 = 2.5;
const OVER25_SLOPE: f64 = 20.0;
const PROB_FLOOR: u8 = 5;
const PROB_CEILING: u8 = 95;
const OVER05_PROB: u8 = 95;
const OVER15_MARGIN: u8 = 20;
const OVER15_CEILING: u8 = 90;

static ACTIVE: OnceCell<StatsPolicy> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerPolicy {
    /// Home corners-for average above which the home attack note fires.
    pub home_attack_threshold: f64,
    /// Away corners-against average above which the away defence note fires.
    pub away_concede_threshold: f64,
    pub high_total_threshold: f64,
    pub low_total_threshold: f64,
    /// Lowest line ever suggested.
    pub min_line: f64,
}

impl Default for CornerPolicy {
    fn default() -> Self {
        Self {
            home_attack_threshold: HOME_ATTACK_CORNERS,
            away_concede_threshold: AWAY_CONCEDE_CORNERS,
            high_total_threshold: HIGH_TOTAL_CORNERS,
            low_total_threshold: LOW_TOTAL_CORNERS,
            min_line: MIN_CORNER_LINE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalPolicy {
    /// Both expectancies must exceed this for the positive BTTS nudge.
    pub btts_expectancy_threshold: f64,
    pub btts_adjustment: f64,
    pub over25_goal_line: f64,
    /// Percentage points per goal of expectancy above/below the line.
    pub over25_slope: f64,
    pub prob_floor: u8,
    pub prob_ceiling: u8,
    pub over05_prob: u8,
    pub over15_margin: u8,
    pub over15_ceiling: u8,
}

impl Default for GoalPolicy {
    fn default() -> Self {
        Self {
            btts_expectancy_threshold: BTTS_EXPECTANCY,
            btts_adjustment: BTTS_ADJUSTMENT,
            over25_goal_line: OVER25_GOAL_LINE,
            over25_slope: OVER25_SLOPE,
            prob_floor: PROB_FLOOR,
            prob_ceiling: PROB_CEILING,
            over05_prob: OVER05_PROB,
            over15_margin: OVER15_MARGIN,
            over15_ceiling: OVER15_CEILING,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsPolicy {
    pub corners: CornerPolicy,
    pub goals: GoalPolicy,
}

impl StatsPolicy {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parse stats policy")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read stats policy {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).context("serialize stats policy")?;
        fs::write(&tmp, json).context("write stats policy")?;
        fs::rename(&tmp, path).context("swap stats policy")?;
        Ok(())
    }
}

/// Policy for this process: the file named by `STATS_POLICY_PATH` if it loads,
/// defaults otherwise. Resolved once.
pub fn active_policy() -> &'static StatsPolicy {
    ACTIVE.get_or_init(|| resolve_policy(policy_path()))
}

fn resolve_policy(path: Option<PathBuf>) -> StatsPolicy {
    let Some(path) = path else {
        return StatsPolicy::default();
    };
    match StatsPolicy::load(&path) {
        Ok(policy) => {
            debug!(path = %path.display(), "loaded stats policy");
            policy
        }
        Err(err) => {
            let reason = format!("{err:#}");
            warn!(
                path = %path.display(),
                error = %reason,
                "falling back to default stats policy"
            );
            StatsPolicy::default()
        }
    }
}

fn policy_path() -> Option<PathBuf> {
    std::env::var(POLICY_PATH_ENV)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .map(PathBuf::from)
}
