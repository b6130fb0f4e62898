use std::env;

use once_cell::sync::OnceCell;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corners::{CornerStatsResult, compute_corner_stats_with};
use crate::goals::{GoalProbabilities, compute_goal_probabilities_with};
use crate::model::Match;
use crate::policy::StatsPolicy;

const PARALLELISM_ENV: &str = "STATS_PARALLELISM";

static POOL: OnceCell<Option<rayon::ThreadPool>> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub match_id: String,
    pub league: String,
    pub home: String,
    pub away: String,
    pub corners: CornerStatsResult,
    pub goals: GoalProbabilities,
}

pub fn analyze_match(m: &Match, policy: &StatsPolicy) -> MatchAnalysis {
    MatchAnalysis {
        match_id: m.id.clone(),
        league: m.league.clone(),
        home: m.home_team.label().to_string(),
        away: m.away_team.label().to_string(),
        corners: compute_corner_stats_with(&m.home_team, &m.away_team, &policy.corners),
        goals: compute_goal_probabilities_with(&m.home_team, &m.away_team, &policy.goals),
    }
}

/// Analyzes every match in parallel; output order follows input order.
pub fn analyze_matches(matches: &[Match], policy: &StatsPolicy) -> Vec<MatchAnalysis> {
    debug!(count = matches.len(), "analyzing matches");
    with_pool(|| {
        matches
            .par_iter()
            .map(|m| analyze_match(m, policy))
            .collect()
    })
}

fn with_pool<T>(action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    match POOL.get_or_init(build_pool) {
        Some(pool) => pool.install(action),
        None => action(),
    }
}

fn build_pool() -> Option<rayon::ThreadPool> {
    let threads = parallelism();
    debug!(threads, "building analysis pool");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .ok()
}

fn parallelism() -> usize {
    env::var(PARALLELISM_ENV)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(4)
        .clamp(1, 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_built_once_and_reused() {
        let policy = StatsPolicy::default();
        assert!(analyze_matches(&[], &policy).is_empty());
        let first = POOL.get().expect("pool initialised by first batch") as *const _;
        assert!(analyze_matches(&[], &policy).is_empty());
        let second = POOL.get().expect("pool still initialised") as *const _;
        assert!(std::ptr::eq(first, second));
    }
}
