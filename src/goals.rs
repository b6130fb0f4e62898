use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::Team;
use crate::numeric::{clamp, non_negative, percentage, round_half_up, round_to_decimals};
use crate::policy::GoalPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProbabilities {
    pub avg_goals_match: f64,
    pub home_goal_expectancy: f64,
    pub away_goal_expectancy: f64,
    pub btts_prob: u8,
    pub over05_prob: u8,
    pub over15_prob: u8,
    pub over25_prob: u8,
}

pub fn compute_goal_probabilities(home: &Team, away: &Team) -> GoalProbabilities {
    compute_goal_probabilities_with(home, away, &GoalPolicy::default())
}

pub fn compute_goal_probabilities_with(
    home: &Team,
    away: &Team,
    policy: &GoalPolicy,
) -> GoalProbabilities {
    let h = &home.goals;
    let a = &away.goals;

    let home_expectancy =
        (non_negative(h.goals_scored_avg.home) + non_negative(a.goals_conceded_avg.away)) / 2.0;
    let away_expectancy =
        (non_negative(a.goals_scored_avg.away) + non_negative(h.goals_conceded_avg.home)) / 2.0;
    let total_expectancy = home_expectancy + away_expectancy;

    let btts_base =
        (percentage(h.both_teams_scored_pct) + percentage(a.both_teams_scored_pct)) / 2.0;
    let both_likely_to_score = home_expectancy > policy.btts_expectancy_threshold
        && away_expectancy > policy.btts_expectancy_threshold;
    let btts_adjustment = if both_likely_to_score {
        policy.btts_adjustment
    } else {
        -policy.btts_adjustment
    };
    let btts_prob = bounded_prob(btts_base + btts_adjustment, policy);

    // Linear stand-in for a Poisson tail: each goal of expectancy over the line
    // is worth `over25_slope` points.
    let over25_base = (percentage(h.over25_pct) + percentage(a.over25_pct)) / 2.0;
    let over25_adjustment = (total_expectancy - policy.over25_goal_line) * policy.over25_slope;
    let over25_prob = bounded_prob(over25_base + over25_adjustment, policy);

    // Capped above only; ends up below over25 once over25 passes the cap.
    let over15_prob = over25_prob
        .saturating_add(policy.over15_margin)
        .min(policy.over15_ceiling);

    trace!(
        home_expectancy,
        away_expectancy,
        btts_base,
        over25_base,
        over25_adjustment,
        "goal probabilities computed"
    );

    GoalProbabilities {
        avg_goals_match: round_to_decimals(total_expectancy, 2),
        home_goal_expectancy: round_to_decimals(home_expectancy, 2),
        away_goal_expectancy: round_to_decimals(away_expectancy, 2),
        btts_prob,
        over05_prob: policy.over05_prob,
        over15_prob,
        over25_prob,
    }
}

fn bounded_prob(raw: f64, policy: &GoalPolicy) -> u8 {
    let rounded = round_half_up(raw);
    let bounded = clamp(
        rounded,
        f64::from(policy.prob_floor),
        f64::from(policy.prob_ceiling),
    );
    bounded as u8
}
