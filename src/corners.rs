use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::Team;
use crate::numeric::{mean_one_decimal, round_half_up, round_to_decimals};
use crate::policy::CornerPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineSide {
    Over,
    Under,
}

impl fmt::Display for LineSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSide::Over => f.write_str("OVER"),
            LineSide::Under => f.write_str("UNDER"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerStatsResult {
    /// Home side's corners won, home matches only.
    pub home_avg_corners: f64,
    /// Away side's corners won, away matches only.
    pub away_avg_corners: f64,
    pub home_conceded_avg: f64,
    pub away_conceded_avg: f64,
    pub total_expected_corners: f64,
    pub likely_line: f64,
    pub suggestion: LineSide,
    pub insights: Vec<String>,
}

impl CornerStatsResult {
    pub fn line_label(&self) -> String {
        format!("{} {}", self.suggestion, self.likely_line)
    }
}

pub fn compute_corner_stats(home: &Team, away: &Team) -> CornerStatsResult {
    compute_corner_stats_with(home, away, &CornerPolicy::default())
}

pub fn compute_corner_stats_with(
    home: &Team,
    away: &Team,
    policy: &CornerPolicy,
) -> CornerStatsResult {
    let home_avg_for = mean_one_decimal(&home.corners.scored_at_home);
    let home_avg_against = mean_one_decimal(&home.corners.conceded_at_home);
    let away_avg_for = mean_one_decimal(&away.corners.scored_away);
    let away_avg_against = mean_one_decimal(&away.corners.conceded_away);

    // Each side's attack is blended with the opponent's concession at the same venue.
    let home_expected = (home_avg_for + away_avg_against) / 2.0;
    let away_expected = (away_avg_for + home_avg_against) / 2.0;
    let total_expected = round_to_decimals(home_expected + away_expected, 1);

    let likely_line = suggested_line(total_expected, policy.min_line);
    // Compared against a line derived from the total itself, so UNDER only shows
    // at the floor or when the total lands on a half.
    let suggestion = if total_expected > likely_line {
        LineSide::Over
    } else {
        LineSide::Under
    };

    let mut insights = Vec::new();
    if home_avg_for > policy.home_attack_threshold {
        insights.push(format!(
            "{} strong home corner attack (avg {home_avg_for})",
            home.label()
        ));
    }
    if away_avg_against > policy.away_concede_threshold {
        insights.push(format!(
            "{} concedes many corners away (avg {away_avg_against})",
            away.label()
        ));
    }
    if total_expected > policy.high_total_threshold {
        insights.push("High chance of a 10+ corner match".to_string());
    }
    if total_expected < policy.low_total_threshold {
        insights.push("Low corner count expected (Under)".to_string());
    }

    trace!(
        home_expected,
        away_expected,
        total_expected,
        likely_line,
        insights = insights.len(),
        "corner stats computed"
    );

    CornerStatsResult {
        home_avg_corners: home_avg_for,
        away_avg_corners: away_avg_for,
        home_conceded_avg: home_avg_against,
        away_conceded_avg: away_avg_against,
        total_expected_corners: total_expected,
        likely_line,
        suggestion,
        insights,
    }
}

fn suggested_line(total_expected: f64, min_line: f64) -> f64 {
    let line = round_half_up(total_expected) - 0.5;
    if line < min_line { min_line } else { line }
}
