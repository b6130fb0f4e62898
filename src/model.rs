use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamCornerProfile {
    // Recent matches, most recent last; corners won / conceded per match.
    #[serde(default)]
    pub scored_at_home: Vec<f64>,
    #[serde(default)]
    pub conceded_at_home: Vec<f64>,
    #[serde(default)]
    pub scored_away: Vec<f64>,
    #[serde(default)]
    pub conceded_away: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueSplit {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub home: f64,
    #[serde(default)]
    pub away: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamGoalProfile {
    #[serde(default)]
    pub goals_scored_avg: VenueSplit,
    #[serde(default)]
    pub goals_conceded_avg: VenueSplit,
    /// Share of recent matches (0..=100) where both sides scored.
    #[serde(default)]
    pub both_teams_scored_pct: f64,
    /// Share of recent matches (0..=100) with three or more goals.
    #[serde(default)]
    pub over25_pct: f64,
    #[serde(default)]
    pub matches_played: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub league_position: Option<u32>,
    #[serde(default)]
    pub recent_form: Vec<String>,
    #[serde(default)]
    pub corners: TeamCornerProfile,
    #[serde(default)]
    pub goals: TeamGoalProfile,
}

impl Team {
    pub fn label(&self) -> &str {
        if self.short_name.trim().is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Recent price movement per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsTrend {
    pub home: TrendDirection,
    pub draw: TrendDirection,
    pub away: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub trend: Option<OddsTrend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub league: String,
    /// Kickoff as unix seconds.
    #[serde(default)]
    pub kickoff_ts: Option<i64>,
    #[serde(default)]
    pub status: MatchStatus,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub odds: Option<Odds>,
    #[serde(default)]
    pub score: Option<Score>,
}

impl Match {
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        self.kickoff_ts.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
    }

    /// Kicks off after midnight (UTC) of the day containing `now`. Status is not
    /// consulted, so today's live and finished matches stay in the list. A match
    /// without a kickoff time never qualifies.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        self.kickoff().is_some_and(|kickoff| kickoff > day_start)
    }
}
