use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use match_stats::analysis::analyze_matches;
use match_stats::corners::compute_corner_stats;
use match_stats::goals::compute_goal_probabilities;
use match_stats::model::{Match, MatchStatus, Team, TeamCornerProfile, TeamGoalProfile, VenueSplit};
use match_stats::policy::StatsPolicy;

fn sample_team(idx: usize) -> Team {
    let base = (idx % 5) as f64;
    Team {
        id: format!("t{idx}"),
        name: format!("Team {idx}"),
        short_name: format!("T{idx:02}"),
        league_position: Some((idx % 20) as u32 + 1),
        recent_form: vec!["W".to_string(), "D".to_string(), "L".to_string()],
        corners: TeamCornerProfile {
            scored_at_home: (0..10).map(|k| 4.0 + base + (k % 4) as f64).collect(),
            conceded_at_home: (0..10).map(|k| 2.0 + (k % 3) as f64).collect(),
            scored_away: (0..10).map(|k| 3.0 + base + (k % 3) as f64).collect(),
            conceded_away: (0..10).map(|k| 3.0 + (k % 5) as f64).collect(),
        },
        goals: TeamGoalProfile {
            goals_scored_avg: VenueSplit {
                total: 1.5 + base * 0.2,
                home: 1.8 + base * 0.2,
                away: 1.2 + base * 0.2,
            },
            goals_conceded_avg: VenueSplit {
                total: 1.1,
                home: 0.9,
                away: 1.3,
            },
            both_teams_scored_pct: 40.0 + base * 8.0,
            over25_pct: 35.0 + base * 10.0,
            matches_played: 10,
        },
    }
}

fn sample_matches(n: usize) -> Vec<Match> {
    (0..n)
        .map(|idx| Match {
            id: format!("m{idx}"),
            country: None,
            league: "Bench League".to_string(),
            kickoff_ts: None,
            status: MatchStatus::Scheduled,
            home_team: sample_team(idx * 2),
            away_team: sample_team(idx * 2 + 1),
            odds: None,
            score: None,
        })
        .collect()
}

fn bench_corner_stats(c: &mut Criterion) {
    let home = sample_team(3);
    let away = sample_team(8);
    c.bench_function("corner_stats", |b| {
        b.iter(|| black_box(compute_corner_stats(black_box(&home), black_box(&away))))
    });
}

fn bench_goal_probabilities(c: &mut Criterion) {
    let home = sample_team(1);
    let away = sample_team(4);
    c.bench_function("goal_probabilities", |b| {
        b.iter(|| black_box(compute_goal_probabilities(black_box(&home), black_box(&away))))
    });
}

fn bench_batch_analysis(c: &mut Criterion) {
    let matches = sample_matches(500);
    let policy = StatsPolicy::default();
    c.bench_function("analyze_matches_500", |b| {
        b.iter(|| {
            let out = analyze_matches(black_box(&matches), &policy);
            black_box(out.len());
        })
    });
}

criterion_group!(
    benches,
    bench_corner_stats,
    bench_goal_probabilities,
    bench_batch_analysis
);
criterion_main!(benches);
