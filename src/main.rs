use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use match_stats::analysis::{MatchAnalysis, analyze_matches};
use match_stats::loader::load_matches;
use match_stats::policy::{StatsPolicy, active_policy};

// Sample fixture shipped with the source tree; used when no file is given.
const DEFAULT_MATCH_FILE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/matches.json");

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = positional_arg()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MATCH_FILE));
    let policy = match parse_path_arg("--policy") {
        Some(policy_path) => StatsPolicy::load(&policy_path)?,
        None => *active_policy(),
    };

    let mut matches = load_matches(&path)?;
    if has_flag("--upcoming") {
        let now = Utc::now();
        matches.retain(|m| m.is_upcoming(now));
    }

    let analyses = analyze_matches(&matches, &policy);
    if has_flag("--json") {
        let json = serde_json::to_string_pretty(&analyses).context("serialize analyses")?;
        println!("{json}");
    } else {
        for analysis in &analyses {
            print_report(analysis);
        }
    }

    Ok(())
}

fn print_report(a: &MatchAnalysis) {
    println!("{} vs {} ({}) [{}]", a.home, a.away, a.league, a.match_id);
    println!(
        "  Corners  home {:.1} | expected {:.1} | away {:.1}   {}",
        a.corners.home_avg_corners,
        a.corners.total_expected_corners,
        a.corners.away_avg_corners,
        a.corners.line_label()
    );
    for insight in &a.corners.insights {
        println!("    - {insight}");
    }
    println!(
        "  Goals    xG {:.2} ({:.2} / {:.2})  BTTS {}%  O0.5 {}%  O1.5 {}%  O2.5 {}%",
        a.goals.avg_goals_match,
        a.goals.home_goal_expectancy,
        a.goals.away_goal_expectancy,
        a.goals.btts_prob,
        a.goals.over05_prob,
        a.goals.over15_prob,
        a.goals.over25_prob
    );
    println!();
}

fn positional_arg() -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--policy" {
            skip_next = true;
            continue;
        }
        if !arg.starts_with("--") {
            return Some(arg);
        }
    }
    None
}

fn parse_path_arg(name: &str) -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&format!("{name}="))
            && !path.trim().is_empty()
        {
            return Some(PathBuf::from(path.trim()));
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
        {
            return Some(PathBuf::from(next.trim()));
        }
    }
    None
}

fn has_flag(name: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == name)
}
