use std::path::PathBuf;

use anyhow::Result;

use match_stats::policy::active_policy;

// Writes the effective policy (defaults, or STATS_POLICY_PATH if set) as a
// starting point for tuning thresholds.
fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("stats_policy.json"));

    active_policy().save(&path)?;
    println!("wrote {}", path.display());
    Ok(())
}
