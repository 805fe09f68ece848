use collatz6_core::OrbitStatistics;
use serde::Serialize;
use std::fmt::Display;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Values can exceed any JSON number, so they go out as decimal strings.
pub fn stats_json<T: Display>(stats: &OrbitStatistics<T>) -> serde_json::Value {
    serde_json::json!({
        "steps": stats.steps,
        "max": stats.max_val.to_string(),
        "growth": stats.growth,
        "rim": stats.rim_count,
        "converged": stats.converged,
    })
}

pub fn values_json<T: Display>(values: &[T]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
