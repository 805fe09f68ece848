use crate::output::print_json;
use collatz6_core::{scan, ScanConfig};

pub fn run(start: u64, end: u64, config: &ScanConfig, json: bool) -> anyhow::Result<()> {
    tracing::debug!(
        start,
        end,
        min_rim = config.min_rim,
        min_steps = config.min_steps,
        max_steps = config.max_steps,
        "scanning"
    );

    let mut scanner = scan(start, end, config);

    if json {
        let mut entries = Vec::new();
        for entry in scanner.by_ref() {
            let entry = entry?;
            entries.push(serde_json::json!({
                "n": entry.n,
                "steps": entry.steps,
                "rim": entry.rim_count,
                "max": entry.max_val.to_string(),
                "growth": entry.growth,
                "converged": entry.converged,
            }));
        }
        let summary = scanner.summary();
        print_json(&serde_json::json!({
            "entries": entries,
            "scanned": summary.scanned,
            "matched": summary.matched,
            "truncated": summary.truncated,
        }))?;
        return Ok(());
    }

    for entry in scanner.by_ref() {
        println!("{}", entry?);
    }

    let summary = scanner.summary();
    tracing::info!(
        scanned = summary.scanned,
        matched = summary.matched,
        truncated = summary.truncated,
        "scan complete"
    );
    Ok(())
}
