use crate::output::{print_json, stats_json, values_json};
use collatz6_core::{analyze, orbit, OrbitConfig};

/// Start value of the built-in demonstration.
pub const DEMO_START: u64 = 20737;

pub fn run(config: &OrbitConfig, json: bool) -> anyhow::Result<()> {
    let o = orbit(DEMO_START, config.max_steps)?;
    let stats = analyze(DEMO_START, config.max_steps)?;

    if json {
        return print_json(&serde_json::json!({
            "n": DEMO_START,
            "orbit": values_json(o.values()),
            "statistics": stats_json(&stats),
        }));
    }

    println!("Orbit: {o}");
    println!("{stats}");
    Ok(())
}
