use crate::output::{print_json, stats_json};
use anyhow::Context;
use collatz6_core::analyze;
use num_bigint::BigUint;

pub fn run(n: BigUint, max_steps: usize, json: bool) -> anyhow::Result<()> {
    let stats = analyze(n.clone(), max_steps).context("failed to analyze orbit")?;

    if json {
        let mut value = stats_json(&stats);
        value["n"] = serde_json::Value::String(n.to_string());
        return print_json(&value);
    }

    println!("{stats}");
    if !stats.converged {
        println!("(did not reach 1 within {max_steps} steps)");
    }
    Ok(())
}
