use crate::output::{print_json, values_json};
use anyhow::Context;
use collatz6_core::orbit;
use num_bigint::BigUint;

pub fn run(n: BigUint, max_steps: usize, json: bool) -> anyhow::Result<()> {
    let o = orbit(n, max_steps).context("failed to generate orbit")?;
    tracing::debug!(steps = o.steps(), converged = o.converged(), "orbit generated");

    if json {
        return print_json(&serde_json::json!({
            "start": o.start().to_string(),
            "steps": o.steps(),
            "converged": o.converged(),
            "orbit": values_json(o.values()),
        }));
    }

    println!("Orbit: {o}");
    if !o.converged() {
        println!("(did not reach 1 within {max_steps} steps)");
    }
    Ok(())
}
