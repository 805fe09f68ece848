use crate::output::print_json;
use anyhow::Context;
use collatz6_core::{step, v6};
use num_bigint::BigUint;

pub fn run_v6(n: &BigUint, json: bool) -> anyhow::Result<()> {
    let k = v6(n);
    if json {
        return print_json(&serde_json::json!({ "n": n.to_string(), "v6": k }));
    }
    println!("{k}");
    Ok(())
}

pub fn run(n: &BigUint, json: bool) -> anyhow::Result<()> {
    let next = step(n).with_context(|| format!("cannot step {n}"))?;
    if json {
        return print_json(&serde_json::json!({
            "n": n.to_string(),
            "next": next.to_string(),
        }));
    }
    println!("{next}");
    Ok(())
}
