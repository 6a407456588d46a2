//! `csvpart cooldown` handlers.

use anyhow::Result;
use chrono::{Local, TimeZone};

use csvpart::cli::CooldownAction;
use csvpart::limiter::{format_remaining_time, RateLimiter};

use super::open_store;

#[cfg(not(tarpaulin_include))]
pub fn handle(action: CooldownAction) -> Result<()> {
    match action {
        CooldownAction::Status { json } => status(json),
        CooldownAction::Reset => reset(),
    }
}

/// Show whether a new split is currently allowed.
#[cfg(not(tarpaulin_include))]
fn status(json: bool) -> Result<()> {
    let limiter = RateLimiter::new(open_store()?);
    let status = limiter.check()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if status.allowed {
        println!("Ready: a new split is allowed.");
    } else {
        println!(
            "Cooling down: next split available in {}.",
            format_remaining_time(status.remaining_ms)
        );
    }

    if let Some(last) = status.last_conversion {
        if let Some(when) = Local.timestamp_millis_opt(last).single() {
            println!("Last conversion: {}", when.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(())
}

/// Clear the recorded conversion timestamp.
#[cfg(not(tarpaulin_include))]
fn reset() -> Result<()> {
    let mut limiter = RateLimiter::new(open_store()?);
    limiter.reset()?;
    println!("Cooldown cleared.");
    Ok(())
}
