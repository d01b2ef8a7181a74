//! Cost and latency arithmetic for logged calls

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Total cost of a call; unknown unless both halves were recorded
pub fn calculate_costs(
    prompt_token_cost: Option<Decimal>,
    return_token_cost: Option<Decimal>,
) -> Option<Decimal> {
    Some(prompt_token_cost? + return_token_cost?)
}

/// Seconds between start and end, to the millisecond
pub fn calculate_latency(
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
) -> Option<Decimal> {
    let elapsed = end_time? - start_time?;
    Some(Decimal::new(elapsed.num_milliseconds(), 3))
}
