//! Text encodings of the two persisted economy values.
//!
//! Decoding never fails: anything unreadable falls back to the empty value.

use serde_json::Value;
use std::collections::BTreeSet;

pub fn decode_coins(raw: Option<&str>) -> u64 {
    let Some(raw) = raw.map(str::trim) else {
        return 0;
    };

    if let Ok(n) = raw.parse::<i64>() {
        return n.max(0) as u64;
    }

    match raw.parse::<f64>() {
        // `as` saturates, so huge values clamp to u64::MAX
        Ok(n) if n.is_finite() => n.floor().max(0.0) as u64,
        _ => 0,
    }
}

pub fn encode_coins(coins: u64) -> String {
    coins.to_string()
}

pub fn decode_owned(raw: Option<&str>) -> BTreeSet<u32> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_u64)
            .filter(|id| *id > 0)
            .filter_map(|id| u32::try_from(id).ok())
            .collect(),
        Ok(_) | Err(_) => BTreeSet::new(),
    }
}

/// JSON array of unique ids, ascending.
pub fn encode_owned(owned: &BTreeSet<u32>) -> Result<String, serde_json::Error> {
    serde_json::to_string(owned)
}
