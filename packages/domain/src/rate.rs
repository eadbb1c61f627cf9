//! Prosody rate keywords.
//!
//! Rate is keyword-only: unlike volume and pitch there is no pattern-matched
//! numeric form.

pub const RATE_XTRA_SLOW: &str = "x-slow";
pub const RATE_SLOW: &str = "slow";
pub const RATE_MEDIUM: &str = "medium";
pub const RATE_FAST: &str = "fast";
pub const RATE_XTRA_FAST: &str = "x-fast";

/// All recognised rate keywords.
pub const RATES: [&str; 5] = [RATE_XTRA_SLOW, RATE_SLOW, RATE_MEDIUM, RATE_FAST, RATE_XTRA_FAST];

/// True when `value` names a recognised rate keyword.
pub fn is_rate(value: &str) -> bool {
    RATES.contains(&value)
}
