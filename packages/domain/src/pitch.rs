//! Prosody pitch keywords and the relative-percent pattern.

pub const PITCH_DEFAULT: &str = "default";
pub const PITCH_XTRA_LOW: &str = "x-low";
pub const PITCH_LOW: &str = "low";
pub const PITCH_MEDIUM: &str = "medium";
pub const PITCH_HIGH: &str = "high";
pub const PITCH_XTRA_HIGH: &str = "x-high";

/// All recognised pitch keywords.
pub const PITCHES: [&str; 6] = [
    PITCH_DEFAULT,
    PITCH_XTRA_LOW,
    PITCH_LOW,
    PITCH_MEDIUM,
    PITCH_HIGH,
    PITCH_XTRA_HIGH,
];

/// True when `value` names a recognised pitch keyword.
pub fn is_pitch(value: &str) -> bool {
    PITCHES.contains(&value)
}

/// True for signed percent deltas such as `+5%` or `-7%`.
///
/// The value must carry an explicit `+`/`-` prefix and a `%` suffix, with at
/// least one character in between.
pub fn is_percent_delta(value: &str) -> bool {
    value.len() > 2 && value.ends_with('%') && (value.starts_with('+') || value.starts_with('-'))
}
