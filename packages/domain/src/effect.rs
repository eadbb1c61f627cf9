//! Vendor voice effects for `<amazon:effect/>`.

/// Whispered speech.
pub const EFFECT_WHISPER: &str = "whispered";

/// All recognised effects.
pub const EFFECTS: [&str; 1] = [EFFECT_WHISPER];

/// True when `value` names a recognised effect.
pub fn is_effect(value: &str) -> bool {
    EFFECTS.contains(&value)
}
