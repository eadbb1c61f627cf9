//! Word roles for `<w/>` pronunciation disambiguation.

/// Pronounce as a verb (present simple).
pub const ROLE_VERB: &str = "amazon:VB";
/// Pronounce as past tense or past participle.
pub const ROLE_PAST_TENSE: &str = "amazon:VBD";
/// Pronounce with the word's non-default sense.
pub const ROLE_NON_DEFAULT: &str = "amazon:SENSE_1";

/// All recognised word roles.
pub const ROLES: [&str; 3] = [ROLE_VERB, ROLE_PAST_TENSE, ROLE_NON_DEFAULT];

/// True when `value` names a recognised word role.
pub fn is_role(value: &str) -> bool {
    ROLES.contains(&value)
}
