//! Interpretation hints for `<say-as/>`.

pub const INTERPRET_AS_CHARACTER: &str = "character";
pub const INTERPRET_AS_SPELL_OUT: &str = "spell-out";
pub const INTERPRET_AS_CARDINAL: &str = "cardinal";
pub const INTERPRET_AS_NUMBER: &str = "number";
pub const INTERPRET_AS_ORDINAL: &str = "ordinal";
pub const INTERPRET_AS_DIGITS: &str = "digits";
pub const INTERPRET_AS_FRACTION: &str = "fraction";
pub const INTERPRET_AS_UNIT: &str = "unit";
pub const INTERPRET_AS_DATE: &str = "date";
pub const INTERPRET_AS_TIME: &str = "time";
pub const INTERPRET_AS_ADDRESS: &str = "address";
pub const INTERPRET_AS_EXPLETIVE: &str = "expletive";
pub const INTERPRET_AS_TELEPHONE: &str = "telephone";

/// All recognised interpretation hints.
pub const INTERPRET_AS_VALUES: [&str; 13] = [
    INTERPRET_AS_CHARACTER,
    INTERPRET_AS_SPELL_OUT,
    INTERPRET_AS_CARDINAL,
    INTERPRET_AS_NUMBER,
    INTERPRET_AS_ORDINAL,
    INTERPRET_AS_DIGITS,
    INTERPRET_AS_FRACTION,
    INTERPRET_AS_UNIT,
    INTERPRET_AS_DATE,
    INTERPRET_AS_TIME,
    INTERPRET_AS_ADDRESS,
    INTERPRET_AS_EXPLETIVE,
    INTERPRET_AS_TELEPHONE,
];

/// True when `value` names a recognised interpretation hint.
pub fn is_interpretation(value: &str) -> bool {
    INTERPRET_AS_VALUES.contains(&value)
}
