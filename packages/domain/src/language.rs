//! BCP-47 locale tags Polly can voice (e.g. "en-US").
//!
//! The list is advisory: an unknown tag is still emitted, it just earns a
//! warning from the builder.

/// Danish
pub const DANISH: &str = "da-DK";

/// Dutch
pub const DUTCH: &str = "nl-NL";

/// English (Australian)
pub const ENGLISH_AUSTRALIAN: &str = "en-AU";

/// English (British)
pub const ENGLISH_BRITISH: &str = "en-GB";

/// English (Indian)
pub const ENGLISH_INDIAN: &str = "en-IN";

/// English (US)
pub const ENGLISH_US: &str = "en-US";

/// English (Welsh)
pub const ENGLISH_WELSH: &str = "en-GB-WLS";

/// French
pub const FRENCH: &str = "fr-FR";

/// French (Canadian)
pub const FRENCH_CANADIAN: &str = "fr-CA";

/// German
pub const GERMAN: &str = "de-DE";

/// Icelandic
pub const ICELANDIC: &str = "is-IS";

/// Italian
pub const ITALIAN: &str = "it-IT";

/// Japanese
pub const JAPANESE: &str = "ja-JP";

/// Norwegian
pub const NORWEGIAN: &str = "nb-NO";

/// Polish
pub const POLISH: &str = "pl-PL";

/// Portuguese (Brazilian)
pub const PORTUGUESE_BRAZILIAN: &str = "pt-BR";

/// Portuguese (European)
pub const PORTUGUESE_EUROPEAN: &str = "pt-PT";

/// Romanian
pub const ROMANIAN: &str = "ro-RO";

/// Russian
pub const RUSSIAN: &str = "ru-RU";

/// Spanish (European)
pub const SPANISH_EUROPEAN: &str = "es-ES";

/// Spanish (US)
pub const SPANISH_US: &str = "es-US";

/// Swedish
pub const SWEDISH: &str = "sv-SE";

/// Turkish
pub const TURKISH: &str = "tr-TR";

/// Welsh
pub const WELSH: &str = "cy-GB";

/// Every locale tag Polly currently voices.
pub const SUPPORTED_LANGUAGES: [&str; 24] = [
    DANISH,
    DUTCH,
    ENGLISH_AUSTRALIAN,
    ENGLISH_BRITISH,
    ENGLISH_INDIAN,
    ENGLISH_US,
    ENGLISH_WELSH,
    FRENCH,
    FRENCH_CANADIAN,
    GERMAN,
    ICELANDIC,
    ITALIAN,
    JAPANESE,
    NORWEGIAN,
    POLISH,
    PORTUGUESE_BRAZILIAN,
    PORTUGUESE_EUROPEAN,
    ROMANIAN,
    RUSSIAN,
    SPANISH_EUROPEAN,
    SPANISH_US,
    SWEDISH,
    TURKISH,
    WELSH,
];

/// True when `tag` is a locale Polly is known to voice.
pub fn is_supported(tag: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&tag)
}
