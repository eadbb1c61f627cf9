//! Fluent builder assembling a single SSML document string.

use fluent_ssml_domain::{
    Construct, SsmlError, alphabet, break_strength, date_format, effect, interpret_as, language,
    pitch, rate, volume, word_role,
};

/// Fluent builder for one `<speak>` document.
///
/// Operations append markup to an internal buffer in call order. Infallible
/// operations return `&mut Self`; operations that validate an argument return
/// `Result<&mut Self, SsmlError>` so chains compose with `?`. Text content
/// and attribute values are emitted verbatim, with no escaping.
///
/// The three nestable constructs (language span, paragraph, sentence) each
/// track a single open/closed flag. Starting one that is already open is an
/// error; [`build`](Self::build) refuses to finish while any remains open.
///
/// A failed call leaves the buffer untouched, but nothing appended by
/// earlier calls is ever rolled back: a caller that catches an error and
/// keeps chaining is responsible for the shape of what it already emitted.
#[derive(Debug, Clone)]
pub struct SsmlBuilder {
    buffer: String,
    language_open: bool,
    paragraph_open: bool,
    sentence_open: bool,
}

impl Default for SsmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SsmlBuilder {
    /// Create a builder holding an empty document.
    pub fn new() -> Self {
        let mut builder = Self {
            buffer: String::new(),
            language_open: false,
            paragraph_open: false,
            sentence_open: false,
        };
        builder.reset();
        builder
    }

    /// Discard any accumulated content and start a fresh document.
    pub fn reset(&mut self) -> &mut Self {
        self.buffer.clear();
        self.buffer.push_str("<speak>");
        self.language_open = false;
        self.paragraph_open = false;
        self.sentence_open = false;
        self
    }

    /// Speak the given text verbatim.
    pub fn speak(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Insert a pause.
    ///
    /// `duration` is either a time value such as `10ms` or `10s` (emitted as
    /// a `time` attribute) or one of the break-strength keywords (emitted as
    /// a `strength` attribute). The suffix check runs first, so any value
    /// ending in `s` that is not a strength keyword is treated as a time.
    pub fn add_break(&mut self, duration: &str) -> Result<&mut Self, SsmlError> {
        if duration.ends_with("ms") || duration.ends_with('s') {
            self.buffer.push_str("<break time=\"");
            self.buffer.push_str(duration);
        } else if break_strength::is_strength(duration) {
            self.buffer.push_str("<break strength=\"");
            self.buffer.push_str(duration);
        } else {
            return Err(SsmlError::InvalidArgument(format!(
                "duration should be in milliseconds (e.g. 10ms) or seconds (e.g. 10s) or one of: {}",
                break_strength::BREAK_STRENGTHS.join(", ")
            )));
        }
        self.buffer.push_str("\"/>");
        Ok(self)
    }

    /// Start speaking in a language.
    ///
    /// `tag` is a locale such as `fr-FR`. A tag outside the supported set is
    /// only warned about, never rejected.
    pub fn start_language(&mut self, tag: &str) -> Result<&mut Self, SsmlError> {
        if self.language_open {
            return Err(SsmlError::AlreadyOpen(Construct::Language));
        }
        if !language::is_supported(tag) {
            tracing::warn!(%tag, "language does not appear to be supported by Polly");
        }
        self.buffer.push_str("<lang xml:lang=\"");
        self.buffer.push_str(tag);
        self.buffer.push_str("\">");
        self.language_open = true;
        Ok(self)
    }

    /// Stop speaking in a language.
    pub fn end_language(&mut self) -> &mut Self {
        self.buffer.push_str("</lang>");
        self.language_open = false;
        self
    }

    /// Speak the given text in the given language.
    pub fn speak_with_language(&mut self, text: &str, tag: &str) -> Result<&mut Self, SsmlError> {
        self.start_language(tag)?;
        self.speak(text);
        Ok(self.end_language())
    }

    /// Insert a named mark.
    pub fn mark(&mut self, name: &str) -> &mut Self {
        self.buffer.push_str("<mark name=\"");
        self.buffer.push_str(name);
        self.buffer.push_str("\"/>");
        self
    }

    /// Start a paragraph.
    pub fn start_paragraph(&mut self) -> Result<&mut Self, SsmlError> {
        if self.paragraph_open {
            return Err(SsmlError::AlreadyOpen(Construct::Paragraph));
        }
        self.buffer.push_str("<p>");
        self.paragraph_open = true;
        Ok(self)
    }

    /// End a paragraph.
    pub fn end_paragraph(&mut self) -> &mut Self {
        self.buffer.push_str("</p>");
        self.paragraph_open = false;
        self
    }

    /// Speak the given text as a paragraph.
    pub fn speak_with_paragraph(&mut self, text: &str) -> Result<&mut Self, SsmlError> {
        self.start_paragraph()?;
        self.speak(text);
        Ok(self.end_paragraph())
    }

    /// Start a sentence.
    pub fn start_sentence(&mut self) -> Result<&mut Self, SsmlError> {
        if self.sentence_open {
            return Err(SsmlError::AlreadyOpen(Construct::Sentence));
        }
        self.buffer.push_str("<s>");
        self.sentence_open = true;
        Ok(self)
    }

    /// End a sentence.
    pub fn end_sentence(&mut self) -> &mut Self {
        self.buffer.push_str("</s>");
        self.sentence_open = false;
        self
    }

    /// Speak the given text as a sentence.
    pub fn speak_with_sentence(&mut self, text: &str) -> Result<&mut Self, SsmlError> {
        self.start_sentence()?;
        self.speak(text);
        Ok(self.end_sentence())
    }

    /// Speak the given word phonetically.
    ///
    /// `alphabet` must be one of the recognised phonetic alphabets;
    /// `pronunciation` is the word's rendering in that alphabet.
    pub fn speak_phonetically(
        &mut self,
        word: &str,
        alphabet: &str,
        pronunciation: &str,
    ) -> Result<&mut Self, SsmlError> {
        if !alphabet::is_alphabet(alphabet) {
            return Err(SsmlError::InvalidArgument(format!(
                "alphabet should be one of: {}",
                alphabet::ALPHABETS.join(", ")
            )));
        }
        self.buffer.push_str("<phoneme alphabet=\"");
        self.buffer.push_str(alphabet);
        self.buffer.push_str("\" ph=\"");
        self.buffer.push_str(pronunciation);
        self.buffer.push_str("\">");
        self.speak(word);
        self.buffer.push_str("</phoneme>");
        Ok(self)
    }

    /// Speak the given text with the given volume.
    pub fn speak_with_volume(&mut self, text: &str, volume: &str) -> Result<&mut Self, SsmlError> {
        self.speak_with_prosody(text, Some(volume), None, None)
    }

    /// Speak the given text with the given pitch.
    pub fn speak_with_pitch(&mut self, text: &str, pitch: &str) -> Result<&mut Self, SsmlError> {
        self.speak_with_prosody(text, None, Some(pitch), None)
    }

    /// Speak the given text with the given rate.
    pub fn speak_with_rate(&mut self, text: &str, rate: &str) -> Result<&mut Self, SsmlError> {
        self.speak_with_prosody(text, None, None, Some(rate))
    }

    /// Speak the given text inside a prosody span.
    ///
    /// At least one of `volume`, `pitch` and `rate` must be supplied. Volume
    /// accepts a keyword or a signed decibel delta (`+3dB`); pitch accepts a
    /// keyword or a signed percent delta (`-7%`); rate accepts keywords
    /// only. The emitted opening tag carries the supplied attributes in
    /// volume-pitch-rate order.
    pub fn speak_with_prosody(
        &mut self,
        text: &str,
        volume: Option<&str>,
        pitch: Option<&str>,
        rate: Option<&str>,
    ) -> Result<&mut Self, SsmlError> {
        if volume.is_none() && pitch.is_none() && rate.is_none() {
            return Err(SsmlError::InvalidArgument(
                "one of volume, pitch or rate must be provided".into(),
            ));
        }
        if let Some(value) = volume
            && !volume::is_volume(value)
            && !volume::is_decibel_delta(value)
        {
            return Err(SsmlError::InvalidArgument(format!(
                "volume should be an increase/decrease in decibels (e.g. -10dB/+3dB) or one of: {}",
                volume::VOLUMES.join(", ")
            )));
        }
        if let Some(value) = pitch
            && !pitch::is_pitch(value)
            && !pitch::is_percent_delta(value)
        {
            return Err(SsmlError::InvalidArgument(format!(
                "pitch should be a percentile increase/decrease (e.g. -3%/+3%) or one of: {}",
                pitch::PITCHES.join(", ")
            )));
        }
        if let Some(value) = rate
            && !rate::is_rate(value)
        {
            return Err(SsmlError::InvalidArgument(format!(
                "rate should be one of: {}",
                rate::RATES.join(", ")
            )));
        }
        self.buffer.push_str("<prosody ");
        if let Some(value) = volume {
            self.buffer.push_str("volume=\"");
            self.buffer.push_str(value);
            self.buffer.push('"');
            if pitch.is_some() || rate.is_some() {
                self.buffer.push(' ');
            }
        }
        if let Some(value) = pitch {
            self.buffer.push_str("pitch=\"");
            self.buffer.push_str(value);
            self.buffer.push('"');
            if rate.is_some() {
                self.buffer.push(' ');
            }
        }
        if let Some(value) = rate {
            self.buffer.push_str("rate=\"");
            self.buffer.push_str(value);
            self.buffer.push('"');
        }
        self.buffer.push('>');
        self.speak(text);
        self.buffer.push_str("</prosody>");
        Ok(self)
    }

    /// Speak the given text with the given interpretation.
    ///
    /// `date_format` is required when `interpret_as` is `date` and is
    /// ignored otherwise.
    pub fn speak_as(
        &mut self,
        text: &str,
        interpret_as: &str,
        date_format: Option<&str>,
    ) -> Result<&mut Self, SsmlError> {
        if !interpret_as::is_interpretation(interpret_as) {
            return Err(SsmlError::InvalidArgument(format!(
                "interpret-as should be one of: {}",
                interpret_as::INTERPRET_AS_VALUES.join(", ")
            )));
        }
        let format = if interpret_as == interpret_as::INTERPRET_AS_DATE {
            match date_format {
                None => {
                    return Err(SsmlError::InvalidArgument(
                        "a date format must be supplied when interpreting as a date".into(),
                    ));
                }
                Some(value) if !date_format::is_format(value) => {
                    return Err(SsmlError::InvalidArgument(format!(
                        "date format should be one of: {}",
                        date_format::DATE_FORMATS.join(", ")
                    )));
                }
                Some(value) => Some(value),
            }
        } else {
            None
        };
        self.buffer.push_str("<say-as interpret-as=\"");
        self.buffer.push_str(interpret_as);
        if let Some(value) = format {
            self.buffer.push_str("\" format=\"");
            self.buffer.push_str(value);
        }
        self.buffer.push_str("\">");
        self.speak(text);
        self.buffer.push_str("</say-as>");
        Ok(self)
    }

    /// Speak a substitute in place of the written word.
    ///
    /// `word` is what the document shows; `substitution` is what is spoken.
    pub fn speak_with_substitute(&mut self, word: &str, substitution: &str) -> &mut Self {
        self.buffer.push_str("<sub alias=\"");
        self.buffer.push_str(substitution);
        self.buffer.push_str("\">");
        self.speak(word);
        self.buffer.push_str("</sub>");
        self
    }

    /// Speak the given word with the given word role.
    pub fn speak_with_role(&mut self, word: &str, role: &str) -> Result<&mut Self, SsmlError> {
        if !word_role::is_role(role) {
            return Err(SsmlError::InvalidArgument(format!(
                "role should be one of: {}",
                word_role::ROLES.join(", ")
            )));
        }
        self.buffer.push_str("<w role=\"");
        self.buffer.push_str(role);
        self.buffer.push_str("\">");
        self.speak(word);
        self.buffer.push_str("</w>");
        Ok(self)
    }

    /// Speak the given text with the given vendor effect.
    pub fn speak_with_effect(&mut self, text: &str, effect: &str) -> Result<&mut Self, SsmlError> {
        if !effect::is_effect(effect) {
            return Err(SsmlError::InvalidArgument(format!(
                "effect should be one of: {}",
                effect::EFFECTS.join(", ")
            )));
        }
        self.buffer.push_str("<amazon:effect name=\"");
        self.buffer.push_str(effect);
        self.buffer.push_str("\">");
        self.speak(text);
        self.buffer.push_str("</amazon:effect>");
        Ok(self)
    }

    /// Whisper the given text.
    pub fn whisper(&mut self, text: &str) -> Result<&mut Self, SsmlError> {
        self.speak_with_effect(text, effect::EFFECT_WHISPER)
    }

    /// Finish the document and return the SSML string.
    ///
    /// Fails while a language span, paragraph or sentence is still open,
    /// reported in that order. On success the builder is reset and can
    /// assemble a new document.
    pub fn build(&mut self) -> Result<String, SsmlError> {
        if self.language_open {
            return Err(SsmlError::UnclosedConstruct(Construct::Language));
        }
        if self.paragraph_open {
            return Err(SsmlError::UnclosedConstruct(Construct::Paragraph));
        }
        if self.sentence_open {
            return Err(SsmlError::UnclosedConstruct(Construct::Sentence));
        }
        self.buffer.push_str("</speak>");
        let document = std::mem::take(&mut self.buffer);
        self.reset();
        Ok(document)
    }
}
