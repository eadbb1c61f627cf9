//! # Fluent SSML
//!
//! Fluent builder API for Amazon Polly SSML documents.
//!
//! One [`SsmlBuilder`] assembles one `<speak>` document at a time. Every
//! operation appends a markup fragment in call order after checking its
//! arguments against the Polly vocabularies, and [`SsmlBuilder::build`]
//! refuses to finish while a language span, paragraph or sentence is still
//! open. The builder resets itself after each successful build and can be
//! reused for the next document.
//!
//! ## Usage
//!
//! ```
//! use fluent_ssml::SsmlBuilder;
//! use fluent_ssml::domain::{language, rate};
//!
//! let mut ssml = SsmlBuilder::new();
//! ssml.start_paragraph()?
//!     .speak_with_rate("Some say", rate::RATE_XTRA_FAST)?
//!     .add_break("200ms")?
//!     .speak("the world will end in fire.")
//!     .end_paragraph()
//!     .speak_with_language("Bonjour!", language::FRENCH)?;
//! let document = ssml.build()?;
//! assert!(document.starts_with("<speak><p>"));
//! # Ok::<(), fluent_ssml::SsmlError>(())
//! ```
//!
//! Text content is emitted verbatim: callers supplying text that contains
//! reserved markup characters are responsible for the well-formedness of the
//! result.

pub mod builder;

pub use builder::SsmlBuilder;
pub use fluent_ssml_domain as domain;
pub use fluent_ssml_domain::{Construct, SsmlError};

/// Prelude module containing the builder and every vocabulary constant.
pub mod prelude {
    pub use crate::builder::SsmlBuilder;
    pub use fluent_ssml_domain::prelude::*;
}
