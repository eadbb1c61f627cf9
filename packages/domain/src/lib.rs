//! # Fluent SSML Domain
//!
//! Shared vocabularies and error types for the fluent-ssml workspace.
//!
//! Every fixed vocabulary the builder validates against lives here as a
//! process-wide `const` table, one module per vocabulary, together with its
//! membership predicate. The two structural pattern validators (relative
//! decibel and relative percent values) sit beside the vocabularies they
//! extend.

pub mod alphabet;
pub mod break_strength;
pub mod date_format;
pub mod effect;
pub mod interpret_as;
pub mod language;
pub mod pitch;
pub mod rate;
pub mod ssml_error;
pub mod volume;
pub mod word_role;

// Re-export core types
pub use ssml_error::{Construct, SsmlError};

/// Prelude module containing the error type and every vocabulary constant.
pub mod prelude {
    pub use crate::alphabet::*;
    pub use crate::break_strength::*;
    pub use crate::date_format::*;
    pub use crate::effect::*;
    pub use crate::interpret_as::*;
    pub use crate::language::*;
    pub use crate::pitch::*;
    pub use crate::rate::*;
    pub use crate::ssml_error::{Construct, SsmlError};
    pub use crate::volume::*;
    pub use crate::word_role::*;
}
