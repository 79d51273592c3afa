//! Configuration surface of the East Asian contextual spacing engine.
//!
//! The spacing engine adds the OpenType `chws` (horizontal) and `vchw`
//! (vertical) contextual half-width features to CJK fonts. This crate
//! defines the [`Config`] value that tells the engine which language
//! defaults, codepoint exclusions, alignment rules, and width metrics
//! govern glyph-pair computation for one font in one writing direction.
//! Font parsing, pair computation, and feature-table generation live in
//! the engine itself, not here.

pub mod config;
pub mod language;

pub use config::Config;
pub use language::{Language, ParseLanguageError};
