//! Per-family `chws`/`vchw` overrides for Google Fonts CJK families.
//!
//! Different families need different language defaults, different excluded
//! punctuation, different vertical-flow handling, and occasionally complete
//! suppression of the feature. This crate holds the registry of reviewed
//! families and resolves a family name to the [`Config`] the spacing engine
//! should use, or to `None` when the feature must not be injected.
//!
//! The build pipeline calls [`for_font_name`] at most twice per font, once
//! per writing direction, with the family name read from the font's name
//! table (typographic family name, ID 16, falling back to ID 1).
//!
//! [`Config`]: chws_spacing::Config

pub mod registry;
pub mod rules;

pub use registry::{for_font_name, known_families, rule_for};
pub use rules::OverrideRule;
