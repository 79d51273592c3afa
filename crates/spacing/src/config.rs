//! Shaping policy for one font in one writing direction.

use std::collections::BTreeSet;

use crate::language::Language;

/// Settings that govern glyph-pair computation for one font in one
/// writing direction.
///
/// A `Config` is never mutated once handed to a caller: derivations go
/// through [`Config::for_language`] and the `with_*` methods, which return
/// new values and leave the receiver untouched. The caller constructs one
/// base value at startup with [`Config::new`] and passes it explicitly to
/// every resolution; [`Config::exclude`] is only ever called on a freshly
/// derived value, never on that shared base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language system selecting the default punctuation set and alignment
    /// rules. `None` leaves the choice to the engine's script analysis.
    pub language: Option<Language>,
    /// Never add spacing around monospaced ASCII digits.
    pub skip_monospace_ascii: bool,
    /// Reference glyphs whose measured advance defines the fullwidth
    /// width. `None` uses the font's natural upem-derived width.
    pub fullwidth_advance: Option<BTreeSet<char>>,
    /// Treat fullwidth colon and semicolon as centered rather than
    /// left-aligned.
    pub is_colon_semicolon_middle: bool,
    /// Codepoints removed from spacing consideration.
    pub excluded_codepoints: BTreeSet<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create the base configuration.
    pub fn new() -> Self {
        Self {
            language: None,
            skip_monospace_ascii: true,
            fullwidth_advance: None,
            is_colon_semicolon_middle: false,
            excluded_codepoints: BTreeSet::new(),
        }
    }

    /// Derive a configuration specialized for `language`, with that
    /// language's default punctuation set and alignment rules. The
    /// receiver is unchanged.
    pub fn for_language(&self, language: Language) -> Self {
        let mut config = self.clone();
        config.language = Some(language);
        config
    }

    /// Derive a configuration with only `skip_monospace_ascii` changed.
    pub fn with_skip_monospace_ascii(&self, skip: bool) -> Self {
        let mut config = self.clone();
        config.skip_monospace_ascii = skip;
        config
    }

    /// Derive a configuration with only `fullwidth_advance` changed:
    /// `Some` names the reference glyphs to measure, `None` forces the
    /// upem-derived width.
    pub fn with_fullwidth_advance(&self, reference_glyphs: Option<&str>) -> Self {
        let mut config = self.clone();
        config.fullwidth_advance = reference_glyphs.map(|text| text.chars().collect());
        config
    }

    /// Exclude codepoints from spacing consideration. Re-excluding an
    /// already-excluded codepoint is a no-op.
    pub fn exclude<I: IntoIterator<Item = char>>(&mut self, codepoints: I) {
        self.excluded_codepoints.extend(codepoints);
    }

    /// The engine's general-purpose default for fonts with no explicit
    /// override: infer the language from Noto CJK family naming.
    ///
    /// Returns `None` when the name carries no East Asian language marker,
    /// in which case the feature does not apply.
    pub fn for_font_name(&self, name: &str, _is_vertical: bool) -> Option<Self> {
        Language::from_noto_name(name).map(|language| self.for_language(language))
    }
}
