//! Override rules applied to the engine's base configuration.

use chws_spacing::{Config, Language};

/// How one reviewed family deviates from the stock engine behavior.
///
/// Rules are plain data so the registry stays inspectable: each variant
/// carries its parameters, and [`OverrideRule::apply`] interprets them.
/// A rule never mutates the base configuration and never fails; a family
/// the feature must skip resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideRule {
    /// The family works with the stock defaults for this language.
    Language(Language),
    /// Vertical flow is suppressed, because the font lacks usable vertical
    /// alternates or renders defectively in vertical mode; horizontal flow
    /// delegates to the inner rule.
    HorizontalOnly(&'static OverrideRule),
    /// Vertical flow was verified to produce zero adjustable pairs.
    /// Behaves like [`OverrideRule::HorizontalOnly`]; the distinction only
    /// matters to output-verification tooling.
    NoVerticalPairs(&'static OverrideRule),
    /// Spacing around monospaced ASCII digits is known to be safe for this
    /// family, overriding the default skip policy.
    AllowMonospaceAscii(Language),
    /// Override how the fullwidth advance is determined: `None` forces the
    /// upem-derived width, `Some` names reference glyphs to measure.
    FullwidthAdvance {
        language: Language,
        reference_glyphs: Option<&'static str>,
    },
    /// Exclude codepoints whose glyphs are wider than intended, collide
    /// when adjusted, or already render correctly unadjusted. The lists
    /// may differ between horizontal and vertical flow.
    ExcludeCodepoints {
        language: Language,
        horizontal: &'static [char],
        vertical: &'static [char],
    },
    /// Fullwidth colon and semicolon are centered in this face, with
    /// per-face mispositioned punctuation additionally excluded.
    ColonSemicolonMiddle {
        language: Language,
        exclude: &'static [char],
    },
    /// The feature is disabled for this family.
    NotApplicable,
    /// The engine was verified to produce zero adjustable pairs for this
    /// family in either direction. Behaves like
    /// [`OverrideRule::NotApplicable`]; the distinction only matters to
    /// output-verification tooling.
    HasNoPairs,
}

impl OverrideRule {
    /// Resolve this rule against the base configuration.
    ///
    /// `None` means the feature does not apply to this family in this
    /// direction. Repeated application with the same inputs is not
    /// cumulative: applying a rule to its own output yields an equal
    /// configuration.
    pub fn apply(&self, base: &Config, name: &str, is_vertical: bool) -> Option<Config> {
        match *self {
            Self::Language(language) => Some(base.for_language(language)),
            Self::HorizontalOnly(inner) | Self::NoVerticalPairs(inner) => {
                if is_vertical {
                    None
                } else {
                    inner.apply(base, name, is_vertical)
                }
            }
            Self::AllowMonospaceAscii(language) => {
                Some(base.for_language(language).with_skip_monospace_ascii(false))
            }
            Self::FullwidthAdvance { language, reference_glyphs } => {
                Some(base.for_language(language).with_fullwidth_advance(reference_glyphs))
            }
            Self::ExcludeCodepoints { language, horizontal, vertical } => {
                let mut config = base.for_language(language);
                let codepoints = if is_vertical { vertical } else { horizontal };
                config.exclude(codepoints.iter().copied());
                Some(config)
            }
            Self::ColonSemicolonMiddle { language, exclude } => {
                let mut config = base.for_language(language);
                config.is_colon_semicolon_middle = true;
                config.exclude(exclude.iter().copied());
                Some(config)
            }
            Self::NotApplicable | Self::HasNoPairs => None,
        }
    }

    /// Whether a `None` resolution in the given direction means "verified
    /// to produce zero adjustable pairs" rather than "deliberately
    /// disabled". Output-verification tests assert feature absence only
    /// for verified-empty families.
    pub fn verified_no_pairs(&self, is_vertical: bool) -> bool {
        match self {
            Self::HasNoPairs => true,
            Self::NoVerticalPairs(_) => is_vertical,
            _ => false,
        }
    }
}
