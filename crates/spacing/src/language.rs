//! OpenType language systems relevant to contextual half-width spacing.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An OpenType language-system tag selecting which punctuation set and
/// alignment rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    /// Japanese.
    Jan,
    /// Korean.
    Kor,
    /// Simplified Chinese.
    Zhs,
    /// Traditional Chinese.
    Zht,
}

impl Language {
    /// The four-letter OpenType tag for this language system.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Jan => "JAN",
            Self::Kor => "KOR",
            Self::Zhs => "ZHS",
            Self::Zht => "ZHT",
        }
    }

    /// Infer the language from a Noto CJK family name.
    ///
    /// Noto CJK families carry their target language as a name token, e.g.
    /// "Noto Sans JP", "Noto Serif TC", or "Noto Sans Mono CJK jp". The
    /// token is matched case-insensitively; `None` means the name carries
    /// no East Asian language marker.
    pub fn from_noto_name(name: &str) -> Option<Self> {
        for token in name.split_ascii_whitespace() {
            match token.to_ascii_uppercase().as_str() {
                "JP" => return Some(Self::Jan),
                "KR" => return Some(Self::Kor),
                "SC" => return Some(Self::Zhs),
                "TC" | "HK" => return Some(Self::Zht),
                _ => {}
            }
        }
        None
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The string is not a recognized OpenType language-system tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag: {0:?}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JAN" => Ok(Self::Jan),
            "KOR" => Ok(Self::Kor),
            "ZHS" => Ok(Self::Zhs),
            "ZHT" => Ok(Self::Zht),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}
