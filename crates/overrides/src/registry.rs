//! Registry of reviewed families and the resolution dispatcher.

use std::sync::LazyLock;

use chws_spacing::Config;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::rules::OverrideRule;
use chws_spacing::Language::{Jan, Kor, Zhs};

const JAN: OverrideRule = OverrideRule::Language(Jan);
const KOR: OverrideRule = OverrideRule::Language(Kor);
const ZHS: OverrideRule = OverrideRule::Language(Zhs);
const JAN_NO_VERT_PAIRS: OverrideRule = OverrideRule::NoVerticalPairs(&JAN);
const JAN_MONOSPACE_ASCII: OverrideRule = OverrideRule::AllowMonospaceAscii(Jan);

/// Reviewed Google Fonts CJK families, by exact typographic family name.
///
/// Families not in this table and not matched by the Noto delegation are
/// skipped; adding a family here requires a visual review of its adjusted
/// output in both writing directions.
static TABLE: &[(&str, OverrideRule)] = &[
    // JAN
    (
        // Vertical alternates are missing, and glyphs are wider than upem.
        "Dela Gothic One",
        OverrideRule::HorizontalOnly(&OverrideRule::FullwidthAdvance {
            language: Jan,
            reference_glyphs: None,
        }),
    ),
    ("DotGothic16", JAN_MONOSPACE_ASCII),
    (
        // Handwritten; comma and full stop are drawn centered, and the
        // vertical corner brackets collide when adjusted.
        "Hachi Maru Pop",
        OverrideRule::ExcludeCodepoints {
            language: Jan,
            horizontal: &['\u{3001}', '\u{3002}'],
            vertical: &['\u{3001}', '\u{3002}', '\u{300C}', '\u{300D}'],
        },
    ),
    ("Hina Mincho", JAN_NO_VERT_PAIRS),
    ("Kaisei Decol", JAN),
    ("Kaisei HarunoUmi", JAN),
    ("Kaisei Opti", JAN),
    ("Kaisei Tokumin", JAN),
    (
        // Fullwidth parentheses already render correctly unadjusted.
        "Kiwi Maru",
        OverrideRule::ExcludeCodepoints {
            language: Jan,
            horizontal: &['\u{FF08}', '\u{FF09}'],
            vertical: &['\u{FF08}', '\u{FF09}'],
        },
    ),
    ("Klee One", JAN),
    ("Kosugi", JAN),
    ("Kosugi Maru", JAN),
    ("Mochiy Pop One", JAN),
    ("Mochiy Pop P One", JAN),
    ("MotoyaLCedar", JAN_MONOSPACE_ASCII),
    ("MotoyaLMaru", JAN_MONOSPACE_ASCII),
    ("M PLUS 1", JAN),
    ("M PLUS 1 Code", JAN),
    ("M PLUS 2", JAN),
    ("Mplus 1p", JAN),
    ("Mplus 1p Bold", JAN),
    ("Murecho", JAN),
    ("Otomanopee One", OverrideRule::HasNoPairs),
    ("Rock 3D", JAN),
    ("Rounded Mplus 1c", JAN),
    ("Rounded Mplus 1c Bold", JAN),
    ("New Tegomin", JAN),
    ("Palette Mosaic", OverrideRule::NotApplicable),
    ("Potta One", JAN),
    ("Rampart One", JAN),
    ("Reggae One", JAN),
    ("RocknRoll One", JAN),
    ("Sawarabi Gothic", JAN),
    ("Sawarabi Mincho", JAN),
    ("Shippori Antique", JAN),
    ("Shippori Antique B1", JAN),
    ("Shippori Mincho", JAN),
    ("Shippori Mincho B1", JAN),
    ("Shizuru", JAN),
    ("Stick", JAN),
    ("Train One", JAN),
    ("Yomogi", OverrideRule::HorizontalOnly(&JAN_MONOSPACE_ASCII)),
    ("Yuji Boku", JAN),
    ("Yuji Hentaigana Akari", JAN),
    ("Yuji Hentaigana Akebono", JAN),
    ("Yuji Mai", JAN),
    ("Yuji Syuku", JAN),
    ("Yusei Magic", JAN_NO_VERT_PAIRS),
    ("Zen Antique", JAN),
    ("Zen Antique Soft", JAN),
    ("Zen Kaku Gothic Antique", JAN),
    ("Zen Kaku Gothic New", JAN),
    ("Zen Kurenaido", JAN),
    ("Zen Maru Gothic", JAN),
    ("Zen Old Mincho", JAN),
    // KOR
    ("Black And White Picture", OverrideRule::HasNoPairs),
    ("Black Han Sans", OverrideRule::HasNoPairs),
    ("Cute Font", OverrideRule::HasNoPairs),
    ("Do Hyeon", OverrideRule::HasNoPairs),
    ("Dokdo", OverrideRule::HasNoPairs),
    ("East Sea Dokdo", OverrideRule::HasNoPairs),
    ("Gaegu", OverrideRule::HasNoPairs),
    ("Gamja Flower", OverrideRule::HasNoPairs),
    ("Gothic A1", OverrideRule::HasNoPairs),
    ("Gowun Batang", OverrideRule::HasNoPairs),
    ("Gowun Dodum", OverrideRule::HasNoPairs),
    ("Gugi", OverrideRule::HasNoPairs),
    ("Hahmlet", OverrideRule::HasNoPairs),
    ("Hi Melody", OverrideRule::HasNoPairs),
    ("IBM Plex Sans KR", KOR),
    ("Jua", OverrideRule::HasNoPairs),
    ("Kirang Haerang", OverrideRule::HasNoPairs),
    ("Nanum Brush Script", OverrideRule::NotApplicable),
    ("NanumGothic", OverrideRule::NotApplicable),
    // Monospace; pairs would break the fixed grid.
    ("NanumGothicCoding", OverrideRule::HasNoPairs),
    ("NanumMyeongjo", OverrideRule::HasNoPairs),
    ("Nanum Pen", OverrideRule::NotApplicable),
    ("Poor Story", OverrideRule::HasNoPairs),
    ("Single Day", OverrideRule::HasNoPairs),
    ("Song Myung", OverrideRule::HasNoPairs),
    ("Stylish", OverrideRule::HasNoPairs),
    ("Sunflower", OverrideRule::HasNoPairs),
    ("Yeon Sung", OverrideRule::HasNoPairs),
    // ZHS
    ("Liu Jian Mao Cao", OverrideRule::HasNoPairs),
    ("Long Cang", ZHS),
    ("Ma Shan Zheng", ZHS),
    ("ZCOOL KuaiLe", ZHS),
    ("ZCOOL QingKe HuangYou", ZHS),
    (
        // Colon and semicolon are centered in this face, and the fullwidth
        // exclamation and question marks sit off-center.
        "ZCOOL XiaoWei",
        OverrideRule::ColonSemicolonMiddle {
            language: Zhs,
            exclude: &['\u{FF01}', '\u{FF1F}'],
        },
    ),
    ("Zhi Mang Xing", ZHS),
];

static REGISTRY: LazyLock<IndexMap<&'static str, &'static OverrideRule>> =
    LazyLock::new(|| TABLE.iter().map(|(name, rule)| (*name, rule)).collect());

/// Resolve the spacing configuration for one font family in one writing
/// direction.
///
/// `name` is the exact typographic family name (name ID 16, falling back
/// to ID 1); `is_vertical` selects the `vchw` pass over the `chws` pass.
/// Registered families resolve through their rule; unregistered "Noto "
/// families fall back to the engine's language inference; anything else
/// resolves to `None` so that unreviewed fonts never receive injected
/// spacing without an explicit, human-added rule.
pub fn for_font_name(base: &Config, name: &str, is_vertical: bool) -> Option<Config> {
    if let Some(rule) = REGISTRY.get(name) {
        debug!("resolving {name:?} (vertical: {is_vertical}) via {rule:?}");
        return rule.apply(base, name, is_vertical);
    }

    if name.starts_with("Noto ") {
        return base.for_font_name(name, is_vertical);
    }

    warn!("not a reviewed font, skipping: {name:?}");
    None
}

/// The rule registered for `name`, if any. Lets verification tooling
/// distinguish families verified to have no adjustable pairs from families
/// where the feature is deliberately disabled.
pub fn rule_for(name: &str) -> Option<&'static OverrideRule> {
    REGISTRY.get(name).copied()
}

/// Registered family names, in registry order.
pub fn known_families() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
