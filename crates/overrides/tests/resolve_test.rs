//! End-to-end resolution tests over the real registry.

use chws_overrides::{for_font_name, known_families, rule_for};
use chws_spacing::{Config, Language};

#[test]
fn test_resolve_japanese_family() {
    let base = Config::new();
    let mplus_1p = for_font_name(&base, "Mplus 1p", false).unwrap();
    assert_ne!(mplus_1p, base);
    assert_eq!(mplus_1p.language, Some(Language::Jan));
}

#[test]
fn test_resolve_simplified_chinese_family() {
    let base = Config::new();
    let zhi_mang_xing = for_font_name(&base, "Zhi Mang Xing", false).unwrap();
    assert_ne!(zhi_mang_xing, base);
    assert_eq!(zhi_mang_xing.language, Some(Language::Zhs));
}

#[test]
fn test_resolve_korean_family() {
    let base = Config::new();
    let plex_kr = for_font_name(&base, "IBM Plex Sans KR", false).unwrap();
    assert_eq!(plex_kr.language, Some(Language::Kor));
}

#[test]
fn test_unknown_family_is_skipped() {
    let base = Config::new();
    assert_eq!(for_font_name(&base, "never exists", false), None);
    assert_eq!(for_font_name(&base, "never exists", true), None);
}

#[test]
fn test_monospace_korean_family_never_applies() {
    let base = Config::new();
    assert_eq!(for_font_name(&base, "NanumGothicCoding", false), None);
    assert_eq!(for_font_name(&base, "NanumGothicCoding", true), None);
    assert!(rule_for("NanumGothicCoding").unwrap().verified_no_pairs(false));
}

#[test]
fn test_horizontal_only_family() {
    let base = Config::new();
    assert_eq!(for_font_name(&base, "Dela Gothic One", true), None);

    let horizontal = for_font_name(&base, "Dela Gothic One", false).unwrap();
    assert_eq!(horizontal.language, Some(Language::Jan));
    // The upem-derived width is forced for this face.
    assert_eq!(horizontal.fullwidth_advance, None);
}

#[test]
fn test_colon_semicolon_middle_family() {
    let base = Config::new();
    let xiaowei = for_font_name(&base, "ZCOOL XiaoWei", false).unwrap();
    assert_eq!(xiaowei.language, Some(Language::Zhs));
    assert!(xiaowei.is_colon_semicolon_middle);
    assert!(xiaowei.excluded_codepoints.contains(&'\u{FF01}'));
    assert!(xiaowei.excluded_codepoints.contains(&'\u{FF1F}'));
}

#[test]
fn test_direction_specific_exclusions() {
    let base = Config::new();
    let horizontal = for_font_name(&base, "Hachi Maru Pop", false).unwrap();
    let vertical = for_font_name(&base, "Hachi Maru Pop", true).unwrap();
    assert!(horizontal.excluded_codepoints.contains(&'\u{3002}'));
    assert!(!horizontal.excluded_codepoints.contains(&'\u{300C}'));
    assert!(vertical.excluded_codepoints.contains(&'\u{300C}'));
}

#[test]
fn test_monospace_ascii_allowance() {
    let base = Config::new();
    let dot_gothic = for_font_name(&base, "DotGothic16", false).unwrap();
    assert!(!dot_gothic.skip_monospace_ascii);

    // Yomogi allows it horizontally but is suppressed vertically.
    let yomogi = for_font_name(&base, "Yomogi", false).unwrap();
    assert!(!yomogi.skip_monospace_ascii);
    assert_eq!(for_font_name(&base, "Yomogi", true), None);
}

#[test]
fn test_noto_delegation() {
    let base = Config::new();
    let jp = for_font_name(&base, "Noto Sans JP", false).unwrap();
    assert_eq!(jp.language, Some(Language::Jan));
    let sc = for_font_name(&base, "Noto Serif SC", true).unwrap();
    assert_eq!(sc.language, Some(Language::Zhs));
    let mono = for_font_name(&base, "Noto Sans Mono CJK jp", false).unwrap();
    assert_eq!(mono.language, Some(Language::Jan));
    assert_eq!(for_font_name(&base, "Noto Color Emoji", false), None);
}

#[test]
fn test_resolution_is_deterministic() {
    let base = Config::new();
    for name in known_families() {
        for is_vertical in [false, true] {
            let first = for_font_name(&base, name, is_vertical);
            let second = for_font_name(&base, name, is_vertical);
            assert_eq!(first, second, "resolution differs for {name:?}");
        }
    }
}

#[test]
fn test_re_deriving_is_idempotent() {
    let base = Config::new();
    for name in known_families() {
        let rule = rule_for(name).unwrap();
        for is_vertical in [false, true] {
            if let Some(once) = rule.apply(&base, name, is_vertical) {
                let twice = rule.apply(&once, name, is_vertical).unwrap();
                assert_eq!(once, twice, "rule is cumulative for {name:?}");
            }
        }
    }
}

#[test]
fn test_base_is_never_mutated() {
    let base = Config::new();
    assert!(base.excluded_codepoints.is_empty());
    for name in known_families() {
        for is_vertical in [false, true] {
            let _ = for_font_name(&base, name, is_vertical);
        }
    }
    assert!(base.excluded_codepoints.is_empty());
    assert_eq!(base, Config::new());
}

#[test]
fn test_vertical_suppression_families() {
    let base = Config::new();
    for name in ["Dela Gothic One", "Hina Mincho", "Yomogi", "Yusei Magic"] {
        assert_eq!(for_font_name(&base, name, true), None, "{name:?}");
        assert!(for_font_name(&base, name, false).is_some(), "{name:?}");
    }

    // Verified-empty vertical flow vs. deliberate suppression.
    assert!(rule_for("Hina Mincho").unwrap().verified_no_pairs(true));
    assert!(!rule_for("Dela Gothic One").unwrap().verified_no_pairs(true));
}
