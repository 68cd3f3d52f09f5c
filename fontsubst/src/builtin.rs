// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builtin feature and alias tables.
//!
//! Source Han fonts carry localized CJK family names while Noto CJK fonts
//! only have English ones, so both are listed and treated as compatible.
//! Kai style fonts have no open alternative besides TW-Kai, so the Kai lists
//! name each platform's default Kai font and end with TW-Kai.

use crate::feature::{FontFeature, LanguageFontMap};
use icu_locale_core::LanguageIdentifier;

/// Family list used as the last resort for CJK glyph fallback.
pub const FINAL_CJK_FALLBACK_FONTS: &str =
    "全字庫正宋體;TW-Sung;全字庫正宋體 Ext-B;TW-Sung-Ext-B;全字庫正宋體 Plus;TW-Sung-Plus";

struct FeatureRecord {
    pattern: &'static str,
    equal_fonts: &'static [(&'static str, &'static str)],
    default_fallback: &'static str,
    union_fonts: &'static [(&'static str, &'static str)],
    default_union: &'static str,
}

const SERIF_EQUALS: &[(&str, &str)] = &[
    (
        "zh-TW",
        "新細明體;PMingLiU;蘋果儷細宋;Apple LiSung;思源宋體;Source Han Serif TC;Noto Serif CJK TC",
    ),
    (
        "zh-HK",
        "細明體_HKSCS;MingLiU_HKSCS;蘋果儷細宋;Apple LiSung;思源宋體 香港;Source Han Serif HC;Noto Serif CJK HK",
    ),
    (
        "zh-MO",
        "細明體_HKSCS;MingLiU_HKSCS;蘋果儷細宋;Apple LiSung;思源宋體 香港;Source Han Serif HC;Noto Serif CJK HK",
    ),
    (
        "zh-CN",
        "宋体;SimSun;宋体-简;Song;思源宋体;Source Han Serif SC;Noto Serif CJK SC",
    ),
    (
        "zh-SG",
        "宋体;SimSun;宋体-简;Song;思源宋体;Source Han Serif SC;Noto Serif CJK SC",
    ),
    (
        "ja",
        "ＭＳ Ｐ明朝;MS PMincho;游明朝体;YuMincho;源ノ明朝;Source Han Serif;Noto Serif CJK JP",
    ),
    (
        "ko",
        "바탕;Batang;일반체;AppleMyungjo;본명조;Source Han Serif K;Noto Serif CJK KR",
    ),
];

const SANS_EQUALS: &[(&str, &str)] = &[
    (
        "zh-TW",
        "微軟正黑體;Microsoft JhengHei;蘋方-繁;PingFang TC;思源黑體;Source Han Sans TC;Noto Sans CJK TC",
    ),
    (
        "zh-HK",
        "微軟正黑體;Microsoft JhengHei;蘋方-港;PingFang HK;思源黑體 香港;Source Han Sans HC;Noto Sans CJK HK",
    ),
    (
        "zh-MO",
        "微軟正黑體;Microsoft JhengHei;蘋方-港;PingFang HK;思源黑體 香港;Source Han Sans HC;Noto Sans CJK HK",
    ),
    (
        "zh-CN",
        "微软雅黑;Microsoft YaHei;苹方-简;PingFang SC;思源黑体;Source Han Sans SC;Noto Sans CJK SC",
    ),
    (
        "zh-SG",
        "微软雅黑;Microsoft YaHei;苹方-简;PingFang SC;思源黑体;Source Han Sans SC;Noto Sans CJK SC",
    ),
    ("ja", "源ノ角ゴシック;Source Han Sans;Noto Sans CJK JP"),
    ("ko", "본고딕;Source Han Sans K;Noto Sans CJK KR"),
];

const FEATURES: &[FeatureRecord] = &[
    // Ming and Song style
    FeatureRecord {
        pattern: "*明;*宋;*바탕;*Ming;*Mincho;*Sung;*Song;*Batang",
        equal_fonts: SERIF_EQUALS,
        default_fallback: "全字庫正宋體;TW-Sung",
        union_fonts: &[
            ("zh-TW", "新細明體-ExtB;PMingLiU-ExtB"),
            ("zh-HK", "細明體_HKSCS-ExtB;MingLiU_HKSCS-ExtB"),
            ("zh-MO", "細明體_HKSCS-ExtB;MingLiU_HKSCS-ExtB"),
            ("zh-CN", "SimSun-ExtB"),
            ("zh-SG", "SimSun-ExtB"),
            ("ja", ""),
            ("ko", ""),
        ],
        default_union: "全字庫正宋體 Ext-B;TW-Sung-Ext-B;全字庫正宋體 Plus;TW-Sung-Plus",
    },
    // Hei and Gothic style
    FeatureRecord {
        pattern: "*黑;*Hei;*Gothic;*蘋方;*苹方;*PingFang",
        equal_fonts: SANS_EQUALS,
        default_fallback:
            "微軟正黑體;Microsoft JhengHei;蘋方-繁;PingFang TC;思源黑體;Source Han Sans TC;Noto Sans CJK TC",
        union_fonts: &[],
        default_union: "",
    },
    // Kai style
    FeatureRecord {
        pattern: "*楷;*Kai",
        equal_fonts: &[
            ("zh-TW", "標楷體;DFKai-SB;標楷體-繁;BiauKai"),
            ("zh-HK", "標楷體;DFKai-SB;標楷體-繁;BiauKai"),
            ("zh-MO", "標楷體;DFKai-SB;標楷體-繁;BiauKai"),
            ("zh-CN", "楷体;SimKai;楷体-简;Kai"),
            ("zh-SG", "楷体;SimKai;楷体-简;Kai"),
        ],
        default_fallback: "全字庫正楷體;TW-Kai",
        union_fonts: &[],
        default_union: "全字庫正楷體 Ext-B;TW-Kai-Ext-B;全字庫正楷體 Plus;TW-Kai-Plus",
    },
    // Generic sans serif behaves like Hei
    FeatureRecord {
        pattern: "Sans;sans;Sans-Serif",
        equal_fonts: SANS_EQUALS,
        default_fallback: "",
        union_fonts: &[],
        default_union: "",
    },
    // Generic serif behaves like Ming
    FeatureRecord {
        pattern: "Serif;serif",
        equal_fonts: SERIF_EQUALS,
        default_fallback: "",
        union_fonts: &[],
        default_union: "",
    },
];

/// Noto CJK families and their Source Han equivalents.
const COMPATIBLE_FONTS: &[(&str, &[&str])] = &[
    ("Noto Serif CJK TC", &["思源宋體", "Source Han Serif TC"]),
    ("Noto Serif CJK HK", &["思源宋體 香港", "Source Han Serif HC"]),
    ("Noto Serif CJK SC", &["思源宋体", "Source Han Serif SC"]),
    ("Noto Serif CJK JP", &["源ノ明朝", "Source Han Serif"]),
    ("Noto Serif CJK KR", &["본명조", "Source Han Serif K"]),
    ("Noto Sans CJK TC", &["思源黑體", "Source Han Sans TC"]),
    ("Noto Sans CJK HK", &["思源黑體 香港", "Source Han Sans HC"]),
    ("Noto Sans CJK SC", &["思源黑体", "Source Han Sans SC"]),
    ("Noto Sans CJK JP", &["源ノ角ゴシック", "Source Han Sans"]),
    ("Noto Sans CJK KR", &["본고딕", "Source Han Sans K"]),
    ("Noto Sans Mono CJK TC", &["思源黑體 HW", "Source Han Sans HW TC"]),
    ("Noto Sans Mono CJK HK", &["思源黑體 香港 HW", "Source Han Sans HW HC"]),
    ("Noto Sans Mono CJK SC", &["思源黑体 HW", "Source Han Sans HW SC"]),
    ("Noto Sans Mono CJK JP", &["源ノ角ゴシック HW", "Source Han Sans HW"]),
    ("Noto Sans Mono CJK KR", &["본고딕 HW", "Source Han Sans HW K"]),
];

/// Returns the builtin CJK features in registration order.
pub fn cjk_features() -> impl Iterator<Item = FontFeature> {
    FEATURES.iter().map(|record| {
        FontFeature::new(record.pattern)
            .with_equal_fonts(language_map(record.equal_fonts))
            .with_default_fallback(record.default_fallback)
            .with_union_fonts(language_map(record.union_fonts))
            .with_default_union(record.default_union)
    })
}

/// Returns the builtin `(family, alias)` pairs.
pub fn compatible_fonts() -> impl Iterator<Item = (&'static str, &'static str)> {
    COMPATIBLE_FONTS
        .iter()
        .flat_map(|(family, aliases)| aliases.iter().map(move |alias| (*family, *alias)))
}

fn language_map(entries: &[(&str, &str)]) -> LanguageFontMap {
    let mut map = LanguageFontMap::with_capacity(entries.len());
    for (tag, families) in entries {
        match LanguageIdentifier::try_from_str(tag) {
            Ok(id) => {
                map.insert(id, (*families).into());
            }
            Err(err) => log::warn!("Skipping font list for invalid language tag {tag:?}: {err:?}"),
        }
    }
    map
}
