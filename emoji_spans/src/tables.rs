//! Code point range table used by [`classify`](crate::category::classify).
//!
//! Ranges are inclusive, sorted by their first code point and pairwise
//! disjoint. The pictograph ranges follow the `Extended_Pictographic`
//! property of [`emoji-data.txt`], so symbols sharing a block with emoji (✓,
//! ❶, ➜) stay plain; the glue code points follow [UTS #51].
//!
//! [`emoji-data.txt`]: https://www.unicode.org/Public/UCD/latest/ucd/emoji/emoji-data.txt
//! [UTS #51]: https://www.unicode.org/reports/tr51/

use crate::Category::{self, *};

pub(crate) const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub(crate) const TEXT_PRESENTATION_SELECTOR: char = '\u{FE0E}';
pub(crate) const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';
pub(crate) const COMBINING_ENCLOSING_KEYCAP: char = '\u{20E3}';

#[rustfmt::skip]
pub(crate) static EMOJI_TABLE: &[(char, char, Category)] = &[
    ('#', '#', EmojiTextDefault),
    ('*', '*', EmojiTextDefault),
    ('0', '9', EmojiTextDefault),
    ('\u{00A9}', '\u{00A9}', EmojiTextDefault),   // ©
    ('\u{00AE}', '\u{00AE}', EmojiTextDefault),   // ®
    ('\u{200D}', '\u{200D}', Zwj),
    ('\u{203C}', '\u{203C}', EmojiTextDefault),   // ‼
    ('\u{2049}', '\u{2049}', EmojiTextDefault),   // ⁉
    ('\u{20E3}', '\u{20E3}', EnclosingKeycap),
    ('\u{2122}', '\u{2122}', EmojiTextDefault),   // ™
    ('\u{2139}', '\u{2139}', EmojiTextDefault),   // ℹ
    ('\u{2194}', '\u{2199}', EmojiTextDefault),   // ↔ ..= ↙
    ('\u{21A9}', '\u{21AA}', EmojiTextDefault),   // ↩ ↪
    ('\u{231A}', '\u{231B}', EmojiBase),          // ⌚ ⌛
    ('\u{2328}', '\u{2328}', EmojiBase),          // ⌨
    ('\u{23CF}', '\u{23CF}', EmojiBase),          // ⏏
    ('\u{23E9}', '\u{23F3}', EmojiBase),          // ⏩ ..= ⏳
    ('\u{23F8}', '\u{23FA}', EmojiBase),          // ⏸ ..= ⏺
    ('\u{24C2}', '\u{24C2}', EmojiTextDefault),   // Ⓜ
    ('\u{25AA}', '\u{25AB}', EmojiTextDefault),   // ▪ ▫
    ('\u{25B6}', '\u{25B6}', EmojiTextDefault),   // ▶
    ('\u{25C0}', '\u{25C0}', EmojiTextDefault),   // ◀
    ('\u{25FB}', '\u{25FE}', EmojiTextDefault),   // ◻ ..= ◾
    // Miscellaneous Symbols
    ('\u{2600}', '\u{2605}', EmojiBase),        // ☀ ..= ★
    ('\u{2607}', '\u{2612}', EmojiBase),
    ('\u{2614}', '\u{2685}', EmojiBase),        // ☔ ..= ⚅
    ('\u{2690}', '\u{2705}', EmojiBase),        // ⚐ ..= ✅
    // Dingbats
    ('\u{2708}', '\u{2712}', EmojiBase),        // ✈ ..= ✒
    ('\u{2714}', '\u{2714}', EmojiBase),        // ✔
    ('\u{2716}', '\u{2716}', EmojiBase),        // ✖
    ('\u{271D}', '\u{271D}', EmojiBase),        // ✝
    ('\u{2721}', '\u{2721}', EmojiBase),        // ✡
    ('\u{2728}', '\u{2728}', EmojiBase),        // ✨
    ('\u{2733}', '\u{2734}', EmojiBase),        // ✳ ✴
    ('\u{2744}', '\u{2744}', EmojiBase),        // ❄
    ('\u{2747}', '\u{2747}', EmojiBase),        // ❇
    ('\u{274C}', '\u{274C}', EmojiBase),        // ❌
    ('\u{274E}', '\u{274E}', EmojiBase),        // ❎
    ('\u{2753}', '\u{2755}', EmojiBase),        // ❓ ..= ❕
    ('\u{2757}', '\u{2757}', EmojiBase),        // ❗
    ('\u{2763}', '\u{2767}', EmojiBase),        // ❣ ..= ❧
    ('\u{2795}', '\u{2797}', EmojiBase),        // ➕ ..= ➗
    ('\u{27A1}', '\u{27A1}', EmojiBase),        // ➡
    ('\u{27B0}', '\u{27B0}', EmojiBase),        // ➰
    ('\u{27BF}', '\u{27BF}', EmojiBase),        // ➿
    ('\u{2934}', '\u{2935}', EmojiTextDefault),   // ⤴ ⤵
    ('\u{2B05}', '\u{2B07}', EmojiBase),          // ⬅ ..= ⬇
    ('\u{2B1B}', '\u{2B1C}', EmojiBase),          // ⬛ ⬜
    ('\u{2B50}', '\u{2B50}', EmojiBase),          // ⭐
    ('\u{2B55}', '\u{2B55}', EmojiBase),          // ⭕
    ('\u{3030}', '\u{3030}', EmojiTextDefault),   // 〰
    ('\u{303D}', '\u{303D}', EmojiTextDefault),   // 〽
    ('\u{3297}', '\u{3297}', EmojiTextDefault),   // ㊗
    ('\u{3299}', '\u{3299}', EmojiTextDefault),   // ㊙
    ('\u{FE0E}', '\u{FE0F}', VariationSelector),
    // Mahjong Tiles, Domino Tiles, Playing Cards
    ('\u{1F000}', '\u{1F0FF}', EmojiBase),
    ('\u{1F170}', '\u{1F19A}', EmojiBase),        // 🅰 ..= 🆚
    ('\u{1F1E6}', '\u{1F1FF}', RegionalIndicator),
    ('\u{1F201}', '\u{1F251}', EmojiBase),        // 🈁 ..= 🉑
    // Miscellaneous Symbols and Pictographs
    ('\u{1F300}', '\u{1F3FA}', EmojiBase),
    ('\u{1F3FB}', '\u{1F3FF}', Modifier),
    // Miscellaneous Symbols and Pictographs, Emoticons
    ('\u{1F400}', '\u{1F64F}', EmojiBase),
    // Transport and Map Symbols
    ('\u{1F680}', '\u{1F6FF}', EmojiBase),
    // Geometric Shapes Extended
    ('\u{1F7E0}', '\u{1F7EB}', EmojiBase),
    ('\u{1F7F0}', '\u{1F7F0}', EmojiBase),
    // Supplemental Symbols and Pictographs
    ('\u{1F90C}', '\u{1F93A}', EmojiBase),      // 🤌 ..= 🤺
    ('\u{1F93C}', '\u{1F945}', EmojiBase),      // 🤼 ..= 🥅
    ('\u{1F947}', '\u{1F9FF}', EmojiBase),      // 🥇 ..= 🧿
    // Symbols and Pictographs Extended-A
    ('\u{1FA70}', '\u{1FAFF}', EmojiBase),
    ('\u{E0020}', '\u{E007F}', TagCharacter),
];

/// Texts built around every range edge of [`EMOJI_TABLE`]: the first and
/// last code point of each range and the code points just outside it, alone
/// and combined with attachments in varying orders.
#[cfg(test)]
pub(crate) fn edge_samples() -> Vec<String> {
    const ATTACHMENTS: [char; 6] = [
        EMOJI_PRESENTATION_SELECTOR,
        TEXT_PRESENTATION_SELECTOR,
        COMBINING_ENCLOSING_KEYCAP,
        ZERO_WIDTH_JOINER,
        '\u{1F3FB}',
        '\u{E0067}',
    ];

    let edges: Vec<char> = EMOJI_TABLE
        .iter()
        .flat_map(|&(first, last, _)| {
            let (first, last) = (u32::from(first), u32::from(last));
            [first.checked_sub(1), Some(first), Some(last), last.checked_add(1)]
        })
        .flatten()
        .filter_map(char::from_u32)
        .collect();

    let mut samples = Vec::new();
    for &c in &edges {
        samples.extend([
            format!("{c}"),
            format!("a{c}b"),
            format!("{c}{c}{c}"),
            format!("{c}\u{FE0F}\u{20E3}"),
            format!("{c}\u{1F3FD}\u{200D}😀"),
            format!("\u{200D}{c}\u{FE0F} "),
            format!("😀\u{200D}{c}"),
            format!("{c}\u{E0067}\u{E007F}\u{1F1E6}"),
        ]);
    }
    for a in ATTACHMENTS {
        for b in ATTACHMENTS {
            samples.extend([
                format!("{a}{b}"),
                format!("😀{a}{b}x"),
                format!("#{a}{b}#"),
                format!("\u{1F1FA}{a}\u{1F1F8}{b}"),
            ]);
        }
    }
    samples
}
