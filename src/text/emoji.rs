//! Emoji detection for event summaries

/// Pictographic blocks plus the variation selector that forces emoji
/// presentation. Heart (U+2764) without a selector renders as text.
#[inline]
fn is_probable_emoji(c: char) -> bool {
    let u = c as u32;
    matches!(
        u,
        0x1F000..=0x1FAFF | 0x2300..=0x23FF | 0x2600..=0x27BF | 0x2B00..=0x2BFF
    ) && u != 0x2764
}

/// Whether `word` contains at least one emoji
pub fn contains_emoji(word: &str) -> bool {
    word.chars().any(|c| c == '\u{FE0F}' || is_probable_emoji(c))
}
