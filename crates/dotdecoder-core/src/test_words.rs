//! Word list generators shared by unit tests.

/// Generate `count` distinct lowercase filler words.
///
/// All words start with `w` so tests can add realistic entries with other
/// leading letters without colliding on prefixes.
pub(crate) fn filler_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let a = char::from(b'a' + (i / 676 % 26) as u8);
            let b = char::from(b'a' + (i / 26 % 26) as u8);
            let c = char::from(b'a' + (i % 26) as u8);
            format!("w{a}{b}{c}")
        })
        .collect()
}
