pub const MAX_SCORE: u8 = 100;

pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, i32::from(MAX_SCORE)) as u8
}

/// Rounds half up, then clamps into 0..=100.
pub fn round_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

pub fn mean(values: impl IntoIterator<Item = u8>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0u32, 0u32), |(s, c), v| (s + u32::from(v), c + 1));
    (count > 0).then(|| f64::from(sum) / f64::from(count))
}
