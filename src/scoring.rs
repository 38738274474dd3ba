//! Score tables.
//!
//! A link's score depends only on its length, through a fixed bracket table.
//! Brackets are closed below and open above: exactly 5 km already scores
//! the 5-10 km value.

/// Score of every field, regardless of its size.
pub const FIELD_SCORE: u32 = 1250;

/// Lower bound of each bracket in meters, paired with its score.
///
/// Anything under the first bound scores 0.
const LINK_BRACKETS: [(f64, u32); 8] = [
    (1_000.0, 313),
    (5_000.0, 1250),
    (10_000.0, 1563),
    (25_000.0, 2500),
    (50_000.0, 3125),
    (100_000.0, 3750),
    (150_000.0, 4375),
    (200_000.0, 5000),
];

/// Score of a link of the given length in meters.
pub fn link_score(distance_m: f64) -> u32 {
    LINK_BRACKETS
        .iter()
        .rev()
        .find(|(lower, _)| distance_m >= *lower)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

/// Score earned per meter of link, with lengths under a meter counted as one.
///
/// The greedy selector ranks candidates by this value.
pub fn score_density(score: u32, distance_m: f64) -> f64 {
    f64::from(score) / distance_m.max(1.0)
}
