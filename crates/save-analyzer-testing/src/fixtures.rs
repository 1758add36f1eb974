//! Timestamp sets for common play patterns.
//!
//! All sets start at `BASE_TS` so that rendered local times stay in a sane range.

/// 2023-11-14T22:13:20Z
pub const BASE_TS: i64 = 1_700_000_000;

/// Two sessions: three saves over 200s, then two saves over 50s.
pub fn two_sessions() -> Vec<i64> {
    [0, 100, 200, 10_000, 10_050]
        .iter()
        .map(|offset| BASE_TS + offset)
        .collect()
}

/// Two saves an hour apart: two single-save runs under the default 30m delay.
pub fn lonely_saves() -> Vec<i64> {
    vec![BASE_TS, BASE_TS + 3600]
}

/// An evening of quicksaves every 10 minutes for two hours (13 saves).
pub fn long_evening() -> Vec<i64> {
    (0..13).map(|i| BASE_TS + i * 600).collect()
}
