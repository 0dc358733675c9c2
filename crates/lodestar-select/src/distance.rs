//! Threshold-ladder helper for building LOD distance ladders.

/// Default growth factor between consecutive LOD activation distances.
pub const DEFAULT_SCALE_FACTOR: f32 = 5.0;

/// Activation distance for `level` in a geometric ladder anchored at
/// `size` (typically the largest primitive dimension of the object).
///
/// Level 0 always activates at distance 0 so the ladder has the baseline
/// entry the selector convention expects; level `n > 0` activates at
/// `size * DEFAULT_SCALE_FACTOR^n`.
pub fn level_distance(size: f32, level: usize) -> f32 {
    level_distance_with_scale(size, level, DEFAULT_SCALE_FACTOR)
}

/// Same as [`level_distance`] with an explicit growth factor.
pub fn level_distance_with_scale(size: f32, level: usize, scale_factor: f32) -> f32 {
    if level == 0 {
        return 0.0;
    }
    size * scale_factor.powi(level as i32)
}
