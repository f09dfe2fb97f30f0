//! Heuristic weights and ratio arithmetic for Othello evaluation

/// Weight applied to each sub-heuristic in the final linear combination
pub struct HeuristicWeight;

impl HeuristicWeight {
    /// Corner occupancy (raw 0..=16)
    pub const CORNER: i32 = 50;
    /// Game-phase bucket (raw 0..=3)
    pub const PHASE: i32 = 3;
    /// Center-square share in the early game (raw 0 or 2)
    pub const CENTER: i32 = 7;
    /// Tiles next to corners (raw -4..=4)
    pub const CORNER_NEIGHBOR: i32 = 25;
    /// Second-ring occupancy (raw 0 or 1)
    pub const DANGER: i32 = 5;
    /// Edge occupancy in the late game (raw 0 or 2)
    pub const PERIMETER: i32 = 5;
}

/// How tile-count ratios are compared against the fractional thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioMode {
    /// Integer division of the counts. The ratio is 0 unless numerator equals
    /// denominator, which is how the reference engine computes it.
    #[default]
    Truncated,
    /// Real-valued division.
    Exact,
}

impl RatioMode {
    /// `part / total` under this mode. `total` must be non-zero.
    #[inline]
    pub fn ratio(self, part: u32, total: u32) -> f64 {
        debug_assert!(total > 0);
        match self {
            RatioMode::Truncated => f64::from(part / total),
            RatioMode::Exact => f64::from(part) / f64::from(total),
        }
    }
}
