//! Conversion between linear gain and decibels.

/// Reported level for gains at or below [`GAIN_EPSILON`], standing in for
/// the -infinity a true logarithm would reach.
pub const DB_FLOOR: f64 = -200.0;

/// Gains at or below this are treated as silence when converting to dB.
pub const GAIN_EPSILON: f64 = 1e-10;

/// Express a linear gain on a decibel scale, for display and comparison.
#[must_use]
pub fn linear_to_db(gain: f64) -> f64 {
    if gain <= GAIN_EPSILON {
        DB_FLOOR
    } else {
        20.0 * libm::log10(gain)
    }
}

/// Turn a decibel level into a linear gain multiplier.
#[must_use]
pub fn db_to_linear(db: f64) -> f64 {
    libm::pow(10.0, db / 20.0)
}
