//! Calibration constants of the modeled VCA control path.

use thiserror::Error;

/// Failures of parameter construction or curve evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },
    #[error("control voltage must be finite")]
    NonFiniteVoltage,
}

/// Calibration of a single VCA unit.
///
/// The values describe where the chip shuts off, how many decibels it gains
/// per volt, and where and how hard it saturates. Units vary, so each
/// evaluation takes its own set instead of sharing module-wide constants.
///
/// The saturation formula divides by `hard_limit - linear_threshold`, so
/// construction enforces `hard_limit > linear_threshold > cutoff_voltage`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GainParameters {
    db_per_volt: f64,
    cutoff_voltage: f64,
    linear_threshold: f64,
    hard_limit: f64,
    softness: f64,
}

impl GainParameters {
    pub fn try_new(
        db_per_volt: f64,
        cutoff_voltage: f64,
        linear_threshold: f64,
        hard_limit: f64,
        softness: f64,
    ) -> Result<Self, Error> {
        let fields = [
            db_per_volt,
            cutoff_voltage,
            linear_threshold,
            hard_limit,
            softness,
        ];
        if fields.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidConfiguration {
                reason: "all parameters must be finite",
            });
        }
        if cutoff_voltage >= linear_threshold {
            return Err(Error::InvalidConfiguration {
                reason: "cutoff voltage must lie below the linear threshold",
            });
        }
        if hard_limit <= linear_threshold {
            return Err(Error::InvalidConfiguration {
                reason: "hard limit must lie above the linear threshold",
            });
        }
        if softness < 0.0 {
            return Err(Error::InvalidConfiguration {
                reason: "softness must not be negative",
            });
        }
        Ok(Self {
            db_per_volt,
            cutoff_voltage,
            linear_threshold,
            hard_limit,
            softness,
        })
    }

    pub fn db_per_volt(&self) -> f64 {
        self.db_per_volt
    }

    pub fn cutoff_voltage(&self) -> f64 {
        self.cutoff_voltage
    }

    pub fn linear_threshold(&self) -> f64 {
        self.linear_threshold
    }

    pub fn hard_limit(&self) -> f64 {
        self.hard_limit
    }

    pub fn softness(&self) -> f64 {
        self.softness
    }

    /// Width of the soft knee, in volts. Positive by construction.
    pub(crate) fn soft_zone_width(&self) -> f64 {
        self.hard_limit - self.linear_threshold
    }
}

/// Factory calibration of the CEM 3330 control path: 10 dB/V, full cutoff
/// at -12 V, saturation setting in above 0 V with a 3 V knee.
impl Default for GainParameters {
    fn default() -> Self {
        Self {
            db_per_volt: 10.0,
            cutoff_voltage: -12.0,
            linear_threshold: 0.0,
            hard_limit: 3.0,
            softness: 2.0,
        }
    }
}
