//! Control-voltage to linear-gain transfer curves.
//!
//! The physical model covers three zones of control voltage: a hard cutoff
//! where the chip produces nothing, a logarithmic zone gaining a fixed
//! number of decibels per volt, and a saturation zone where excess voltage
//! is compressed through a rational soft knee so the gain approaches a
//! finite ceiling instead of growing without bound.

use crate::decibels::db_to_linear;
use crate::parameters::{Error, GainParameters};

/// Transfer curve of the physical VCA, saturation included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GainModel {
    parameters: GainParameters,
}

impl GainModel {
    pub fn new(parameters: GainParameters) -> Self {
        Self { parameters }
    }

    /// Linear gain for the given control voltage.
    ///
    /// Non-finite voltage is rejected. The curve is discontinuous at the
    /// cutoff voltage: the chip gates off completely rather than decaying
    /// toward zero asymptotically.
    pub fn evaluate(&self, voltage: f64) -> Result<f64, Error> {
        if !voltage.is_finite() {
            return Err(Error::NonFiniteVoltage);
        }

        let p = &self.parameters;
        if voltage <= p.cutoff_voltage() {
            return Ok(0.0);
        }
        if voltage <= p.linear_threshold() {
            return Ok(db_to_linear(voltage * p.db_per_volt()));
        }

        // Rational soft knee. At the threshold ratio is 0 and the
        // denominator 1, so the zone joins the logarithmic one continuously.
        let width = p.soft_zone_width();
        let excess = voltage - p.linear_threshold();
        let ratio = excess / width;
        let compressed_excess = width * ratio / (1.0 + ratio * p.softness());
        let saturated_voltage = p.linear_threshold() + compressed_excess;
        Ok(db_to_linear(saturated_voltage * p.db_per_volt()))
    }

    /// Supremum of the curve, approached as the voltage grows without
    /// bound. `None` when softness is zero and the curve is unbounded.
    #[must_use]
    pub fn gain_ceiling(&self) -> Option<f64> {
        let p = &self.parameters;
        if p.softness() == 0.0 {
            return None;
        }
        let limit_voltage = p.linear_threshold() + p.soft_zone_width() / p.softness();
        Some(db_to_linear(limit_voltage * p.db_per_volt()))
    }
}

/// Reference curve without the saturation knee, for comparison against
/// [`GainModel`]. Never drives the signal path itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdealGainModel {
    parameters: GainParameters,
}

impl IdealGainModel {
    pub fn new(parameters: GainParameters) -> Self {
        Self { parameters }
    }

    /// Linear gain under the unbounded logarithmic law.
    pub fn evaluate(&self, voltage: f64) -> Result<f64, Error> {
        if !voltage.is_finite() {
            return Err(Error::NonFiniteVoltage);
        }

        let p = &self.parameters;
        if voltage <= p.cutoff_voltage() {
            return Ok(0.0);
        }
        Ok(db_to_linear(voltage * p.db_per_volt()))
    }
}
