//! Model of the control-voltage-to-gain transfer curve of the CEM 3330 VCA.
//!
//! The chip opens logarithmically with its control voltage and saturates
//! toward a finite gain ceiling when driven past its linear range. This
//! crate reproduces that curve as a pure function, meant to scale amplitude
//! in a synthesis control path.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod decibels;
pub mod gain;
pub mod parameters;

pub use gain::{GainModel, IdealGainModel};
pub use parameters::{Error, GainParameters};
