//! Voltage units.
//!
//! The canonical scaling unit for this dimension is [`Millivolt`]
//! (`Millivolt::RATIO == 1.0`), matching the unit the report charts and scan
//! thresholds are expressed in. Survey loggers store potentials in volts, so
//! [`Volt`] carries the exact ratio `1000.0` and converting a stored reading
//! for display is `reading.to::<Millivolt>()` with no intermediate rounding.
//!
//! ```rust
//! use cis_rust::units::{Millivolt, Volts};
//!
//! let reading = Volts::new(-0.85);
//! assert_eq!(reading.to::<Millivolt>().value(), -850.0);
//! ```

use qtty::{Dimension, Quantity, Unit};

/// Dimension tag for electric potential.
pub enum ElectricPotential {}
impl Dimension for ElectricPotential {}

/// Marker trait for any [`Unit`] whose dimension is [`ElectricPotential`].
pub trait PotentialUnit: Unit<Dim = ElectricPotential> {}
impl<T: Unit<Dim = ElectricPotential>> PotentialUnit for T {}

/// Millivolt (canonical scaling unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Millivolt {}
impl Unit for Millivolt {
    const RATIO: f64 = 1.0;
    type Dim = ElectricPotential;
    const SYMBOL: &'static str = "mV";
}
/// A quantity measured in millivolts.
pub type Millivolts = Quantity<Millivolt>;

/// Volt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Volt {}
impl Unit for Volt {
    const RATIO: f64 = 1000.0;
    type Dim = ElectricPotential;
    const SYMBOL: &'static str = "V";
}
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;
