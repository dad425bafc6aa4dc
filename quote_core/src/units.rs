//! # Unit Types
//!
//! Type-safe wrappers for the measurement units the estimator works in.
//! Lightweight f64 newtypes, not a full units library: the domain uses a
//! small fixed set of metric units and JSON serialization must stay plain
//! numbers.
//!
//! Fabrication drawings give openings in millimeters; all densities and
//! weights are per meter / per square meter, so the only conversion that
//! matters is mm → m.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{Millimeters, Meters, SquareMeters};
//!
//! let width: Meters = Millimeters(900.0).into();
//! let height: Meters = Millimeters(1200.0).into();
//! assert_eq!(width.0, 0.9);
//!
//! let area: SquareMeters = width * height;
//! assert!((area.0 - 1.08).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in millimeters (raw form-field unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

/// Width × height gives an area
impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(Kilograms);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_meters() {
        let mm = Millimeters(1500.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 1.5);
    }

    #[test]
    fn test_meters_to_mm() {
        let m = Meters(0.75);
        let mm: Millimeters = m.into();
        assert_eq!(mm.0, 750.0);
    }

    #[test]
    fn test_area_from_lengths() {
        let area = Meters(2.0) * Meters(1.5);
        assert_eq!(area.0, 3.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilograms(10.0);
        let b = Kilograms(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(4.2);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "4.2");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
