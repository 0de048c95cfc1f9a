//! Fixed-point price and quantity types.
//!
//! Both types wrap a signed 64-bit integer holding the value scaled by
//! `SCALE_FACTOR`, so a raw value of `12345` reads as `1.2345`. Arithmetic
//! is plain 64-bit integer arithmetic and the ordering is the integer
//! ordering, which keeps every comparison and every sum exact. Overflow is
//! out of domain and not defended against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Scaled units per whole unit: four fractional decimal digits.
pub const SCALE_FACTOR: i64 = 10_000;

macro_rules! fixed_point {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Sentinel for a value outside the usable domain.
            pub const INVALID: $name = $name(i64::MIN);
            /// Smallest representable value.
            pub const MIN_VALUE: $name = $name(i64::MIN);
            /// Largest representable value.
            pub const MAX_VALUE: $name = $name(i64::MAX);
            /// Zero.
            pub const ZERO: $name = $name(0);

            /// Builds a value from its raw scaled representation.
            pub const fn new(raw: i64) -> Self {
                $name(raw)
            }

            /// Builds a value from whole units: `from_units(3)` is `3.0000`.
            pub const fn from_units(units: i64) -> Self {
                $name(units * SCALE_FACTOR)
            }

            /// Converts from a float, truncating toward zero past the fourth
            /// fractional digit.
            pub fn from_f64(value: f64) -> Self {
                $name((value * SCALE_FACTOR as f64) as i64)
            }

            /// Converts to a float. Lossy; for display and interop only.
            pub fn to_f64(self) -> f64 {
                self.0 as f64 / SCALE_FACTOR as f64
            }

            /// The raw scaled representation.
            pub const fn raw_value(self) -> i64 {
                self.0
            }

            /// Whether the value is exactly zero.
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }

        impl Mul<i64> for $name {
            type Output = $name;
            fn mul(self, rhs: i64) -> $name {
                $name(self.0 * rhs)
            }
        }

        /// Integer division on the raw value, truncating toward zero.
        impl Div<i64> for $name {
            type Output = $name;
            fn div(self, rhs: i64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if *self == Self::INVALID {
                    return f.write_str("INVALID");
                }
                if *self == Self::MAX_VALUE {
                    return f.write_str("MAX");
                }
                if *self == Self::MIN_VALUE {
                    return f.write_str("MIN");
                }

                let abs = self.0.unsigned_abs();
                let int_part = abs / SCALE_FACTOR as u64;
                let frac_part = abs % SCALE_FACTOR as u64;

                if self.0 < 0 {
                    f.write_str("-")?;
                }
                write!(f, "{int_part}.{frac_part:04}")
            }
        }
    };
}

fixed_point! {
    /// A price as a fixed-point decimal with four fractional digits.
    Price
}

fixed_point! {
    /// A quantity as a fixed-point decimal with four fractional digits.
    ///
    /// Quantities are semantically non-negative everywhere the book touches
    /// them; a quantity held by a live order is strictly positive.
    Quantity
}
