//! Stateless arithmetic helpers.
//!
//! `add`, `subtract`, `multiply` and `square` are generic over anything with
//! the matching `core::ops` impl and inherit that type's overflow rules: a
//! fixed-width integer overflowing is the caller's choice of type, and
//! `std::num::Wrapping` or a wider integer opts out of it. Only [`divide`]
//! and [`factorial`] report errors.

use core::ops::{Add, Mul, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::{ToPrimitive, Zero};
use tracing::debug;

use crate::domain::Error;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// A dividend whose quotient is never truncated.
pub trait Quotient: Copy + Zero + core::fmt::Display {
    type Output;

    /// `self / divisor`, or `None` when the result is not representable.
    fn checked_quotient(self, divisor: Self) -> Option<<Self as Quotient>::Output>;
}

macro_rules! impl_quotient_as_f64 {
    ($($t:ty),*) => {
        $(
            impl Quotient for $t {
                type Output = f64;

                fn checked_quotient(self, divisor: Self) -> Option<f64> {
                    Some(self as f64 / divisor as f64)
                }
            }
        )*
    };
}

impl_quotient_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Quotient for f32 {
    type Output = f32;

    fn checked_quotient(self, divisor: Self) -> Option<f32> {
        Some(self / divisor)
    }
}

impl Quotient for f64 {
    type Output = f64;

    fn checked_quotient(self, divisor: Self) -> Option<f64> {
        Some(self / divisor)
    }
}

impl Quotient for Decimal {
    type Output = Decimal;

    fn checked_quotient(self, divisor: Self) -> Option<Decimal> {
        self.checked_div(divisor)
    }
}

/// `a / b` without truncation: integers divide as `f64`, floats and
/// [`Decimal`] keep their own type.
pub fn divide<T: Quotient>(a: T, b: T) -> Result<<T as Quotient>::Output, Error> {
    if b.is_zero() {
        debug!("rejected division by zero");
        return Err(Error::DivisionByZero);
    }
    a.checked_quotient(b)
        .ok_or_else(|| Error::Overflow(format!("{} / {} is out of range", a, b)))
}

pub fn square<T: Mul<Output = T> + Copy>(a: T) -> T {
    a * a
}

/// A number that may or may not hold a whole value.
pub trait Integral: Copy + core::fmt::Display {
    /// The value as an integer, or `None` if it has a fractional part or
    /// is not finite.
    fn to_integer(self) -> Option<i128>;
}

macro_rules! impl_integral_lossless {
    ($($t:ty),*) => {
        $(
            impl Integral for $t {
                fn to_integer(self) -> Option<i128> {
                    Some(i128::from(self))
                }
            }
        )*
    };
}

impl_integral_lossless!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl Integral for isize {
    fn to_integer(self) -> Option<i128> {
        i128::try_from(self).ok()
    }
}

impl Integral for u128 {
    fn to_integer(self) -> Option<i128> {
        // anything past i128::MAX overflows the factorial anyway
        Some(i128::try_from(self).unwrap_or(i128::MAX))
    }
}

impl Integral for usize {
    fn to_integer(self) -> Option<i128> {
        i128::try_from(self).ok()
    }
}

impl Integral for f32 {
    fn to_integer(self) -> Option<i128> {
        if self.is_finite() && self.fract() == 0.0 {
            self.to_i128()
        } else {
            None
        }
    }
}

impl Integral for f64 {
    fn to_integer(self) -> Option<i128> {
        if self.is_finite() && self.fract() == 0.0 {
            self.to_i128()
        } else {
            None
        }
    }
}

impl Integral for Decimal {
    fn to_integer(self) -> Option<i128> {
        if self.fract().is_zero() {
            self.to_i128()
        } else {
            None
        }
    }
}

/// Exact `n!`.
///
/// Fails with [`Error::InvalidType`] for non-whole input,
/// [`Error::InvalidArgument`] for negative input and [`Error::Overflow`]
/// once the product no longer fits in a `u128` (from `35!` on).
pub fn factorial<N: Integral>(n: N) -> Result<u128, Error> {
    let Some(value) = n.to_integer() else {
        debug!(%n, "rejected non-integral factorial input");
        return Err(Error::InvalidType(format!("{} is not an integer", n)));
    };
    if value < 0 {
        debug!(%value, "rejected negative factorial input");
        return Err(Error::InvalidArgument(format!(
            "Input must be non-negative, got {}",
            value
        )));
    }

    (2..=value as u128)
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| Error::Overflow(format!("{}! does not fit in 128 bits", value)))
}
