//! The numeric representation used for every amount in the library.
//!
//! Exactly one representation is active per build, chosen with cargo features:
//!
//! | Feature   | [`Amount`]                 |
//! | --------- | -------------------------- |
//! | (none)    | [`f64`]                    |
//! | `single`  | [`f32`]                    |
//! | `decimal` | [`rust_decimal::Decimal`]  |
//!
//! If both `single` and `decimal` are enabled, `decimal` takes precedence.
//!
//! Unit factors are always authored as [`f64`] literals so that units can be declared as
//! constants; they are converted to [`Amount`] with [`from_factor`] at conversion time. Values
//! supplied by callers go through [`ToAmount`] instead, which reports values the representation
//! cannot hold.

use crate::error::{FaultKind, NumericFault};
use std::hash::Hasher;

#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;

/// The scalar type in which every amount is stored.
#[cfg(feature = "decimal")]
pub type Amount = rust_decimal::Decimal;

/// The scalar type in which every amount is stored.
#[cfg(all(feature = "single", not(feature = "decimal")))]
pub type Amount = f32;

/// The scalar type in which every amount is stored.
#[cfg(not(any(feature = "single", feature = "decimal")))]
pub type Amount = f64;

/// The zero amount.
pub fn zero() -> Amount {
    <Amount as num_traits::Zero>::zero()
}

/// Types that can be turned into an [`Amount`].
///
/// There is one implementation per supported precision, so a measure can be constructed from a
/// literal of any of them regardless of which representation the build uses. Narrowing
/// conversions (e.g. [`f64`] into an `f32` build) round to the nearest representable value, and
/// overflow to infinity like any other floating point operation.
///
/// The decimal representation has neither infinities nor NaN, and a bounded range. Converting such
/// a value into it fails with a [`NumericFault`] from [`ToAmount::try_to_amount`], and panics from
/// [`ToAmount::to_amount`].
pub trait ToAmount: Sized {
    /// Converts `self` into the configured [`Amount`] type, or reports why it cannot be
    /// represented.
    fn try_to_amount(self) -> Result<Amount, NumericFault>;

    /// Converts `self` into the configured [`Amount`] type.
    ///
    /// # Panics
    ///
    /// Panics if the value cannot be represented, which only happens with the decimal
    /// representation.
    fn to_amount(self) -> Amount {
        match self.try_to_amount() {
            Ok(amount) => amount,
            Err(err) => panic!("value cannot be represented as an amount: {}", err),
        }
    }
}

#[cfg(not(any(feature = "single", feature = "decimal")))]
impl ToAmount for f64 {
    fn try_to_amount(self) -> Result<Amount, NumericFault> {
        Ok(self)
    }
}

#[cfg(all(feature = "single", not(feature = "decimal")))]
impl ToAmount for f64 {
    fn try_to_amount(self) -> Result<Amount, NumericFault> {
        Ok(self as f32)
    }
}

#[cfg(feature = "decimal")]
impl ToAmount for f64 {
    fn try_to_amount(self) -> Result<Amount, NumericFault> {
        if self.is_nan() {
            return Err(NumericFault::new(FaultKind::NotFinite));
        }

        // infinities and magnitudes beyond `Decimal::MAX` have no decimal counterpart
        <Amount as num_traits::FromPrimitive>::from_f64(self)
            .ok_or_else(|| NumericFault::new(FaultKind::Overflow))
    }
}

impl ToAmount for f32 {
    fn try_to_amount(self) -> Result<Amount, NumericFault> {
        (self as f64).try_to_amount()
    }
}

#[cfg(feature = "decimal")]
impl ToAmount for rust_decimal::Decimal {
    fn try_to_amount(self) -> Result<Amount, NumericFault> {
        Ok(self)
    }
}

/// Converts a unit factor into an [`Amount`].
#[cfg(not(any(feature = "single", feature = "decimal")))]
pub fn from_factor(factor: f64) -> Amount {
    factor
}

/// Converts a unit factor into an [`Amount`].
#[cfg(all(feature = "single", not(feature = "decimal")))]
pub fn from_factor(factor: f64) -> Amount {
    factor as f32
}

/// Converts a unit factor into an [`Amount`].
///
/// # Panics
///
/// Panics if the factor is not finite or lies outside the range of [`Decimal`]. The factors of
/// the shipped units are all well inside it.
#[cfg(feature = "decimal")]
pub fn from_factor(factor: f64) -> Amount {
    <Amount as num_traits::FromPrimitive>::from_f64(factor)
        .unwrap_or_else(|| panic!("unit factor {} cannot be represented as a decimal", factor))
}

/// Converts an amount to [`f64`], rounding to the nearest representable value.
pub fn to_f64(amount: Amount) -> f64 {
    num_traits::ToPrimitive::to_f64(&amount).unwrap_or(f64::NAN)
}

/// Returns true if the amount is a finite number. Always true for the decimal representation.
#[cfg(not(feature = "decimal"))]
pub fn is_finite(amount: Amount) -> bool {
    amount.is_finite()
}

/// Returns true if the amount is a finite number. Always true for the decimal representation.
#[cfg(feature = "decimal")]
pub fn is_finite(_: Amount) -> bool {
    true
}

/// The canonical form of an amount for display.
///
/// Decimal arithmetic keeps trailing zeros (`2.00 * 2.00` is `4.0000`); they are stripped here.
/// Floating point amounts are returned unchanged.
#[cfg(not(feature = "decimal"))]
pub fn normalize(amount: Amount) -> Amount {
    amount
}

/// The canonical form of an amount for display.
///
/// Decimal arithmetic keeps trailing zeros (`2.00 * 2.00` is `4.0000`); they are stripped here.
/// Floating point amounts are returned unchanged.
#[cfg(feature = "decimal")]
pub fn normalize(amount: Amount) -> Amount {
    amount.normalize()
}

/// Feeds an amount into a hasher, such that amounts that compare equal hash equally.
#[cfg(not(feature = "decimal"))]
pub fn hash<H: Hasher>(amount: Amount, state: &mut H) {
    // `0.0 == -0.0`, so both must hash the same
    let amount = if amount == 0.0 { 0.0 } else { amount };
    state.write(&amount.to_bits().to_ne_bytes());
}

/// Feeds an amount into a hasher, such that amounts that compare equal hash equally.
#[cfg(feature = "decimal")]
pub fn hash<H: Hasher>(amount: Amount, state: &mut H) {
    std::hash::Hash::hash(&amount.normalize(), state);
}

/// Divides `lhs` by `rhs`, reporting a [`NumericFault`] instead of producing a non-finite result
/// (floating point) or panicking (decimal).
pub fn checked_div(lhs: Amount, rhs: Amount) -> Result<Amount, NumericFault> {
    if rhs == zero() {
        return Err(NumericFault::new(FaultKind::DivisionByZero));
    }

    #[cfg(feature = "decimal")]
    let quotient = lhs.checked_div(rhs).ok_or(NumericFault::new(FaultKind::Overflow))?;
    #[cfg(not(feature = "decimal"))]
    let quotient = lhs / rhs;

    finite(quotient)
}

/// Multiplies `lhs` by `rhs`, reporting a [`NumericFault`] on overflow.
pub fn checked_mul(lhs: Amount, rhs: Amount) -> Result<Amount, NumericFault> {
    #[cfg(feature = "decimal")]
    let product = lhs.checked_mul(rhs).ok_or(NumericFault::new(FaultKind::Overflow))?;
    #[cfg(not(feature = "decimal"))]
    let product = lhs * rhs;

    finite(product)
}

/// Passes a finite amount through, otherwise reports why it is not finite.
#[cfg(not(feature = "decimal"))]
fn finite(amount: Amount) -> Result<Amount, NumericFault> {
    if amount.is_nan() {
        Err(NumericFault::new(FaultKind::NotFinite))
    } else if amount.is_infinite() {
        Err(NumericFault::new(FaultKind::Overflow))
    } else {
        Ok(amount)
    }
}

#[cfg(feature = "decimal")]
fn finite(amount: Amount) -> Result<Amount, NumericFault> {
    Ok(amount)
}

/// Relative tolerance of [`assert_amount_eq`] for the active representation.
#[cfg(all(test, not(any(feature = "single", feature = "decimal"))))]
pub(crate) const TOLERANCE: f64 = 1e-6;

/// Relative tolerance of [`assert_amount_eq`] for the active representation.
#[cfg(all(test, feature = "single", not(feature = "decimal")))]
pub(crate) const TOLERANCE: f64 = 1e-4;

/// Relative tolerance of [`assert_amount_eq`] for the active representation.
#[cfg(all(test, feature = "decimal"))]
pub(crate) const TOLERANCE: f64 = 1e-9;

/// Asserts that two amounts are equal within the precision of the active representation.
///
/// Either side may be an [`Amount`] or any other [`ToAmount`] value, such as a float literal. The
/// tolerance is relative to the larger magnitude, and absolute for magnitudes below one. An
/// explicit tolerance can be passed as a third argument for expected values that are themselves
/// rounded; it never goes below the tolerance of the representation.
#[cfg(test)]
macro_rules! assert_amount_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::amount::assert_amount_eq!($actual, $expected, $crate::amount::TOLERANCE)
    };
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {{
        use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};

        let actual = $crate::amount::to_f64($crate::amount::ToAmount::to_amount($actual));
        let expected = $crate::amount::to_f64($crate::amount::ToAmount::to_amount($expected));
        let tolerance = f64::max($tolerance, $crate::amount::TOLERANCE)
            * actual.abs().max(expected.abs()).max(1.0);
        assert_float_absolute_eq!(actual, expected, tolerance);
    }};
}

#[cfg(test)]
pub(crate) use assert_amount_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero_is_fault() {
        let err = checked_div(1.0_f64.to_amount(), zero()).unwrap_err();
        assert_eq!(err.kind(), FaultKind::DivisionByZero);
    }

    #[test]
    fn finite_quotient_passes() {
        assert_amount_eq!(checked_div(3.0_f64.to_amount(), 2.0_f64.to_amount()).unwrap(), 1.5);
    }

    #[test]
    fn signed_zeros_hash_equally() {
        use std::collections::hash_map::DefaultHasher;

        let mut a = DefaultHasher::new();
        let mut b = DefaultHasher::new();
        hash(0.0_f64.to_amount(), &mut a);
        hash((-0.0_f64).to_amount(), &mut b);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert_amount_eq!(1e6 + 1e-3, 1e6);
        assert_amount_eq!(0.0, 1e-12);
    }

    #[test]
    #[should_panic]
    fn tolerance_rejects_distinct_amounts() {
        assert_amount_eq!(1.0, 1.01);
    }

    #[cfg(not(feature = "decimal"))]
    #[test]
    fn overflowing_product_is_fault() {
        let err = checked_mul(1e300_f64.to_amount(), 1e300_f64.to_amount()).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Overflow);
    }

    #[cfg(not(feature = "decimal"))]
    #[test]
    fn nan_is_not_finite() {
        let err = checked_mul(f64::NAN.to_amount(), 1.0_f64.to_amount()).unwrap_err();
        assert_eq!(err.kind(), FaultKind::NotFinite);
        assert!(!is_finite(f64::NAN.to_amount()));
    }

    #[cfg(not(feature = "decimal"))]
    #[test]
    fn every_float_converts() {
        assert!(f64::NAN.try_to_amount().unwrap().is_nan());
        assert!(f64::INFINITY.try_to_amount().unwrap().is_infinite());
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_overflowing_product_is_fault() {
        let err = checked_mul(Decimal::MAX, Decimal::from(2)).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Overflow);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_overflowing_quotient_is_fault() {
        let err = checked_div(Decimal::MAX, 0.5_f64.to_amount()).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Overflow);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_out_of_range_input_is_fault() {
        assert_eq!(1e30_f64.try_to_amount().unwrap_err().kind(), FaultKind::Overflow);
        assert_eq!((-1e30_f32).try_to_amount().unwrap_err().kind(), FaultKind::Overflow);
        assert_eq!(f64::INFINITY.try_to_amount().unwrap_err().kind(), FaultKind::Overflow);
        assert_eq!(f64::NAN.try_to_amount().unwrap_err().kind(), FaultKind::NotFinite);
    }

    #[cfg(feature = "decimal")]
    #[test]
    #[should_panic(expected = "value cannot be represented as an amount")]
    fn decimal_out_of_range_conversion_panics() {
        1e30_f64.to_amount();
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_literals_are_exact() {
        assert_eq!(0.1_f64.to_amount() + 0.2_f64.to_amount(), 0.3_f64.to_amount());
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_normalize_strips_trailing_zeros() {
        let four = Decimal::new(200, 2) * Decimal::new(200, 2);
        assert_eq!(four.to_string(), "4.0000");
        assert_eq!(normalize(four).to_string(), "4");
    }
}
