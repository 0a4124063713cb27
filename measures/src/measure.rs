//! Provides [`Measure`], a value of a specific [`Quantity`].

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};
use super::{
    amount::{self, Amount, ToAmount},
    error::{DimensionMismatch, Error, NumericFault, Operand, Operation},
    quantity::Quantity,
    specific::SpecificMeasure,
    unit::Unit,
};

/// A scalar value of the quantity `Q`.
///
/// The amount is always stored in the reference unit of `Q`; an amount in any other unit is
/// computed on demand with [`Measure::get`] and never retained. Consequently, equality, ordering
/// and hashing only depend on the physical magnitude, not on the unit a measure was created with:
///
/// ```
/// use measures::{quantities::Length, Measure};
///
/// let a = Measure::<Length>::with_unit(5.0, Length::METER);
/// let b = Measure::<Length>::with_unit(500.0, Length::CENTIMETER);
/// assert_eq!(a, b);
/// assert_eq!(a.in_unit(Length::CENTIMETER).to_string(), "500 cm");
/// ```
///
/// Measures implement [`Eq`] and [`Hash`], so they can be used as keys of a
/// [`HashMap`](std::collections::HashMap). With a floating point representation a NaN amount is not
/// equal to itself, so a measure holding NaN can be inserted into a map but never found again.
pub struct Measure<Q: Quantity> {
    amount: Amount,
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> Measure<Q> {
    /// Creates a measure from an amount in the reference unit of `Q`.
    ///
    /// # Panics
    ///
    /// With the decimal representation, panics if the amount is NaN, infinite or out of range. Use
    /// [`Measure::try_new`] to get an error instead.
    pub fn new(amount: impl ToAmount) -> Self {
        Self::from_amount(amount.to_amount())
    }

    /// Creates a measure from an amount in the given unit.
    ///
    /// # Panics
    ///
    /// Panics like [`Measure::new`].
    pub fn with_unit(amount: impl ToAmount, unit: Unit<Q>) -> Self {
        Self::from_amount(unit.to_reference(amount))
    }

    /// Like [`Measure::new`], but reports an amount the representation cannot hold as a
    /// [`NumericFault`].
    pub fn try_new(amount: impl ToAmount) -> Result<Self, NumericFault> {
        amount.try_to_amount().map(Self::from_amount)
    }

    /// Like [`Measure::with_unit`], but reports an amount the representation cannot hold, in
    /// `unit` or in the reference unit, as a [`NumericFault`].
    pub fn try_with_unit(amount: impl ToAmount, unit: Unit<Q>) -> Result<Self, NumericFault> {
        let amount = amount.try_to_amount()?;
        unit.def().try_to_reference(amount).map(Self::from_amount)
    }

    pub(crate) fn from_amount(amount: Amount) -> Self {
        Self { amount, quantity: PhantomData }
    }

    /// The amount in the reference unit.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The unit [`Measure::amount`] is expressed in, which is always the reference unit of `Q`.
    pub fn unit(&self) -> Unit<Q> {
        Q::REFERENCE
    }

    /// The amount converted to the given unit.
    pub fn get(&self, unit: Unit<Q>) -> Amount {
        unit.from_reference(self.amount)
    }

    /// Returns a [`SpecificMeasure`] of the same magnitude that remembers the given unit.
    pub fn in_unit(&self, unit: Unit<Q>) -> SpecificMeasure<Q> {
        SpecificMeasure::new(*self, unit)
    }

    /// The sum of two measures.
    pub fn add(self, other: Self) -> Self {
        Self::from_amount(self.amount + other.amount)
    }

    /// The difference of two measures.
    pub fn subtract(self, other: Self) -> Self {
        Self::from_amount(self.amount - other.amount)
    }

    /// The measure multiplied by a dimensionless scalar.
    pub fn scale(self, scalar: impl ToAmount) -> Self {
        Self::from_amount(self.amount * scalar.to_amount())
    }

    /// The dimensionless ratio of two measures of the same quantity.
    ///
    /// A zero denominator yields whatever the numeric representation yields: infinity or NaN in
    /// floating point, a panic with the decimal representation. Use [`Measure::checked_ratio`] to
    /// get an error instead.
    pub fn ratio(self, denominator: Self) -> Amount {
        self.amount / denominator.amount
    }

    /// Like [`Measure::ratio`], but reports a [`NumericFault`] instead of producing a non-finite
    /// result or panicking.
    pub fn checked_ratio(self, denominator: Self) -> Result<Amount, NumericFault> {
        amount::checked_div(self.amount, denominator.amount)
    }

    /// Divides the measure by a scalar, reporting a [`NumericFault`] instead of producing a
    /// non-finite result or panicking.
    pub fn checked_div(self, scalar: impl ToAmount) -> Result<Self, NumericFault> {
        amount::checked_div(self.amount, scalar.to_amount()).map(Self::from_amount)
    }

    /// Compares the magnitudes of two measures. Returns [`None`] if either amount is NaN.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.amount.partial_cmp(&other.amount)
    }

    /// Multiplies two measures into a measure of `Q`.
    ///
    /// `Q` must be named explicitly, since several quantities can share the dimension of the
    /// product. Fails with [`Error::DimensionMismatch`] before doing any arithmetic if the
    /// dimension of `Q` is not the product of the operands' dimensions.
    ///
    /// ```
    /// use measures::{quantities::{Area, Length, Volume}, Measure};
    ///
    /// let side = Measure::<Length>::new(3.0);
    /// let area = Measure::<Area>::times(side, Measure::<Length>::new(4.0)).unwrap();
    /// assert_eq!(area, Measure::with_unit(12.0, Area::SQUARE_METER));
    ///
    /// assert!(Measure::<Volume>::times(side, side).is_err());
    /// ```
    pub fn times<Q1: Quantity, Q2: Quantity>(lhs: Measure<Q1>, rhs: Measure<Q2>) -> Result<Self, Error> {
        if !Q::DIMENSION.is_product_of(Q1::DIMENSION, Q2::DIMENSION) {
            return Err(mismatch::<Q1, Q2, Q>(Operation::Multiply).into());
        }
        Ok(Self::from_amount(lhs.amount * rhs.amount))
    }

    /// Divides two measures into a measure of `Q`.
    ///
    /// Fails with [`Error::DimensionMismatch`] before doing any arithmetic if the dimension of `Q`
    /// is not the quotient of the operands' dimensions.
    pub fn divide<Q1: Quantity, Q2: Quantity>(numerator: Measure<Q1>, denominator: Measure<Q2>) -> Result<Self, Error> {
        if !Q::DIMENSION.is_quotient_of(Q1::DIMENSION, Q2::DIMENSION) {
            return Err(mismatch::<Q1, Q2, Q>(Operation::Divide).into());
        }
        Ok(Self::from_amount(numerator.amount / denominator.amount))
    }

    /// Multiplies two measures into a measure of `Q`, checking the dimensions at compile time.
    ///
    /// A call where the dimension of `Q` is not the product of the operands' dimensions fails to
    /// build.
    ///
    /// ```
    /// use measures::{quantities::{Energy, Force, Length}, Measure};
    ///
    /// let work = Measure::<Energy>::product(Measure::<Force>::new(2.0), Measure::<Length>::new(3.0));
    /// assert_eq!(work, Measure::new(6.0));
    /// ```
    pub fn product<Q1: Quantity, Q2: Quantity>(lhs: Measure<Q1>, rhs: Measure<Q2>) -> Self {
        const {
            assert!(
                Q::DIMENSION.is_product_of(Q1::DIMENSION, Q2::DIMENSION),
                "the result quantity is not the product of the operand quantities",
            )
        };
        Self::from_amount(lhs.amount * rhs.amount)
    }

    /// Divides two measures into a measure of `Q`, checking the dimensions at compile time.
    pub fn quotient<Q1: Quantity, Q2: Quantity>(numerator: Measure<Q1>, denominator: Measure<Q2>) -> Self {
        const {
            assert!(
                Q::DIMENSION.is_quotient_of(Q1::DIMENSION, Q2::DIMENSION),
                "the result quantity is not the quotient of the operand quantities",
            )
        };
        Self::from_amount(numerator.amount / denominator.amount)
    }
}

/// Builds the error for a failed dimension check of `Q1 op Q2 -> Target`.
fn mismatch<Q1: Quantity, Q2: Quantity, Target: Quantity>(operation: Operation) -> DimensionMismatch {
    let err = DimensionMismatch {
        operation,
        lhs: Operand { name: Q1::NAME, dimension: Q1::DIMENSION },
        rhs: Operand { name: Q2::NAME, dimension: Q2::DIMENSION },
        target: Operand { name: Target::NAME, dimension: Target::DIMENSION },
    };
    tracing::debug!(%err, "dimension check failed");
    err
}

impl<Q: Quantity> Default for Measure<Q> {
    /// The zero amount in the reference unit.
    fn default() -> Self {
        Self::from_amount(amount::zero())
    }
}

impl<Q: Quantity> Clone for Measure<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Quantity> Copy for Measure<Q> {}

impl<Q: Quantity> PartialEq for Measure<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<Q: Quantity> Eq for Measure<Q> {}

impl<Q: Quantity> PartialOrd for Measure<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl<Q: Quantity> Hash for Measure<Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        amount::hash(self.amount, state);
    }
}

impl<Q: Quantity> Debug for Measure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("quantity", &Q::NAME)
            .field("amount", &self.amount)
            .finish()
    }
}

impl<Q: Quantity> Display for Measure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let amount = amount::normalize(self.amount);
        let symbol = Q::REFERENCE.symbol();
        if symbol.is_empty() {
            write!(f, "{}", amount)
        } else {
            write!(f, "{} {}", amount, symbol)
        }
    }
}

impl<Q: Quantity> From<SpecificMeasure<Q>> for Measure<Q> {
    fn from(measure: SpecificMeasure<Q>) -> Self {
        measure.measure()
    }
}

impl<Q: Quantity> Add for Measure<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Measure::add(self, rhs)
    }
}

impl<Q: Quantity> AddAssign for Measure<Q> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Q: Quantity> Sub for Measure<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl<Q: Quantity> SubAssign for Measure<Q> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Q: Quantity> Neg for Measure<Q> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_amount(-self.amount)
    }
}

impl<Q: Quantity> Mul<Amount> for Measure<Q> {
    type Output = Self;

    fn mul(self, scalar: Amount) -> Self {
        self.scale(scalar)
    }
}

impl<Q: Quantity> Mul<Measure<Q>> for Amount {
    type Output = Measure<Q>;

    fn mul(self, measure: Measure<Q>) -> Measure<Q> {
        measure.scale(self)
    }
}

impl<Q: Quantity> Div<Amount> for Measure<Q> {
    type Output = Self;

    fn div(self, scalar: Amount) -> Self {
        Self::from_amount(self.amount / scalar)
    }
}

impl<Q: Quantity> Div for Measure<Q> {
    type Output = Amount;

    fn div(self, denominator: Self) -> Amount {
        self.ratio(denominator)
    }
}

impl<Q: Quantity> Sum for Measure<Q> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(feature = "serde")]
impl<Q: Quantity> serde::Serialize for Measure<Q> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.amount, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, Q: Quantity> serde::Deserialize<'de> for Measure<Q> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Amount as serde::Deserialize>::deserialize(deserializer).map(Self::from_amount)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        amount::assert_amount_eq,
        error::FaultKind,
        quantities::{Area, Energy, Force, Length, Pressure, Temperature, Time, Torque, Velocity, Volume},
    };
    use std::collections::{HashMap, HashSet};
    use super::*;

    #[test]
    fn get_in_other_unit() {
        let m = Measure::<Length>::with_unit(5.0, Length::METER);
        assert_amount_eq!(m.get(Length::CENTIMETER), 500.0);
    }

    #[test]
    fn default_is_zero_reference_unit() {
        assert_eq!(Measure::<Temperature>::default(), Measure::with_unit(0.0, Temperature::KELVIN));
        assert_ne!(Measure::<Temperature>::default(), Measure::with_unit(0.0, Temperature::CELSIUS));
    }

    #[test]
    fn round_trip() {
        for unit in Temperature::UNITS {
            for value in [-40.0, 0.0, 21.5, 1e4] {
                let m = Measure::<Temperature>::with_unit(value, *unit);
                assert_amount_eq!(m.get(*unit), value);
            }
        }
        for unit in Pressure::UNITS {
            let m = Measure::<Pressure>::with_unit(101.325, *unit);
            assert_amount_eq!(m.get(*unit), 101.325);
        }
    }

    #[test]
    fn canonical_equivalence() {
        let a = Measure::<Length>::with_unit(5.0, Length::METER);
        let b = Measure::<Length>::with_unit(500.0, Length::CENTIMETER);
        assert_eq!(a, b);
        assert_eq!(a + b, Measure::new(10.0));
        assert_eq!(b - a, Measure::default());
        assert_eq!(a.unit(), Length::METER);
        assert_eq!(b.unit(), Length::METER);
    }

    #[test]
    fn equal_measures_hash_equally() {
        let set: HashSet<_> = [
            Measure::<Length>::with_unit(1.0, Length::KILOMETER),
            Measure::<Length>::with_unit(1000.0, Length::METER),
        ].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn measures_as_map_keys() {
        let mut boiling = HashMap::new();
        boiling.insert(Measure::<Temperature>::with_unit(100.0, Temperature::CELSIUS), "water");
        boiling.insert(Measure::<Temperature>::with_unit(78.0, Temperature::CELSIUS), "ethanol");

        let key = Measure::<Temperature>::with_unit(373.15, Temperature::KELVIN);
        assert_eq!(boiling.get(&key), Some(&"water"));
        assert_eq!(boiling.len(), 2);
    }

    #[test]
    fn ordering() {
        let inch = Measure::<Length>::with_unit(1.0, Length::INCH);
        let cm = Measure::<Length>::with_unit(1.0, Length::CENTIMETER);
        assert!(inch > cm);
        assert!(cm <= inch);
        assert_eq!(inch.compare(&cm), Some(Ordering::Greater));
        assert_eq!(cm.compare(&inch), Some(Ordering::Less));
    }

    #[cfg(not(feature = "decimal"))]
    #[test]
    fn nan_is_unordered() {
        let cm = Measure::<Length>::with_unit(1.0, Length::CENTIMETER);
        let nan = Measure::<Length>::new(f64::NAN);
        assert_eq!(nan.compare(&cm), None);
        assert_ne!(nan, nan);
    }

    #[test]
    fn scaling() {
        let m = Measure::<Volume>::with_unit(2.0, Volume::LITER);
        let three = 3.0_f64.to_amount();
        assert_amount_eq!((m * three).get(Volume::LITER), 6.0);
        assert_amount_eq!((three * m).get(Volume::LITER), 6.0);
        assert_amount_eq!((m / 4.0_f64.to_amount()).get(Volume::MILLILITER), 500.0);
        assert_amount_eq!(m.scale(0.5).get(Volume::LITER), 1.0);
    }

    #[test]
    fn checked_division() {
        let m = Measure::<Length>::new(1.0);
        assert_eq!(m.checked_div(0.0).unwrap_err().kind(), FaultKind::DivisionByZero);
        assert_eq!(m.checked_div(4.0).unwrap(), Measure::new(0.25));
        assert_eq!(m.checked_ratio(Measure::default()).unwrap_err().kind(), FaultKind::DivisionByZero);
    }

    #[cfg(not(feature = "decimal"))]
    #[test]
    fn divide_by_zero_scalar_propagates() {
        let m = Measure::<Length>::new(1.0);
        assert!((m / 0.0_f64.to_amount()).amount().is_infinite());
        assert!((Measure::<Length>::default() / 0.0_f64.to_amount()).amount().is_nan());
    }

    #[cfg(feature = "decimal")]
    #[test]
    #[should_panic]
    fn decimal_divide_by_zero_scalar_panics() {
        let _ = Measure::<Length>::new(1.0) / 0.0_f64.to_amount();
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_checked_division_overflow() {
        let huge = Measure::<Length>::new(crate::amount::Decimal::MAX);
        assert_eq!(huge.checked_div(0.5).unwrap_err().kind(), FaultKind::Overflow);
    }

    #[test]
    fn fallible_construction() {
        assert_eq!(Measure::<Length>::try_new(2.5).unwrap(), Measure::new(2.5));
        let m = Measure::<Length>::try_with_unit(3.0, Length::KILOMETER).unwrap();
        assert_eq!(m, Measure::with_unit(3000.0, Length::METER));
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_rejects_unrepresentable_input() {
        assert_eq!(Measure::<Length>::try_new(1e30).unwrap_err().kind(), FaultKind::Overflow);
        assert_eq!(Measure::<Length>::try_new(f64::NAN).unwrap_err().kind(), FaultKind::NotFinite);
        let err = Measure::<Length>::try_with_unit(f64::INFINITY, Length::KILOMETER).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Overflow);

        // fits as kilometers, but not as meters
        let err = Measure::<Length>::try_with_unit(1e27, Length::KILOMETER).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Overflow);
    }

    #[cfg(feature = "decimal")]
    #[test]
    #[should_panic(expected = "value cannot be represented as an amount")]
    fn decimal_out_of_range_measure_panics() {
        Measure::<Length>::new(1e30);
    }

    #[test]
    fn ratio_is_dimensionless() {
        let a = Measure::<Length>::with_unit(1.0, Length::KILOMETER);
        let b = Measure::<Length>::with_unit(250.0, Length::METER);
        assert_amount_eq!(a.ratio(b), 4.0);
        assert_amount_eq!(a / b, 4.0);
    }

    #[test]
    fn times_length_length_area() {
        let a = Measure::<Length>::with_unit(3.0, Length::METER);
        let b = Measure::<Length>::with_unit(4.0, Length::METER);
        let area = Measure::<Area>::times(a, b).unwrap();
        assert_eq!(area, Measure::with_unit(12.0, Area::SQUARE_METER));
    }

    #[test]
    fn times_wrong_target() {
        let a = Measure::<Length>::with_unit(3.0, Length::METER);
        let err = Measure::<Volume>::times(a, a).unwrap_err();
        let Error::DimensionMismatch(err) = err else {
            panic!("expected a dimension mismatch, got {:?}", err);
        };
        assert_eq!(err.operation, Operation::Multiply);
        assert_eq!(err.target.name, "Volume");
        assert_eq!(err.actual(), Area::DIMENSION);
    }

    #[test]
    fn divide_validates() {
        let distance = Measure::<Length>::with_unit(100.0, Length::KILOMETER);
        let duration = Measure::<Time>::with_unit(2.0, Time::HOUR);
        let speed = Measure::<Velocity>::divide(distance, duration).unwrap();
        assert_amount_eq!(speed.get(Velocity::KILOMETER_PER_HOUR), 50.0);

        assert!(Measure::<Velocity>::divide(duration, distance).is_err());
    }

    #[test]
    fn shared_dimension_is_caller_choice() {
        let force = Measure::<Force>::new(10.0);
        let arm = Measure::<Length>::new(0.5);
        let torque = Measure::<Torque>::times(force, arm).unwrap();
        let energy = Measure::<Energy>::times(force, arm).unwrap();
        assert_eq!(torque.amount(), energy.amount());
    }

    #[test]
    fn times_iff_inverse_divides() {
        fn check<Q1: Quantity, Q2: Quantity, T: Quantity>() {
            let a = Measure::<Q1>::new(6.0);
            let b = Measure::<Q2>::new(2.0);
            let forward = Measure::<T>::times(a, b).is_ok();
            let t = Measure::<T>::new(12.0);
            assert_eq!(forward, Measure::<Q1>::divide(t, b).is_ok());
            assert_eq!(forward, Measure::<Q2>::divide(t, a).is_ok());
        }

        check::<Length, Length, Area>();
        check::<Length, Length, Volume>();
        check::<Area, Length, Volume>();
        check::<Force, Length, Energy>();
        check::<Force, Length, Torque>();
        check::<Velocity, Time, Length>();
        check::<Velocity, Time, Area>();
    }

    #[test]
    fn compile_time_product() {
        let area = Measure::<Area>::product(Measure::<Length>::new(2.0), Measure::<Length>::new(3.0));
        assert_eq!(area, Measure::new(6.0));
        let length = Measure::<Length>::quotient(area, Measure::<Length>::new(2.0));
        assert_eq!(length, Measure::new(3.0));
    }

    #[test]
    fn sum() {
        let total: Measure<Length> = [1.0, 2.0, 3.5]
            .into_iter()
            .map(|v| Measure::with_unit(v, Length::KILOMETER))
            .sum();
        assert_amount_eq!(total.get(Length::KILOMETER), 6.5);
    }

    #[test]
    fn display() {
        assert_eq!(Measure::<Length>::new(2.5).to_string(), "2.5 m");
        assert_eq!(Measure::<Pressure>::new(-1.0).to_string(), "-1 Pa");

        let side = Measure::<Length>::with_unit(200.0, Length::CENTIMETER);
        assert_eq!(Measure::<Area>::product(side, side).to_string(), "4 m²");
    }

    #[test]
    fn negate_and_assign() {
        let mut m = Measure::<Length>::new(1.0);
        m += Measure::new(2.0);
        m -= Measure::new(0.5);
        assert_eq!(-m, Measure::new(-2.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_reference_amount() {
        let m = Measure::<Length>::with_unit(250.0, Length::CENTIMETER);
        let json = serde_json::to_string(&m).unwrap();
        let back: Measure<Length> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
