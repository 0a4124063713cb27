//! Provides [`SpecificMeasure`], a measure that remembers the unit it is displayed in.

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    ops::{Add, Sub},
};
use super::{
    amount::{self, Amount, ToAmount},
    measure::Measure,
    quantity::Quantity,
    unit::Unit,
};

/// A [`Measure`] paired with the unit it was created or last indexed with.
///
/// The unit only affects how the measure is read and printed. The underlying [`Measure`] stays
/// the source of truth for arithmetic and equality, so two specific measures of the same
/// magnitude are equal no matter which units they remember.
///
/// ```
/// use measures::{quantities::Length, Measure};
///
/// let height = Measure::<Length>::new(2.0).in_unit(Length::CENTIMETER);
/// assert_eq!(height.to_string(), "200 cm");
/// assert_eq!(height.in_unit(Length::MILLIMETER).to_string(), "2000 mm");
/// ```
pub struct SpecificMeasure<Q: Quantity> {
    measure: Measure<Q>,
    unit: Unit<Q>,
}

impl<Q: Quantity> SpecificMeasure<Q> {
    /// Wraps a measure together with the unit it should be read in.
    pub fn new(measure: Measure<Q>, unit: Unit<Q>) -> Self {
        Self { measure, unit }
    }

    /// Creates a specific measure from an amount in the given unit.
    pub fn with_unit(amount: impl ToAmount, unit: Unit<Q>) -> Self {
        Self::new(Measure::with_unit(amount, unit), unit)
    }

    /// The amount in [`SpecificMeasure::unit`].
    pub fn amount(&self) -> Amount {
        self.measure.get(self.unit)
    }

    /// The unit this measure is read in.
    pub fn unit(&self) -> Unit<Q> {
        self.unit
    }

    /// The amount converted to the given unit.
    pub fn get(&self, unit: Unit<Q>) -> Amount {
        self.measure.get(unit)
    }

    /// The same magnitude, read in another unit.
    pub fn in_unit(&self, unit: Unit<Q>) -> Self {
        Self::new(self.measure, unit)
    }

    /// The underlying canonical measure.
    pub fn measure(&self) -> Measure<Q> {
        self.measure
    }

    /// The sum of two measures, read in the unit of `self`.
    pub fn add(self, other: impl Into<Measure<Q>>) -> Self {
        Self::new(self.measure + other.into(), self.unit)
    }

    /// The difference of two measures, read in the unit of `self`.
    pub fn subtract(self, other: impl Into<Measure<Q>>) -> Self {
        Self::new(self.measure - other.into(), self.unit)
    }

    /// The measure multiplied by a dimensionless scalar, read in the unit of `self`.
    pub fn scale(self, scalar: impl ToAmount) -> Self {
        Self::new(self.measure.scale(scalar), self.unit)
    }
}

impl<Q: Quantity> Default for SpecificMeasure<Q> {
    fn default() -> Self {
        Self::new(Measure::default(), Q::REFERENCE)
    }
}

impl<Q: Quantity> From<Measure<Q>> for SpecificMeasure<Q> {
    fn from(measure: Measure<Q>) -> Self {
        Self::new(measure, Q::REFERENCE)
    }
}

impl<Q: Quantity> Clone for SpecificMeasure<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Quantity> Copy for SpecificMeasure<Q> {}

impl<Q: Quantity> PartialEq for SpecificMeasure<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.measure == other.measure
    }
}

impl<Q: Quantity> PartialEq<Measure<Q>> for SpecificMeasure<Q> {
    fn eq(&self, other: &Measure<Q>) -> bool {
        self.measure == *other
    }
}

impl<Q: Quantity> PartialOrd for SpecificMeasure<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.measure.compare(&other.measure)
    }
}

impl<Q: Quantity> Debug for SpecificMeasure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecificMeasure")
            .field("quantity", &Q::NAME)
            .field("amount", &self.amount())
            .field("unit", &self.unit.symbol())
            .finish()
    }
}

impl<Q: Quantity> Display for SpecificMeasure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let amount = amount::normalize(self.amount());
        let symbol = self.unit.symbol();
        if symbol.is_empty() {
            write!(f, "{}", amount)
        } else {
            write!(f, "{} {}", amount, symbol)
        }
    }
}

impl<Q: Quantity, M: Into<Measure<Q>>> Add<M> for SpecificMeasure<Q> {
    type Output = Self;

    fn add(self, rhs: M) -> Self {
        SpecificMeasure::add(self, rhs)
    }
}

impl<Q: Quantity, M: Into<Measure<Q>>> Sub<M> for SpecificMeasure<Q> {
    type Output = Self;

    fn sub(self, rhs: M) -> Self {
        self.subtract(rhs)
    }
}
