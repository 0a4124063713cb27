//! Provides [`Dimension`], the exponent vector over the SI base dimensions.

use std::{fmt::{self, Display, Formatter}, ops::{Div, Mul}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven SI base dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in the order their exponents are stored.
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    /// The conventional symbol of the base dimension.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

/// The physical dimension of a quantity, expressed as integer exponents of the SI base
/// dimensions.
///
/// Dimensions are plain values: two dimensions are equal if and only if all seven exponents are
/// equal. Exponents range over [`i8`]; an operation whose result exponent falls outside that range
/// panics (or fails to compile, in a constant expression) rather than wrapping around. All
/// operations are `const`, so a quantity can state its dimension in a constant expression:
///
/// ```
/// use measures::Dimension;
///
/// const PRESSURE: Dimension = Dimension::MASS
///     .combine(Dimension::LENGTH.invert())
///     .combine(Dimension::TIME.pow(-2));
///
/// assert_eq!(PRESSURE.to_string(), "L^-1·M·T^-2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Dimension {
    exponents: [i8; 7],
}

impl Dimension {
    /// The dimension of dimensionless quantities (all exponents zero).
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    pub const TIME: Self = Self::base(BaseDimension::Time);
    pub const ELECTRIC_CURRENT: Self = Self::base(BaseDimension::ElectricCurrent);
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    pub const AMOUNT_OF_SUBSTANCE: Self = Self::base(BaseDimension::AmountOfSubstance);
    pub const LUMINOUS_INTENSITY: Self = Self::base(BaseDimension::LuminousIntensity);

    /// Creates a dimension from its exponents, in the order length, mass, time, electric current,
    /// temperature, amount of substance, luminous intensity.
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        electric_current: i8,
        temperature: i8,
        amount_of_substance: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self {
            exponents: [
                length,
                mass,
                time,
                electric_current,
                temperature,
                amount_of_substance,
                luminous_intensity,
            ],
        }
    }

    /// The dimension of a single base dimension raised to the first power.
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; 7];
        exponents[base.index()] = 1;
        Self { exponents }
    }

    /// Returns the exponent of the given base dimension.
    pub const fn exponent(&self, base: BaseDimension) -> i8 {
        self.exponents[base.index()]
    }

    /// Returns true if every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        self.const_eq(&Self::NONE)
    }

    /// The dimension of a product of quantities of dimensions `self` and `other` (elementwise
    /// sum of exponents).
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent does not fit in an [`i8`].
    pub const fn combine(self, other: Self) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < exponents.len() {
            exponents[i] = match exponents[i].checked_add(other.exponents[i]) {
                Some(exponent) => exponent,
                None => panic!("dimension exponent overflow"),
            };
            i += 1;
        }
        Self { exponents }
    }

    /// The dimension of the reciprocal of a quantity of dimension `self` (elementwise negation).
    pub const fn invert(self) -> Self {
        self.pow(-1)
    }

    /// The dimension of a quantity of dimension `self` raised to the power `n` (elementwise
    /// scaling).
    ///
    /// # Panics
    ///
    /// Panics if a resulting exponent does not fit in an [`i8`].
    pub const fn pow(self, n: i8) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < exponents.len() {
            exponents[i] = match exponents[i].checked_mul(n) {
                Some(exponent) => exponent,
                None => panic!("dimension exponent overflow"),
            };
            i += 1;
        }
        Self { exponents }
    }

    /// Equality usable in constant expressions.
    pub const fn const_eq(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < self.exponents.len() {
            if self.exponents[i] != other.exponents[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns true if a quantity of this dimension can be the product of quantities of
    /// dimensions `lhs` and `rhs`.
    pub const fn is_product_of(&self, lhs: Self, rhs: Self) -> bool {
        self.const_eq(&lhs.combine(rhs))
    }

    /// Returns true if a quantity of this dimension can be the quotient of quantities of
    /// dimensions `numerator` and `denominator`.
    pub const fn is_quotient_of(&self, numerator: Self, denominator: Self) -> bool {
        self.const_eq(&numerator.combine(denominator.invert()))
    }
}

impl Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.combine(rhs.invert())
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut factors = BaseDimension::ALL
            .iter()
            .map(|base| (base, self.exponent(*base)))
            .filter(|(_, exponent)| *exponent != 0);

        // there is no `·` preceding the first factor, so we format it separately
        let Some((base, exponent)) = factors.next() else {
            return write!(f, "1");
        };
        write_factor(f, base, exponent)?;

        for (base, exponent) in factors {
            write!(f, "·")?;
            write_factor(f, base, exponent)?;
        }

        Ok(())
    }
}

fn write_factor(f: &mut Formatter<'_>, base: &BaseDimension, exponent: i8) -> fmt::Result {
    write!(f, "{}", base.symbol())?;
    if exponent != 1 {
        write!(f, "^{}", exponent)?;
    }
    Ok(())
}
