use std::{fmt::{self, Debug, Display, Formatter}, marker::PhantomData};
use super::{
    amount::{self, Amount, ToAmount},
    error::NumericFault,
    quantity::Quantity,
};

/// Provides copy-pasteable definitions for [`Prefix`].
macro_rules! prefix_impl {
    ($($variant:ident: $symbol:literal => $multiplier:literal),* $(,)?) => {
        /// A decimal SI prefix, used to derive a unit from a base unit of the same quantity.
        ///
        /// The base unit's scale is multiplied by the prefix multiplier, so no conversion factor is
        /// restated per prefixed unit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Prefix {
            $(
                #[doc = concat!("- Symbol: `", $symbol, "`")]
                ///
                #[doc = concat!("- Multiplier: `", stringify!($multiplier), "`")]
                $variant,
            )*
        }

        impl Prefix {
            /// Every prefix, from largest to smallest.
            pub const ALL: &'static [Prefix] = &[$(Prefix::$variant),*];

            /// The symbol written in front of the base unit symbol.
            pub const fn symbol(&self) -> &'static str {
                match self {
                    $(Prefix::$variant => $symbol,)*
                }
            }

            /// The factor the base unit's scale is multiplied by.
            pub const fn multiplier(&self) -> f64 {
                match self {
                    $(Prefix::$variant => $multiplier,)*
                }
            }
        }
    };
}

prefix_impl!(
    Yotta: "Y" => 1e24,
    Zetta: "Z" => 1e21,
    Exa: "E" => 1e18,
    Peta: "P" => 1e15,
    Tera: "T" => 1e12,
    Giga: "G" => 1e9,
    Mega: "M" => 1e6,
    Kilo: "k" => 1e3,
    Hecto: "h" => 1e2,
    Deca: "da" => 1e1,
    Deci: "d" => 1e-1,
    Centi: "c" => 1e-2,
    Milli: "m" => 1e-3,
    Micro: "µ" => 1e-6,
    Nano: "n" => 1e-9,
    Pico: "p" => 1e-12,
    Femto: "f" => 1e-15,
    Atto: "a" => 1e-18,
    Zepto: "z" => 1e-21,
    Yocto: "y" => 1e-24,
);

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The conversion rule of a unit, independent of the quantity it belongs to.
///
/// An amount `raw` in this unit corresponds to `(raw + offset) * scale` in the reference unit of
/// its quantity. The offset is applied before scaling, which matters for affine units such as
/// degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDef {
    symbol: &'static str,
    prefix: Option<Prefix>,
    scale: f64,
    offset: f64,
}

impl UnitDef {
    /// Creates a linear unit definition.
    pub const fn new(symbol: &'static str, scale: f64) -> Self {
        Self { symbol, prefix: None, scale, offset: 0.0 }
    }

    /// Creates an affine unit definition.
    pub const fn affine(symbol: &'static str, scale: f64, offset: f64) -> Self {
        Self { symbol, prefix: None, scale, offset }
    }

    /// Derives a prefixed unit definition. The offset of the result is always zero.
    pub const fn with_prefix(self, prefix: Prefix) -> Self {
        Self {
            symbol: self.symbol,
            prefix: Some(prefix),
            scale: self.scale * prefix.multiplier(),
            offset: 0.0,
        }
    }

    /// The symbol of the unit without its prefix.
    pub const fn base_symbol(&self) -> &'static str {
        self.symbol
    }

    /// The prefix of the unit, if it was derived with one.
    pub const fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    /// The full symbol of the unit, including its prefix.
    pub fn symbol(&self) -> String {
        self.to_string()
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Converts an amount in this unit to the reference unit.
    pub fn to_reference(&self, raw: Amount) -> Amount {
        (raw + amount::from_factor(self.offset)) * amount::from_factor(self.scale)
    }

    /// Converts an amount in the reference unit to this unit.
    pub fn from_reference(&self, reference: Amount) -> Amount {
        reference / amount::from_factor(self.scale) - amount::from_factor(self.offset)
    }

    /// Like [`UnitDef::to_reference`], but reports a decimal overflow as a [`NumericFault`].
    /// Floating point amounts overflow to infinity as usual.
    pub fn try_to_reference(&self, raw: Amount) -> Result<Amount, NumericFault> {
        #[cfg(feature = "decimal")]
        let reference = raw
            .checked_add(amount::from_factor(self.offset))
            .and_then(|sum| sum.checked_mul(amount::from_factor(self.scale)))
            .ok_or_else(|| NumericFault::new(super::error::FaultKind::Overflow))?;
        #[cfg(not(feature = "decimal"))]
        let reference = self.to_reference(raw);

        Ok(reference)
    }

    /// Like [`UnitDef::from_reference`], but reports a decimal overflow as a [`NumericFault`].
    /// Floating point amounts overflow to infinity as usual.
    pub fn try_from_reference(&self, reference: Amount) -> Result<Amount, NumericFault> {
        #[cfg(feature = "decimal")]
        let raw = reference
            .checked_div(amount::from_factor(self.scale))
            .and_then(|quotient| quotient.checked_sub(amount::from_factor(self.offset)))
            .ok_or_else(|| NumericFault::new(super::error::FaultKind::Overflow))?;
        #[cfg(not(feature = "decimal"))]
        let raw = self.from_reference(reference);

        Ok(raw)
    }
}

impl Display for UnitDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}", self.symbol)
    }
}

/// A unit of measure of the quantity `Q`.
///
/// Units are declared as associated constants of their quantity, e.g.
/// [`Length::METER`](crate::quantities::Length::METER). Because the quantity is part of the
/// type, a unit of one quantity can never be used to construct or read a measure of another.
pub struct Unit<Q: Quantity> {
    def: UnitDef,
    quantity: PhantomData<fn() -> Q>,
}

impl<Q: Quantity> Unit<Q> {
    /// Creates a linear unit whose amounts are `scale` times the reference unit.
    pub const fn new(symbol: &'static str, scale: f64) -> Self {
        Self::from_def(UnitDef::new(symbol, scale))
    }

    /// Creates an affine unit; see [`UnitDef`] for the conversion formula.
    pub const fn affine(symbol: &'static str, scale: f64, offset: f64) -> Self {
        Self::from_def(UnitDef::affine(symbol, scale, offset))
    }

    /// Derives a prefixed unit from this unit, e.g. the kilometer from the meter.
    pub const fn with_prefix(self, prefix: Prefix) -> Self {
        Self::from_def(self.def.with_prefix(prefix))
    }

    pub(crate) const fn from_def(def: UnitDef) -> Self {
        Self { def, quantity: PhantomData }
    }

    /// The quantity-independent conversion rule of this unit.
    pub const fn def(&self) -> &UnitDef {
        &self.def
    }

    /// The full symbol of the unit, including its prefix.
    pub fn symbol(&self) -> String {
        self.def.symbol()
    }

    /// Converts an amount in this unit to the reference unit of `Q`.
    pub fn to_reference(&self, raw: impl ToAmount) -> Amount {
        self.def.to_reference(raw.to_amount())
    }

    /// Converts an amount in the reference unit of `Q` to this unit.
    pub fn from_reference(&self, reference: impl ToAmount) -> Amount {
        self.def.from_reference(reference.to_amount())
    }
}

impl<Q: Quantity> Clone for Unit<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Quantity> Copy for Unit<Q> {}

impl<Q: Quantity> PartialEq for Unit<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.def == other.def
    }
}

impl<Q: Quantity> Debug for Unit<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("quantity", &Q::NAME)
            .field("symbol", &self.def.symbol())
            .field("scale", &self.def.scale)
            .field("offset", &self.def.offset)
            .finish()
    }
}

impl<Q: Quantity> Display for Unit<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.def)
    }
}
