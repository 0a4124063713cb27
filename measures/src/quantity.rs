//! Provides the [`Quantity`] trait, which is implemented by every quantity tag type, and the
//! [`quantity!`](crate::quantity!) macro used to declare them.

use std::{fmt::Debug, hash::Hash};
use super::{dimension::Dimension, unit::Unit};

/// A physical kind, such as length or pressure.
///
/// Implementors are zero-sized tag types. They carry no state at run time; everything about the
/// quantity is available through associated constants, so a [`Measure<Q>`](crate::Measure)
/// stores nothing but its amount.
///
/// Several quantities may share a dimension (energy and torque are both `L^2·M·T^-2`) and still
/// be distinct types that cannot be mixed.
pub trait Quantity: Copy + Debug + Default + Eq + Hash + Send + Sync + 'static {
    /// The name of the quantity, used in error messages and by dynamic front-ends.
    const NAME: &'static str;

    /// The physical dimension of the quantity.
    const DIMENSION: Dimension;

    /// The reference unit.
    ///
    /// Measures of this quantity are always stored in this unit, and every other unit of the
    /// quantity is defined relative to it.
    ///
    /// The reference unit must be coherent with the reference units of the other quantities: the
    /// product (or quotient) of two reference units must be the reference unit of the resulting
    /// quantity, with no factor. [`Measure::times`](crate::Measure::times),
    /// [`Measure::product`](crate::Measure::product) and their erased counterparts multiply
    /// reference amounts directly. Declaring the liter as the reference unit of volume, for
    /// example, would make the product of two lengths in square meters times a length in meters
    /// come out a thousand times too small.
    const REFERENCE: Unit<Self>;

    /// Every unit declared for the quantity, reference unit first.
    const UNITS: &'static [Unit<Self>];
}

/// Declares a quantity tag type and its units.
///
/// The first unit listed is the reference unit. Each unit is a constant expression producing a
/// [`Unit`] of the quantity; prefixed units can refer to previously declared units through
/// `Self`.
///
/// The reference unit should have a scale of `1.0` and be coherent with the SI units of the
/// dimension, as described on [`Quantity::REFERENCE`]. Multiplying and dividing measures of the
/// declared quantity gives wrong amounts otherwise.
///
/// ```
/// use measures::{quantity, Dimension, Prefix, Quantity, Unit};
///
/// quantity!(
///     /// Electric charge.
///     Charge = Dimension::ELECTRIC_CURRENT.combine(Dimension::TIME),
///     COULOMB = Unit::new("C", 1.0),
///     MILLICOULOMB = Self::COULOMB.with_prefix(Prefix::Milli),
///     AMPERE_HOUR = Unit::new("Ah", 3600.0),
/// );
///
/// assert_eq!(Charge::REFERENCE, Charge::COULOMB);
/// assert_eq!(Charge::UNITS.len(), 3);
/// assert_eq!(Charge::NAME, "Charge");
/// ```
#[macro_export]
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident = $dimension:expr,
        $(#[$reference_meta:meta])*
        $reference:ident = $reference_def:expr
        $(,
            $(#[$unit_meta:meta])*
            $unit:ident = $def:expr
        )*
        $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            $(#[$reference_meta])*
            ///
            /// This is the reference unit of the quantity.
            pub const $reference: $crate::Unit<$name> = $reference_def;

            $(
                $(#[$unit_meta])*
                pub const $unit: $crate::Unit<$name> = $def;
            )*
        }

        impl $crate::Quantity for $name {
            const NAME: &'static str = stringify!($name);
            const DIMENSION: $crate::Dimension = $dimension;
            const REFERENCE: $crate::Unit<$name> = $name::$reference;
            const UNITS: &'static [$crate::Unit<$name>] = &[$name::$reference, $($name::$unit),*];
        }
    };
}
