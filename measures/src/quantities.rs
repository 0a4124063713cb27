//! The catalog of predefined quantities.
//!
//! Every quantity is declared with [`quantity!`](crate::quantity!). Prefixed units are derived
//! from their base unit with [`Unit::with_prefix`], so no conversion factor is written twice.
//! Compound units (square, cubic, per-unit) are declared with an explicit factor, since a prefix
//! only applies to the first factor of a compound symbol.

use crate::{quantity, Dimension, Prefix, Unit};

const L: Dimension = Dimension::LENGTH;
const M: Dimension = Dimension::MASS;
const T: Dimension = Dimension::TIME;

quantity!(
    /// A pure number, such as a ratio of two measures of the same quantity.
    Dimensionless = Dimension::NONE,
    ONE = Unit::new("", 1.0),
    PERCENT = Unit::new("%", 1e-2),
    PER_MILLE = Unit::new("‰", 1e-3),
);

quantity!(
    /// Extent in space.
    Length = L,
    METER = Unit::new("m", 1.0),
    KILOMETER = Self::METER.with_prefix(Prefix::Kilo),
    DECIMETER = Self::METER.with_prefix(Prefix::Deci),
    CENTIMETER = Self::METER.with_prefix(Prefix::Centi),
    MILLIMETER = Self::METER.with_prefix(Prefix::Milli),
    MICROMETER = Self::METER.with_prefix(Prefix::Micro),
    NANOMETER = Self::METER.with_prefix(Prefix::Nano),
    ANGSTROM = Unit::new("Å", 1e-10),
    INCH = Unit::new("in", 0.0254),
    FOOT = Unit::new("ft", 0.3048),
    YARD = Unit::new("yd", 0.9144),
    MILE = Unit::new("mi", 1609.344),
    NAUTICAL_MILE = Unit::new("nmi", 1852.0),
);

quantity!(
    /// Extent of a surface.
    Area = L.pow(2),
    SQUARE_METER = Unit::new("m²", 1.0),
    SQUARE_KILOMETER = Unit::new("km²", 1e6),
    SQUARE_CENTIMETER = Unit::new("cm²", 1e-4),
    SQUARE_MILLIMETER = Unit::new("mm²", 1e-6),
    /// 100 square meters.
    ARE = Unit::new("a", 1e2),
    HECTARE = Self::ARE.with_prefix(Prefix::Hecto),
    SQUARE_INCH = Unit::new("in²", 6.4516e-4),
    SQUARE_FOOT = Unit::new("ft²", 0.09290304),
    ACRE = Unit::new("ac", 4046.8564224),
);

quantity!(
    /// Extent of a three-dimensional region.
    Volume = L.pow(3),
    CUBIC_METER = Unit::new("m³", 1.0),
    CUBIC_CENTIMETER = Unit::new("cm³", 1e-6),
    LITER = Unit::new("L", 1e-3),
    DECILITER = Self::LITER.with_prefix(Prefix::Deci),
    CENTILITER = Self::LITER.with_prefix(Prefix::Centi),
    MILLILITER = Self::LITER.with_prefix(Prefix::Milli),
    MICROLITER = Self::LITER.with_prefix(Prefix::Micro),
    CUBIC_INCH = Unit::new("in³", 1.6387064e-5),
    CUBIC_FOOT = Unit::new("ft³", 0.028316846592),
    /// A US gallon (231 cubic inches).
    GALLON = Unit::new("gal", 3.785411784e-3),
    /// A US quart (57.75 cubic inches).
    QUART = Unit::new("qt", 9.46352946e-4),
    /// A US pint (28.875 cubic inches).
    PINT = Unit::new("pt", 4.73176473e-4),
    /// A US fluid ounce (1.8046875 cubic inches).
    FLUID_OUNCE = Unit::new("floz", 2.95735295625e-5),
);

quantity!(
    Mass = M,
    KILOGRAM = Unit::new("kg", 1.0),
    GRAM = Unit::new("g", 1e-3),
    MILLIGRAM = Self::GRAM.with_prefix(Prefix::Milli),
    MICROGRAM = Self::GRAM.with_prefix(Prefix::Micro),
    /// A metric tonne (1000 kilograms).
    TONNE = Unit::new("t", 1e3),
    POUND = Unit::new("lb", 0.45359237),
    OUNCE = Unit::new("oz", 0.028349523125),
);

quantity!(
    Time = T,
    SECOND = Unit::new("s", 1.0),
    MILLISECOND = Self::SECOND.with_prefix(Prefix::Milli),
    MICROSECOND = Self::SECOND.with_prefix(Prefix::Micro),
    NANOSECOND = Self::SECOND.with_prefix(Prefix::Nano),
    MINUTE = Unit::new("min", 60.0),
    HOUR = Unit::new("h", 3600.0),
    DAY = Unit::new("d", 86400.0),
    WEEK = Unit::new("wk", 604800.0),
    /// A year of 365.25 days.
    YEAR = Unit::new("yr", 3.15576e7),
);

quantity!(
    ElectricCurrent = Dimension::ELECTRIC_CURRENT,
    AMPERE = Unit::new("A", 1.0),
    KILOAMPERE = Self::AMPERE.with_prefix(Prefix::Kilo),
    MILLIAMPERE = Self::AMPERE.with_prefix(Prefix::Milli),
    MICROAMPERE = Self::AMPERE.with_prefix(Prefix::Micro),
);

quantity!(
    /// Thermodynamic temperature.
    ///
    /// The Celsius and Fahrenheit scales are affine: their zero is offset from absolute zero.
    Temperature = Dimension::TEMPERATURE,
    KELVIN = Unit::new("K", 1.0),
    MILLIKELVIN = Self::KELVIN.with_prefix(Prefix::Milli),
    CELSIUS = Unit::affine("°C", 1.0, 273.15),
    FAHRENHEIT = Unit::affine("°F", 5.0 / 9.0, 459.67),
    RANKINE = Unit::new("°R", 5.0 / 9.0),
);

quantity!(
    AmountOfSubstance = Dimension::AMOUNT_OF_SUBSTANCE,
    MOLE = Unit::new("mol", 1.0),
    KILOMOLE = Self::MOLE.with_prefix(Prefix::Kilo),
    MILLIMOLE = Self::MOLE.with_prefix(Prefix::Milli),
    MICROMOLE = Self::MOLE.with_prefix(Prefix::Micro),
);

quantity!(
    LuminousIntensity = Dimension::LUMINOUS_INTENSITY,
    CANDELA = Unit::new("cd", 1.0),
    MILLICANDELA = Self::CANDELA.with_prefix(Prefix::Milli),
);

quantity!(
    Velocity = L.combine(T.invert()),
    METER_PER_SECOND = Unit::new("m/s", 1.0),
    KILOMETER_PER_HOUR = Unit::new("km/h", 1.0 / 3.6),
    MILE_PER_HOUR = Unit::new("mph", 0.44704),
    KNOT = Unit::new("kn", 1852.0 / 3600.0),
    FOOT_PER_SECOND = Unit::new("ft/s", 0.3048),
);

quantity!(
    Acceleration = L.combine(T.pow(-2)),
    METER_PER_SECOND_SQUARED = Unit::new("m/s²", 1.0),
    /// Standard acceleration of gravity.
    STANDARD_GRAVITY = Unit::new("g0", 9.80665),
);

quantity!(
    Force = M.combine(L).combine(T.pow(-2)),
    NEWTON = Unit::new("N", 1.0),
    KILONEWTON = Self::NEWTON.with_prefix(Prefix::Kilo),
    MEGANEWTON = Self::NEWTON.with_prefix(Prefix::Mega),
    MILLINEWTON = Self::NEWTON.with_prefix(Prefix::Milli),
    DYNE = Unit::new("dyn", 1e-5),
    KILOGRAM_FORCE = Unit::new("kgf", 9.80665),
    POUND_FORCE = Unit::new("lbf", 4.4482216152605),
);

quantity!(
    Pressure = M.combine(L.invert()).combine(T.pow(-2)),
    PASCAL = Unit::new("Pa", 1.0),
    KILOPASCAL = Self::PASCAL.with_prefix(Prefix::Kilo),
    MEGAPASCAL = Self::PASCAL.with_prefix(Prefix::Mega),
    GIGAPASCAL = Self::PASCAL.with_prefix(Prefix::Giga),
    MILLIPASCAL = Self::PASCAL.with_prefix(Prefix::Milli),
    MICROPASCAL = Self::PASCAL.with_prefix(Prefix::Micro),
    NANOPASCAL = Self::PASCAL.with_prefix(Prefix::Nano),
    BAR = Unit::new("bar", 1e5),
    MILLIBAR = Self::BAR.with_prefix(Prefix::Milli),
    /// Standard atmosphere.
    ATMOSPHERE = Unit::new("atm", 101325.0),
    TORR = Unit::new("Torr", 101325.0 / 760.0),
    PSI = Unit::new("psi", 6894.757293168361),
);

quantity!(
    /// Energy, work or heat. Shares its dimension with [`Torque`].
    Energy = M.combine(L.pow(2)).combine(T.pow(-2)),
    JOULE = Unit::new("J", 1.0),
    KILOJOULE = Self::JOULE.with_prefix(Prefix::Kilo),
    MEGAJOULE = Self::JOULE.with_prefix(Prefix::Mega),
    MILLIJOULE = Self::JOULE.with_prefix(Prefix::Milli),
    WATT_HOUR = Unit::new("Wh", 3600.0),
    KILOWATT_HOUR = Self::WATT_HOUR.with_prefix(Prefix::Kilo),
    /// The thermochemical calorie.
    CALORIE = Unit::new("cal", 4.184),
    KILOCALORIE = Self::CALORIE.with_prefix(Prefix::Kilo),
    ELECTRONVOLT = Unit::new("eV", 1.602176634e-19),
    /// The international table British thermal unit.
    BRITISH_THERMAL_UNIT = Unit::new("BTU", 1055.05585262),
);

quantity!(
    /// Moment of force. Shares its dimension with [`Energy`], but the two cannot be mixed.
    Torque = M.combine(L.pow(2)).combine(T.pow(-2)),
    NEWTON_METER = Unit::new("N·m", 1.0),
    KILONEWTON_METER = Self::NEWTON_METER.with_prefix(Prefix::Kilo),
    POUND_FOOT = Unit::new("lbf·ft", 1.3558179483314004),
);

quantity!(
    Power = M.combine(L.pow(2)).combine(T.pow(-3)),
    WATT = Unit::new("W", 1.0),
    KILOWATT = Self::WATT.with_prefix(Prefix::Kilo),
    MEGAWATT = Self::WATT.with_prefix(Prefix::Mega),
    GIGAWATT = Self::WATT.with_prefix(Prefix::Giga),
    MILLIWATT = Self::WATT.with_prefix(Prefix::Milli),
    /// Mechanical horsepower.
    HORSEPOWER = Unit::new("hp", 745.6998715822702),
);

quantity!(
    /// Mass per volume.
    Density = M.combine(L.pow(-3)),
    KILOGRAM_PER_CUBIC_METER = Unit::new("kg/m³", 1.0),
    GRAM_PER_CUBIC_CENTIMETER = Unit::new("g/cm³", 1e3),
    GRAM_PER_LITER = Unit::new("g/L", 1.0),
    POUND_PER_CUBIC_FOOT = Unit::new("lb/ft³", 16.018463373960142),
);

quantity!(
    /// Volume per mass, the reciprocal of [`Density`].
    SpecificVolume = L.pow(3).combine(M.invert()),
    CUBIC_METER_PER_KILOGRAM = Unit::new("m³/kg", 1.0),
    LITER_PER_KILOGRAM = Unit::new("L/kg", 1e-3),
    CUBIC_CENTIMETER_PER_GRAM = Unit::new("cm³/g", 1e-3),
    CUBIC_FOOT_PER_POUND = Unit::new("ft³/lb", 0.062427960576144606),
);

quantity!(
    /// Energy imparted by ionizing radiation per unit mass.
    AbsorbedDose = L.pow(2).combine(T.pow(-2)),
    GRAY = Unit::new("Gy", 1.0),
    KILOGRAY = Self::GRAY.with_prefix(Prefix::Kilo),
    CENTIGRAY = Self::GRAY.with_prefix(Prefix::Centi),
    MILLIGRAY = Self::GRAY.with_prefix(Prefix::Milli),
    MICROGRAY = Self::GRAY.with_prefix(Prefix::Micro),
    RAD = Unit::new("rad", 1e-2),
);

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::{amount::assert_amount_eq, Measure, Quantity};
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn reference_units_are_coherent() {
        fn check<Q: Quantity>() {
            assert_eq!(Q::UNITS[0], Q::REFERENCE, "{}", Q::NAME);
            assert_eq!(Q::REFERENCE.def().scale(), 1.0, "{}", Q::NAME);
            assert_eq!(Q::REFERENCE.def().offset(), 0.0, "{}", Q::NAME);
            assert_eq!(Q::REFERENCE.def().prefix(), None, "{}", Q::NAME);
        }

        check::<Dimensionless>();
        check::<Length>();
        check::<Area>();
        check::<Volume>();
        check::<Mass>();
        check::<Time>();
        check::<ElectricCurrent>();
        check::<Temperature>();
        check::<AmountOfSubstance>();
        check::<LuminousIntensity>();
        check::<Velocity>();
        check::<Acceleration>();
        check::<Force>();
        check::<Pressure>();
        check::<Energy>();
        check::<Torque>();
        check::<Power>();
        check::<Density>();
        check::<SpecificVolume>();
        check::<AbsorbedDose>();
    }

    #[test]
    fn reference_units_multiply_without_factor() {
        let newton = Measure::<Force>::times(Measure::<Mass>::new(1.0), Measure::<Acceleration>::new(1.0));
        assert_eq!(newton.unwrap(), Measure::with_unit(1.0, Force::NEWTON));

        let joule = Measure::<Energy>::times(Measure::<Pressure>::new(1.0), Measure::<Volume>::new(1.0));
        assert_eq!(joule.unwrap(), Measure::with_unit(1.0, Energy::JOULE));

        let gray = Measure::<AbsorbedDose>::divide(Measure::<Energy>::new(1.0), Measure::<Mass>::new(1.0));
        assert_eq!(gray.unwrap(), Measure::with_unit(1.0, AbsorbedDose::GRAY));
    }

    #[test]
    fn symbols_are_unique_within_quantity() {
        fn check<Q: Quantity>() {
            let symbols: HashSet<_> = Q::UNITS.iter().map(|u| u.symbol()).collect();
            assert_eq!(symbols.len(), Q::UNITS.len(), "{}", Q::NAME);
        }

        check::<Length>();
        check::<Area>();
        check::<Volume>();
        check::<Mass>();
        check::<Time>();
        check::<Pressure>();
        check::<Energy>();
        check::<Power>();
    }

    #[test]
    fn derived_dimensions() {
        assert!(Area::DIMENSION.is_product_of(Length::DIMENSION, Length::DIMENSION));
        assert!(Volume::DIMENSION.is_product_of(Area::DIMENSION, Length::DIMENSION));
        assert!(Energy::DIMENSION.is_product_of(Force::DIMENSION, Length::DIMENSION));
        assert!(Power::DIMENSION.is_quotient_of(Energy::DIMENSION, Time::DIMENSION));
        assert!(Pressure::DIMENSION.is_quotient_of(Force::DIMENSION, Area::DIMENSION));
        assert!(Density::DIMENSION.is_quotient_of(Mass::DIMENSION, Volume::DIMENSION));
        assert!(SpecificVolume::DIMENSION.is_quotient_of(Dimensionless::DIMENSION, Density::DIMENSION));
        assert!(AbsorbedDose::DIMENSION.is_quotient_of(Energy::DIMENSION, Mass::DIMENSION));
        assert_eq!(Energy::DIMENSION, Torque::DIMENSION);
    }

    #[test]
    fn prefixed_units() {
        assert_eq!(Volume::MILLILITER.symbol(), "mL");
        assert_eq!(Energy::KILOWATT_HOUR.symbol(), "kWh");
        assert_eq!(Torque::KILONEWTON_METER.symbol(), "kN·m");
        assert_eq!(Area::HECTARE.symbol(), "ha");
        assert_float_relative_eq!(Area::HECTARE.def().scale(), 1e4);
        assert_float_relative_eq!(Pressure::MILLIBAR.def().scale(), 100.0);
    }

    #[test]
    fn customary_conversions() {
        let m = Measure::<Length>::with_unit(2.0, Length::MILE);
        assert_amount_eq!(m.get(Length::DECIMETER), 32186.88);

        let m = Measure::<Mass>::with_unit(37.0, Mass::KILOGRAM);
        assert_amount_eq!(m.get(Mass::POUND), 81.571, 1e-5);

        let m = Measure::<Volume>::with_unit(56.0, Volume::CUBIC_INCH);
        assert_amount_eq!(m.get(Volume::MILLILITER), 917.676, 1e-5);

        let m = Measure::<Pressure>::with_unit(1.0, Pressure::ATMOSPHERE);
        assert_amount_eq!(m.get(Pressure::TORR), 760.0);
        assert_amount_eq!(m.get(Pressure::PSI), 14.6959, 1e-5);
    }

    #[test]
    fn absorbed_dose_rad() {
        let dose = Measure::<AbsorbedDose>::with_unit(250.0, AbsorbedDose::RAD);
        assert_amount_eq!(dose.get(AbsorbedDose::GRAY), 2.5);
        assert_amount_eq!(dose.get(AbsorbedDose::CENTIGRAY), 250.0);
    }

    #[test]
    fn absolute_zero() {
        let zero = Measure::<Temperature>::default();
        assert_amount_eq!(zero.get(Temperature::CELSIUS), -273.15);
        assert_amount_eq!(zero.get(Temperature::FAHRENHEIT), -459.67);
        assert_amount_eq!(zero.get(Temperature::RANKINE), 0.0);
    }

    #[cfg(not(feature = "decimal"))]
    #[test]
    fn absolute_zero_is_exact() {
        let zero = Measure::<Temperature>::default();
        approx::assert_abs_diff_eq!(zero.get(Temperature::CELSIUS), -273.15, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(zero.get(Temperature::FAHRENHEIT), -459.67, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(zero.get(Temperature::RANKINE), 0.0);
    }

    #[test]
    fn temperature_scales() {
        let body = Measure::<Temperature>::with_unit(98.6, Temperature::FAHRENHEIT);
        assert_amount_eq!(body.get(Temperature::CELSIUS), 37.0);
        assert_amount_eq!(body.get(Temperature::RANKINE), 558.27);
    }
}
