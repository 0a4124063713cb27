//! The quantity-erased façade over [`Measure`], for code that does not know the quantity at
//! compile time, such as heterogeneous collections or a user interface.
//!
//! Each erased value carries a [`QuantityKind`], the run-time identity and metadata of its
//! quantity. Every operation that combines two erased values, or an erased measure and an erased
//! unit, checks the kinds first and fails with a [`QuantityMismatch`] instead of producing a
//! meaningless number.
//!
//! ```
//! use measures::{quantities::{SpecificVolume, Volume}, AnyMeasure, AnyUnit, Error, Measure};
//!
//! let volume = AnyMeasure::from(Measure::<Volume>::new(5.0));
//! let liters = volume.in_unit(Some(&AnyUnit::from(Volume::LITER))).unwrap();
//! assert_eq!(liters.to_string(), "5000 L");
//!
//! let specific = AnyMeasure::from(Measure::<SpecificVolume>::new(1.0));
//! let err = specific.get(Some(&AnyUnit::from(Volume::CUBIC_METER))).unwrap_err();
//! assert!(matches!(err, Error::QuantityMismatch(_)));
//! ```

use std::{
    any::TypeId,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
};
use super::{
    amount::{self, Amount, ToAmount},
    dimension::Dimension,
    error::{DimensionMismatch, Error, InvalidUnitReference, NumericFault, Operand, Operation, QuantityMismatch},
    measure::Measure,
    quantity::Quantity,
    specific::SpecificMeasure,
    unit::{Unit, UnitDef},
};

/// The run-time identity and metadata of a [`Quantity`].
///
/// Two kinds are equal if and only if they were created from the same quantity type, even if
/// their names or dimensions happen to coincide.
#[derive(Clone, Copy)]
pub struct QuantityKind {
    id: TypeId,
    name: &'static str,
    dimension: Dimension,
    reference: UnitDef,
    units: fn() -> Vec<AnyUnit>,
}

impl QuantityKind {
    /// The kind of the quantity `Q`.
    pub fn of<Q: Quantity>() -> Self {
        Self {
            id: TypeId::of::<Q>(),
            name: Q::NAME,
            dimension: Q::DIMENSION,
            reference: *Q::REFERENCE.def(),
            units: erased_units::<Q>,
        }
    }

    /// Returns true if this is the kind of the quantity `Q`.
    pub fn is<Q: Quantity>(&self) -> bool {
        self.id == TypeId::of::<Q>()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The reference unit of the quantity.
    pub fn reference(&self) -> AnyUnit {
        AnyUnit { kind: *self, def: self.reference }
    }

    /// Every unit declared for the quantity, reference unit first.
    pub fn units(&self) -> Vec<AnyUnit> {
        (self.units)()
    }

    /// Finds the unit of this quantity with the given symbol.
    pub fn find_unit(&self, symbol: &str) -> Result<AnyUnit, InvalidUnitReference> {
        self.units()
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| {
                tracing::debug!(quantity = self.name, symbol, "unknown unit symbol");
                InvalidUnitReference { quantity: self.name, symbol: Some(symbol.to_owned()) }
            })
    }

    /// Fails with a [`QuantityMismatch`] unless `other` is the same kind as `self`.
    pub fn expect(&self, other: &QuantityKind) -> Result<(), QuantityMismatch> {
        if self == other {
            Ok(())
        } else {
            tracing::debug!(expected = self.name, found = other.name, "quantity mismatch");
            Err(QuantityMismatch { expected: self.name, found: other.name })
        }
    }

    fn operand(&self) -> Operand {
        Operand { name: self.name, dimension: self.dimension }
    }
}

fn erased_units<Q: Quantity>() -> Vec<AnyUnit> {
    Q::UNITS.iter().copied().map(AnyUnit::from).collect()
}

impl PartialEq for QuantityKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QuantityKind {}

impl Hash for QuantityKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for QuantityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityKind")
            .field("name", &self.name)
            .field("dimension", &self.dimension)
            .finish()
    }
}

impl Display for QuantityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A unit of any quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnyUnit {
    kind: QuantityKind,
    def: UnitDef,
}

impl AnyUnit {
    /// The quantity this unit belongs to.
    pub fn quantity(&self) -> QuantityKind {
        self.kind
    }

    /// The quantity-independent conversion rule of this unit.
    pub fn def(&self) -> &UnitDef {
        &self.def
    }

    /// The full symbol of the unit, including its prefix.
    pub fn symbol(&self) -> String {
        self.def.symbol()
    }

    /// Recovers the typed unit, failing if this is not a unit of `Q`.
    pub fn downcast<Q: Quantity>(&self) -> Result<Unit<Q>, QuantityMismatch> {
        QuantityKind::of::<Q>().expect(&self.kind)?;
        Ok(Unit::from_def(self.def))
    }

    /// Converts an amount in this unit to an amount in `to`, which must belong to the same
    /// quantity.
    pub fn convert(&self, amount: impl ToAmount, to: Option<&AnyUnit>) -> Result<Amount, Error> {
        let to = require(self.kind, to)?;
        self.kind.expect(&to.kind)?;
        Ok(to.def.from_reference(self.def.to_reference(amount.to_amount())))
    }
}

impl<Q: Quantity> From<Unit<Q>> for AnyUnit {
    fn from(unit: Unit<Q>) -> Self {
        Self { kind: QuantityKind::of::<Q>(), def: *unit.def() }
    }
}

impl Display for AnyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.def)
    }
}

/// Unwraps a unit argument that a caller may have left unset.
fn require(kind: QuantityKind, unit: Option<&AnyUnit>) -> Result<&AnyUnit, InvalidUnitReference> {
    unit.ok_or_else(|| {
        tracing::debug!(quantity = kind.name, "missing unit");
        InvalidUnitReference { quantity: kind.name, symbol: None }
    })
}

/// A measure of any quantity, read in a remembered display unit.
///
/// As with [`Measure`], the amount is stored in the reference unit of the quantity and the
/// display unit only affects [`AnyMeasure::amount`] and formatting. Equality and hashing use the
/// quantity and the canonical amount, so a NaN amount never compares equal, like with [`Measure`].
#[derive(Clone, Copy)]
pub struct AnyMeasure {
    reference: Amount,
    unit: AnyUnit,
}

impl AnyMeasure {
    /// Creates a measure from an amount in the given unit.
    ///
    /// # Panics
    ///
    /// Panics like [`Measure::new`] if the representation cannot hold the amount.
    pub fn with_unit(amount: impl ToAmount, unit: &AnyUnit) -> Self {
        Self { reference: unit.def.to_reference(amount.to_amount()), unit: *unit }
    }

    /// Like [`AnyMeasure::with_unit`], but reports an amount the representation cannot hold, in
    /// `unit` or in the reference unit, as a [`NumericFault`].
    pub fn try_with_unit(amount: impl ToAmount, unit: &AnyUnit) -> Result<Self, NumericFault> {
        let reference = unit.def.try_to_reference(amount.try_to_amount()?)?;
        Ok(Self { reference, unit: *unit })
    }

    /// The quantity of the measure.
    pub fn quantity(&self) -> QuantityKind {
        self.unit.kind
    }

    /// The amount in [`AnyMeasure::unit`].
    pub fn amount(&self) -> Amount {
        self.unit.def.from_reference(self.reference)
    }

    /// The unit this measure is read in.
    pub fn unit(&self) -> AnyUnit {
        self.unit
    }

    /// The amount in the reference unit of the quantity.
    pub fn reference_amount(&self) -> Amount {
        self.reference
    }

    /// The amount converted to the given unit.
    ///
    /// Fails with [`Error::InvalidUnitReference`] if no unit is given, and with
    /// [`Error::QuantityMismatch`] if the unit belongs to another quantity.
    pub fn get(&self, unit: Option<&AnyUnit>) -> Result<Amount, Error> {
        let unit = self.check(unit)?;
        Ok(unit.def.from_reference(self.reference))
    }

    /// The same magnitude, read in another unit. Fails like [`AnyMeasure::get`].
    pub fn in_unit(&self, unit: Option<&AnyUnit>) -> Result<Self, Error> {
        let unit = self.check(unit)?;
        Ok(Self { reference: self.reference, unit: *unit })
    }

    /// Recovers the typed measure, failing if this is not a measure of `Q`.
    pub fn downcast<Q: Quantity>(&self) -> Result<Measure<Q>, QuantityMismatch> {
        QuantityKind::of::<Q>().expect(&self.quantity())?;
        Ok(Measure::from_amount(self.reference))
    }

    /// The sum of two measures of the same quantity, read in the unit of `self`.
    pub fn add(&self, other: &AnyMeasure) -> Result<Self, QuantityMismatch> {
        self.quantity().expect(&other.quantity())?;
        Ok(Self { reference: self.reference + other.reference, unit: self.unit })
    }

    /// The difference of two measures of the same quantity, read in the unit of `self`.
    pub fn subtract(&self, other: &AnyMeasure) -> Result<Self, QuantityMismatch> {
        self.quantity().expect(&other.quantity())?;
        Ok(Self { reference: self.reference - other.reference, unit: self.unit })
    }

    /// The measure multiplied by a dimensionless scalar.
    pub fn scale(&self, scalar: impl ToAmount) -> Self {
        Self { reference: self.reference * scalar.to_amount(), unit: self.unit }
    }

    /// Multiplies two measures into a measure of the `target` quantity, read in its reference
    /// unit. Fails with [`Error::DimensionMismatch`] if the dimensions do not combine to the
    /// target's dimension.
    ///
    /// The reference amounts are multiplied as they are, so the result is only meaningful if the
    /// reference units of all three quantities are coherent; see [`Quantity::REFERENCE`].
    pub fn times(&self, other: &AnyMeasure, target: QuantityKind) -> Result<Self, Error> {
        let (lhs, rhs) = (self.quantity(), other.quantity());
        if !target.dimension.is_product_of(lhs.dimension, rhs.dimension) {
            return Err(erased_mismatch(Operation::Multiply, lhs, rhs, target).into());
        }
        Ok(Self { reference: self.reference * other.reference, unit: target.reference() })
    }

    /// Divides two measures into a measure of the `target` quantity, read in its reference unit.
    /// Fails with [`Error::DimensionMismatch`] if the dimensions do not combine to the target's
    /// dimension. The reference units must be coherent, as for [`AnyMeasure::times`].
    pub fn divide(&self, other: &AnyMeasure, target: QuantityKind) -> Result<Self, Error> {
        let (lhs, rhs) = (self.quantity(), other.quantity());
        if !target.dimension.is_quotient_of(lhs.dimension, rhs.dimension) {
            return Err(erased_mismatch(Operation::Divide, lhs, rhs, target).into());
        }
        Ok(Self { reference: self.reference / other.reference, unit: target.reference() })
    }

    fn check<'a>(&self, unit: Option<&'a AnyUnit>) -> Result<&'a AnyUnit, Error> {
        let unit = require(self.quantity(), unit)?;
        self.quantity().expect(&unit.kind)?;
        Ok(unit)
    }
}

fn erased_mismatch(
    operation: Operation,
    lhs: QuantityKind,
    rhs: QuantityKind,
    target: QuantityKind,
) -> DimensionMismatch {
    let err = DimensionMismatch {
        operation,
        lhs: lhs.operand(),
        rhs: rhs.operand(),
        target: target.operand(),
    };
    tracing::debug!(%err, "dimension check failed");
    err
}

impl<Q: Quantity> From<Measure<Q>> for AnyMeasure {
    fn from(measure: Measure<Q>) -> Self {
        Self { reference: measure.amount(), unit: Q::REFERENCE.into() }
    }
}

impl<Q: Quantity> From<SpecificMeasure<Q>> for AnyMeasure {
    fn from(measure: SpecificMeasure<Q>) -> Self {
        Self { reference: measure.measure().amount(), unit: measure.unit().into() }
    }
}

impl PartialEq for AnyMeasure {
    fn eq(&self, other: &Self) -> bool {
        self.quantity() == other.quantity() && self.reference == other.reference
    }
}

impl Eq for AnyMeasure {}

impl<Q: Quantity> PartialEq<Measure<Q>> for AnyMeasure {
    fn eq(&self, other: &Measure<Q>) -> bool {
        self.quantity().is::<Q>() && self.reference == other.amount()
    }
}

impl Hash for AnyMeasure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantity().hash(state);
        amount::hash(self.reference, state);
    }
}

impl Debug for AnyMeasure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyMeasure")
            .field("quantity", &self.quantity().name)
            .field("amount", &self.amount())
            .field("unit", &self.unit.symbol())
            .finish()
    }
}

impl Display for AnyMeasure {
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

#[cfg(test)]
mod tests {
    use crate::{
        amount::assert_amount_eq,
        quantities::{Area, Energy, Force, Length, SpecificVolume, Temperature, Torque, Volume},
    };
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn index_same_quantity() {
        let meas = AnyMeasure::from(Measure::<Volume>::new(5.0));
        let actual = meas.in_unit(Some(&Volume::LITER.into())).unwrap();
        assert_eq!(actual, meas);
        assert_eq!(actual.downcast::<Volume>().unwrap(), Measure::new(5.0));
        assert_amount_eq!(actual.amount(), 5000.0);
        assert_eq!(actual.unit(), AnyUnit::from(Volume::LITER));
    }

    #[test]
    fn index_different_quantity() {
        let meas = AnyMeasure::from(Measure::<SpecificVolume>::new(1.0));
        let err = meas.in_unit(Some(&Volume::CUBIC_METER.into())).unwrap_err();
        assert_eq!(err, Error::QuantityMismatch(QuantityMismatch {
            expected: "SpecificVolume",
            found: "Volume",
        }));
    }

    #[test]
    fn missing_unit_is_distinct_from_mismatch() {
        let meas = AnyMeasure::from(Measure::<Length>::new(1.0));
        let err = meas.get(None).unwrap_err();
        assert_eq!(err, Error::InvalidUnitReference(InvalidUnitReference {
            quantity: "Length",
            symbol: None,
        }));
    }

    #[test]
    fn mismatch_never_returns_value() {
        let meas = AnyMeasure::from(Measure::<Length>::new(1.0));
        for unit in QuantityKind::of::<Temperature>().units() {
            assert!(matches!(meas.get(Some(&unit)), Err(Error::QuantityMismatch(_))));
        }
    }

    #[test]
    fn shared_dimension_is_still_mismatch() {
        let torque = AnyMeasure::from(Measure::<Torque>::new(3.0));
        let joule = AnyUnit::from(Energy::JOULE);
        assert!(matches!(torque.get(Some(&joule)), Err(Error::QuantityMismatch(_))));
        assert!(torque.add(&AnyMeasure::from(Measure::<Energy>::new(1.0))).is_err());
    }

    #[test]
    fn remembers_display_unit() {
        let meas = AnyMeasure::from(Measure::<Temperature>::with_unit(20.0, Temperature::CELSIUS).in_unit(Temperature::CELSIUS));
        assert_amount_eq!(meas.amount(), 20.0);
        assert_amount_eq!(meas.reference_amount(), 293.15);
        assert_amount_eq!(meas.get(Some(&Temperature::KELVIN.into())).unwrap(), 293.15);
        assert_eq!(meas.unit().symbol(), "°C");
    }

    #[test]
    fn downcast() {
        let meas = AnyMeasure::from(Measure::<Length>::new(2.0));
        assert_eq!(meas.downcast::<Length>().unwrap(), Measure::new(2.0));
        assert_eq!(meas.downcast::<Area>().unwrap_err(), QuantityMismatch { expected: "Area", found: "Length" });
        assert_eq!(AnyUnit::from(Length::INCH).downcast::<Length>().unwrap(), Length::INCH);
        assert!(AnyUnit::from(Length::INCH).downcast::<Volume>().is_err());
    }

    #[test]
    fn find_unit() {
        let kind = QuantityKind::of::<Length>();
        assert_eq!(kind.find_unit("km").unwrap(), AnyUnit::from(Length::KILOMETER));
        assert_eq!(kind.find_unit("furlong").unwrap_err(), InvalidUnitReference {
            quantity: "Length",
            symbol: Some("furlong".to_owned()),
        });
        assert_eq!(kind.reference(), AnyUnit::from(Length::METER));
        assert_eq!(kind.units()[0], kind.reference());
    }

    #[test]
    fn convert_between_units() {
        let inch = AnyUnit::from(Length::INCH);
        let cm = AnyUnit::from(Length::CENTIMETER);
        assert_amount_eq!(inch.convert(10.0, Some(&cm)).unwrap(), 25.4);
        assert!(matches!(inch.convert(1.0, None), Err(Error::InvalidUnitReference(_))));
        assert!(matches!(
            inch.convert(1.0, Some(&Volume::LITER.into())),
            Err(Error::QuantityMismatch(_))
        ));
    }

    #[test]
    fn fallible_construction() {
        let km = AnyUnit::from(Length::KILOMETER);
        let meas = AnyMeasure::try_with_unit(2.0, &km).unwrap();
        assert_eq!(meas, Measure::<Length>::new(2000.0));
        assert_eq!(meas.unit(), km);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_rejects_unrepresentable_input() {
        use crate::error::FaultKind;

        let km = AnyUnit::from(Length::KILOMETER);
        assert_eq!(AnyMeasure::try_with_unit(f64::NAN, &km).unwrap_err().kind(), FaultKind::NotFinite);
        assert_eq!(AnyMeasure::try_with_unit(-1e40, &km).unwrap_err().kind(), FaultKind::Overflow);
        assert_eq!(AnyMeasure::try_with_unit(1e27, &km).unwrap_err().kind(), FaultKind::Overflow);
    }

    #[test]
    fn dynamic_times_and_divide() {
        let force = AnyMeasure::from(Measure::<Force>::new(4.0));
        let arm = AnyMeasure::from(Measure::<Length>::new(0.25));

        let torque = force.times(&arm, QuantityKind::of::<Torque>()).unwrap();
        assert_eq!(torque, Measure::<Torque>::new(1.0));
        assert_eq!(torque.quantity(), QuantityKind::of::<Torque>());

        let err = force.times(&arm, QuantityKind::of::<Area>()).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch(_)));

        let back = torque.divide(&arm, QuantityKind::of::<Force>()).unwrap();
        assert_eq!(back, Measure::<Force>::new(4.0));
    }

    #[test]
    fn heterogeneous_collection() {
        let measures = [
            AnyMeasure::from(Measure::<Length>::new(1.0)),
            AnyMeasure::from(Measure::<Volume>::with_unit(2.0, Volume::LITER).in_unit(Volume::LITER)),
            AnyMeasure::from(Measure::<Temperature>::default()),
        ];
        let printed = measures.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(printed, ["1 m", "2 L", "0 K"]);
    }

    #[test]
    fn erased_measures_as_set_members() {
        let set: HashSet<_> = [
            AnyMeasure::from(Measure::<Torque>::new(1.0)),
            AnyMeasure::from(Measure::<Energy>::new(1.0)),
            AnyMeasure::with_unit(1000.0, &Energy::MILLIJOULE.into()),
        ].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn equality_requires_same_quantity() {
        let torque = AnyMeasure::from(Measure::<Torque>::new(1.0));
        let energy = AnyMeasure::from(Measure::<Energy>::new(1.0));
        assert_ne!(torque, energy);
        assert_eq!(torque.scale(2.0), AnyMeasure::from(Measure::<Torque>::new(2.0)));
    }
}
