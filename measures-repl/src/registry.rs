//! The quantities known to the REPL, and lookups of quantities and units by name.

use levenshtein::levenshtein;
use measures::{quantities::*, AnyUnit, QuantityKind};
use once_cell::sync::Lazy;

/// Every quantity the REPL can convert, in the order they are listed.
pub static QUANTITIES: Lazy<Vec<QuantityKind>> = Lazy::new(|| vec![
    QuantityKind::of::<Dimensionless>(),
    QuantityKind::of::<Length>(),
    QuantityKind::of::<Area>(),
    QuantityKind::of::<Volume>(),
    QuantityKind::of::<Mass>(),
    QuantityKind::of::<Time>(),
    QuantityKind::of::<ElectricCurrent>(),
    QuantityKind::of::<Temperature>(),
    QuantityKind::of::<AmountOfSubstance>(),
    QuantityKind::of::<LuminousIntensity>(),
    QuantityKind::of::<Velocity>(),
    QuantityKind::of::<Acceleration>(),
    QuantityKind::of::<Force>(),
    QuantityKind::of::<Pressure>(),
    QuantityKind::of::<Energy>(),
    QuantityKind::of::<Torque>(),
    QuantityKind::of::<Power>(),
    QuantityKind::of::<Density>(),
    QuantityKind::of::<SpecificVolume>(),
    QuantityKind::of::<AbsorbedDose>(),
]);

/// Finds a quantity by name, ignoring case.
pub fn find_quantity(name: &str) -> Option<QuantityKind> {
    QUANTITIES
        .iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
        .copied()
}

/// Finds a unit of the given quantity by its full symbol.
pub fn find_unit_of(kind: QuantityKind, symbol: &str) -> Option<AnyUnit> {
    kind.units()
        .into_iter()
        .find(|unit| unit.symbol() == symbol)
}

/// Finds a unit of any quantity by its full symbol. Quantities are searched in the order of
/// [`QUANTITIES`].
pub fn find_unit(symbol: &str) -> Option<AnyUnit> {
    QUANTITIES
        .iter()
        .find_map(|kind| find_unit_of(*kind, symbol))
}

/// Returns the names of quantities with a name similar to the given one.
pub fn similar_quantities(name: &str) -> Vec<String> {
    let name = name.to_lowercase();
    QUANTITIES
        .iter()
        .map(|kind| kind.name())
        .filter(|n| levenshtein(&n.to_lowercase(), &name) < 2)
        .map(str::to_string)
        .collect()
}

/// Returns the symbols of units similar to the given one, searching only the given quantity if
/// one is provided.
///
/// Single-character symbols are only suggested when they differ from `symbol` by case, since
/// every other single-character symbol is one edit away.
pub fn similar_units(symbol: &str, within: Option<QuantityKind>) -> Vec<String> {
    let kinds = match within {
        Some(kind) => vec![kind],
        None => QUANTITIES.to_vec(),
    };

    let mut suggestions = Vec::new();
    for unit in kinds.iter().flat_map(|kind| kind.units()) {
        let candidate = unit.symbol();
        if candidate.is_empty() || suggestions.contains(&candidate) {
            continue;
        }

        let same_but_case = candidate.to_lowercase() == symbol.to_lowercase();
        let one_edit = candidate.chars().count() > 1 && levenshtein(&candidate, symbol) < 2;
        if same_but_case || one_edit {
            suggestions.push(candidate);
        }
    }
    suggestions
}
