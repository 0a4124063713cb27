#![doc = include_str!("../README.md")]
//!
//! [`assert_float_eq`]: https://crates.io/crates/assert_float_eq
//! [`approx`]: https://crates.io/crates/approx

pub mod amount;
pub mod dimension;
pub mod erased;
pub mod error;
pub mod measure;
pub mod quantities;
pub mod quantity;
pub mod specific;
pub mod unit;

pub use amount::{Amount, ToAmount};
pub use dimension::{BaseDimension, Dimension};
pub use erased::{AnyMeasure, AnyUnit, QuantityKind};
pub use error::{
    DimensionMismatch,
    Error,
    FaultKind,
    InvalidUnitReference,
    NumericFault,
    Operand,
    Operation,
    QuantityMismatch,
};
pub use measure::Measure;
pub use quantity::Quantity;
pub use specific::SpecificMeasure;
pub use unit::{Prefix, Unit, UnitDef};
