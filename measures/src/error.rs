//! Errors returned by fallible measure operations.
//!
//! Every error here is a caller logic error: it is deterministic, never transient, and the
//! operation that returned it did no partial work.

use crate::dimension::Dimension;
use std::{error, fmt::{self, Display, Formatter}};

/// The operation that failed dimension validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Multiply,
    Divide,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

/// A quantity name together with its dimension, as reported in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    pub name: &'static str,
    pub dimension: Dimension,
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.dimension)
    }
}

/// The requested result quantity of a multiplication or division does not have the dimension
/// that the operands combine to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub operation: Operation,
    pub lhs: Operand,
    pub rhs: Operand,
    pub target: Operand,
}

impl DimensionMismatch {
    /// The dimension that the operands actually combine to.
    pub fn actual(&self) -> Dimension {
        match self.operation {
            Operation::Multiply => self.lhs.dimension * self.rhs.dimension,
            Operation::Divide => self.lhs.dimension / self.rhs.dimension,
        }
    }
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f,
            "cannot {} {} and {} to measure of quantity {} (operands combine to [{}])",
            self.operation, self.lhs, self.rhs, self.target, self.actual()
        )
    }
}

impl error::Error for DimensionMismatch {}

/// A unit or measure of one quantity was used where another quantity was expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantityMismatch {
    /// The quantity of the measure being operated on.
    pub expected: &'static str,

    /// The quantity of the unit or measure that was supplied.
    pub found: &'static str,
}

impl Display for QuantityMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "expected a unit of {}, found a unit of {}", self.expected, self.found)
    }
}

impl error::Error for QuantityMismatch {}

/// A required unit was not supplied, or a unit symbol did not resolve to a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidUnitReference {
    /// The quantity the unit was required for.
    pub quantity: &'static str,

    /// The symbol that failed to resolve, or [`None`] if no unit was given at all.
    pub symbol: Option<String>,
}

impl Display for InvalidUnitReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "`{}` is not a unit of {}", symbol, self.quantity),
            None => write!(f, "a unit of {} is required, but none was given", self.quantity),
        }
    }
}

impl error::Error for InvalidUnitReference {}

/// The cause of a [`NumericFault`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultKind {
    DivisionByZero,
    Overflow,
    NotFinite,
}

/// A checked arithmetic operation could not produce a representable result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericFault {
    kind: FaultKind,
}

impl NumericFault {
    pub(crate) fn new(kind: FaultKind) -> Self {
        tracing::debug!(?kind, "numeric fault");
        Self { kind }
    }

    /// Returns the cause of the fault.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }
}

impl Display for NumericFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            FaultKind::DivisionByZero => write!(f, "division by zero"),
            FaultKind::Overflow => write!(f, "arithmetic overflow"),
            FaultKind::NotFinite => write!(f, "result is not a number"),
        }
    }
}

impl error::Error for NumericFault {}

/// Any error produced by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    DimensionMismatch(DimensionMismatch),
    QuantityMismatch(QuantityMismatch),
    InvalidUnitReference(InvalidUnitReference),
    NumericFault(NumericFault),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch(err) => write!(f, "{}", err),
            Error::QuantityMismatch(err) => write!(f, "{}", err),
            Error::InvalidUnitReference(err) => write!(f, "{}", err),
            Error::NumericFault(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::DimensionMismatch(err) => Some(err),
            Error::QuantityMismatch(err) => Some(err),
            Error::InvalidUnitReference(err) => Some(err),
            Error::NumericFault(err) => Some(err),
        }
    }
}

impl From<DimensionMismatch> for Error {
    fn from(err: DimensionMismatch) -> Self {
        Self::DimensionMismatch(err)
    }
}

impl From<QuantityMismatch> for Error {
    fn from(err: QuantityMismatch) -> Self {
        Self::QuantityMismatch(err)
    }
}

impl From<InvalidUnitReference> for Error {
    fn from(err: InvalidUnitReference) -> Self {
        Self::InvalidUnitReference(err)
    }
}

impl From<NumericFault> for Error {
    fn from(err: NumericFault) -> Self {
        Self::NumericFault(err)
    }
}
