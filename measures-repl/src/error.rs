//! Error kinds reported by the REPL.

use ariadne::Fmt;
use measures::Error as MeasureError;
use measures_attrs::ErrorKind;
use measures_error::{Error, EXPR, UNIT};
use std::ops::Range;

/// Formats a list of suggestions as a help message.
fn suggest(what: &str, suggestions: &[String], fallback: &str) -> String {
    if suggestions.is_empty() {
        fallback.to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` {}?", (&*suggestions[0]).fg(UNIT), what)
    } else {
        format!(
            "did you mean one of these {}s? {}",
            what,
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(UNIT)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// The input has the wrong number of arguments for its command.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}, found {} argument(s)", self.usage.fg(EXPR), self.found),
    labels = ["in this input"],
    help = format!("type {} to see the available commands", "help".fg(EXPR)),
)]
pub struct WrongArgCount {
    /// The expected form of the command.
    pub usage: &'static str,

    /// The number of arguments that were given.
    pub found: usize,
}

/// The value to convert is not a finite number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid value", self.found),
    labels = ["I expected a finite number here"],
)]
pub struct InvalidValue {
    pub found: String,
}

/// No unit with the given symbol exists.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown unit `{}`", self.symbol),
    labels = ["this unit"],
    help = suggest("unit", &self.suggestions, &format!("type {} to see the units of a quantity", "units <quantity>".fg(EXPR))),
)]
pub struct UnknownUnit {
    pub symbol: String,

    /// A list of similar unit symbols, if any.
    pub suggestions: Vec<String>,
}

/// No quantity with the given name exists.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown quantity `{}`", self.name),
    labels = ["this quantity"],
    help = suggest("quantity", &self.suggestions, &format!("type {} to see the known quantities", "quantities".fg(EXPR))),
)]
pub struct UnknownQuantity {
    pub name: String,

    /// A list of similarly named quantities, if any.
    pub suggestions: Vec<String>,
}

/// The two units of a conversion measure different quantities.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot convert {} to {}", self.from.fg(UNIT), self.to.fg(UNIT)),
    labels = [
        format!("this is a unit of {}", self.from),
        format!("but this is a unit of {}", self.to),
    ],
    help = "both units must measure the same quantity",
)]
pub struct IncompatibleUnits {
    /// The quantity of the source unit.
    pub from: &'static str,

    /// The quantity of the target unit.
    pub to: &'static str,
}

/// The result of the conversion is too large to represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the result is not a finite number",
    labels = ["this conversion overflows"],
)]
pub struct NotFinite;

/// Any other error from the measures library.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = self.message.clone(),
    labels = [""],
    note = "you should never see this error; please report this as a bug",
)]
pub struct Internal {
    pub message: String,
}

/// Converts an error from the measures library into a report pointing at the given spans.
pub fn from_measure_error(err: MeasureError, spans: Vec<Range<usize>>) -> Error {
    match err {
        MeasureError::QuantityMismatch(err) => Error::new(spans, IncompatibleUnits {
            from: err.expected,
            to: err.found,
        }),
        MeasureError::NumericFault(_) => Error::new(spans, NotFinite),
        err => Error::new(spans, Internal { message: err.to_string() }),
    }
}
