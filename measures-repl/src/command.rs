//! Parsing and execution of REPL commands.

use crate::{
    error::{
        from_measure_error,
        InvalidValue,
        NotFinite,
        UnknownQuantity,
        UnknownUnit,
        WrongArgCount,
    },
    registry,
};
use measures::{amount, AnyMeasure, AnyUnit, QuantityKind};
use measures_error::Error;
use std::ops::Range;

const HELP: &str = "\
<value> <from> [<to>]  convert a value between units of the same quantity,
                       or to the reference unit if <to> is omitted
quantities             list the known quantities, their dimensions and reference units
units <quantity>       list the units of a quantity
help                   show this message";

/// A whitespace-separated word of the input, and where it is.
///
/// The span counts characters rather than bytes, which is what error reports expect.
#[derive(Clone, Debug, PartialEq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Splits the input into words, keeping the character range of each word.
fn words(input: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();

    // (byte offset, char offset) of the start of the current word
    let mut start = None;
    let mut chars = 0;
    for (byte, c) in input.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some((s_byte, s_char))) => {
                words.push(Word { text: &input[s_byte..byte], span: s_char..chars });
                start = None;
            },
            (false, None) => start = Some((byte, chars)),
            _ => (),
        }
        chars += 1;
    }
    if let Some((s_byte, s_char)) = start {
        words.push(Word { text: &input[s_byte..], span: s_char..chars });
    }
    words
}

/// A command entered in the REPL.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<'a> {
    /// Print the list of commands.
    Help,

    /// List the known quantities.
    Quantities,

    /// List the units of a quantity.
    Units(Word<'a>),

    /// Convert a value from one unit to another.
    Convert {
        value: Word<'a>,
        from: Word<'a>,
        to: Option<Word<'a>>,
    },
}

impl<'a> Command<'a> {
    /// Parses a command from a line of input. Returns [`None`] if the line is blank.
    pub fn parse(input: &'a str) -> Result<Option<Self>, Error> {
        let words = words(input);
        let whole = match (words.first(), words.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => return Ok(None),
        };

        let command = match words.as_slice() {
            [word] if word.text == "help" => Command::Help,
            [word] if word.text == "quantities" => Command::Quantities,
            [word, quantity] if word.text == "units" => Command::Units(quantity.clone()),
            [word, rest @ ..] if word.text == "units" => {
                return Err(Error::new(vec![whole], WrongArgCount {
                    usage: "units <quantity>",
                    found: rest.len(),
                }));
            },
            [value, from] => Command::Convert {
                value: value.clone(),
                from: from.clone(),
                to: None,
            },
            [value, from, to] => Command::Convert {
                value: value.clone(),
                from: from.clone(),
                to: Some(to.clone()),
            },
            _ => {
                return Err(Error::new(vec![whole], WrongArgCount {
                    usage: "<value> <from> [<to>]",
                    found: words.len(),
                }));
            },
        };

        Ok(Some(command))
    }

    /// Runs the command, returning the text to print.
    pub fn execute(&self) -> Result<String, Error> {
        match self {
            Command::Help => Ok(HELP.to_string()),
            Command::Quantities => Ok(list_quantities()),
            Command::Units(name) => list_units(name),
            Command::Convert { value, from, to } => convert(value, from, to.as_ref()),
        }
    }
}

fn list_quantities() -> String {
    registry::QUANTITIES
        .iter()
        .map(|kind| {
            let dimension = kind.dimension().to_string();
            format!("{:<18}{:<14}{}", kind.name(), dimension, kind.reference())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_units(name: &Word) -> Result<String, Error> {
    let kind = registry::find_quantity(name.text).ok_or_else(|| {
        Error::new(vec![name.span.clone()], UnknownQuantity {
            name: name.text.to_string(),
            suggestions: registry::similar_quantities(name.text),
        })
    })?;

    let symbols = kind.units()
        .iter()
        .map(AnyUnit::symbol)
        .filter(|symbol| !symbol.is_empty())
        .collect::<Vec<_>>();
    Ok(format!("{} [{}]: {}", kind.name(), kind.dimension(), symbols.join(", ")))
}

/// Builds the error for a unit symbol that could not be resolved.
fn unknown_unit(word: &Word, within: Option<QuantityKind>) -> Error {
    Error::new(vec![word.span.clone()], UnknownUnit {
        symbol: word.text.to_string(),
        suggestions: registry::similar_units(word.text, within),
    })
}

fn convert(value: &Word, from: &Word, to: Option<&Word>) -> Result<String, Error> {
    let invalid_value = || Error::new(vec![value.span.clone()], InvalidValue {
        found: value.text.to_string(),
    });
    let raw = value.text
        .parse::<f64>()
        .ok()
        .filter(|raw| raw.is_finite())
        .ok_or_else(invalid_value)?;

    let from_unit = registry::find_unit(from.text).ok_or_else(|| unknown_unit(from, None))?;
    let quantity = from_unit.quantity();

    // prefer units of the source quantity, so the mismatch is only reported for symbols that
    // exist elsewhere
    let (to_unit, spans) = match to {
        Some(to) => {
            let unit = quantity.find_unit(to.text)
                .ok()
                .or_else(|| registry::find_unit(to.text))
                .ok_or_else(|| unknown_unit(to, Some(quantity)))?;
            (unit, vec![from.span.clone(), to.span.clone()])
        },
        None => (quantity.reference(), vec![from.span.clone()]),
    };

    let measure = AnyMeasure::try_with_unit(raw, &from_unit).map_err(|err| {
        tracing::debug!(%err, value = value.text, "value does not fit the amount representation");
        invalid_value()
    })?;
    let converted = measure
        .in_unit(Some(&to_unit))
        .map_err(|err| from_measure_error(err, spans.clone()))?;

    let fits = to_unit.def()
        .try_from_reference(converted.reference_amount())
        .is_ok_and(amount::is_finite);
    if !fits {
        let whole = value.span.start..spans.last().map_or(from.span.end, |span| span.end);
        return Err(Error::new(vec![whole], NotFinite));
    }

    tracing::debug!(quantity = quantity.name(), from = %from_unit, to = %to_unit, "converted");
    Ok(format!("{} = {}", measure, converted))
}
