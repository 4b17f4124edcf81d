use thiserror::Error;

use crate::constant::{HELP_LONG, HELP_SHORT};
use crate::matcher::{CaptureError, TypedRegistry};
use crate::model::ScalarKind;
use crate::parser::reader::ArgumentReader;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A failure encountered while scanning the argument vector.
///
/// Any failure aborts the parse immediately; destinations already written keep their values, and
/// nothing is skipped or retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag expecting a value was the final token.
    #[error("Parse error: missing argument for '{flag}'.")]
    MissingArgument {
        /// The flag spelling as it appeared on the command line.
        flag: String,
    },
    /// A value token could not be converted to the destination kind.
    #[error("Parse error: cannot convert '{value}' to {kind} for '{flag}'.")]
    InvalidArgument {
        /// The flag spelling as it appeared on the command line.
        flag: String,
        /// The raw value token.
        value: String,
        /// The kind the flag is bound to.
        kind: ScalarKind,
    },
    /// A numeric value token does not fit the destination width.
    #[error("Parse error: '{value}' is out of range of {kind} for '{flag}'.")]
    OutOfRange {
        /// The flag spelling as it appeared on the command line.
        flag: String,
        /// The raw value token.
        value: String,
        /// The kind the flag is bound to.
        kind: ScalarKind,
    },
}

impl ParseError {
    fn capture(flag: &str, error: CaptureError) -> Self {
        match error {
            CaptureError::InvalidConversion { value, kind } => ParseError::InvalidArgument {
                flag: flag.to_string(),
                value,
                kind,
            },
            CaptureError::OutOfRange { value, kind } => ParseError::OutOfRange {
                flag: flag.to_string(),
                value,
                kind,
            },
        }
    }
}

/// Why a parse call returned without completing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Halt {
    /// The help switch was encountered; help has already been rendered.
    /// Not a failure - callers should exit cleanly.
    #[error("help requested")]
    Help,
    /// Scanning failed.
    #[error(transparent)]
    Failed(#[from] ParseError),
}

/// The engine's terminal outcome, before help rendering.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// The vector is exhausted, or scanning stopped at an unmatched token.
    Done,
    /// The help switch was encountered; the caller renders and reports it.
    PrintHelp,
}

/// Scan the argument vector against the registered flags.
///
/// Each iteration peeks one token. Help interception applies to the whole token, before any
/// splitting; otherwise the token splits on its first `=` into the flag part and an optional
/// attached value. The first unmatched token ends the scan with that token still unconsumed.
pub(crate) fn scan(
    registry: &mut TypedRegistry<'_>,
    reader: &mut ArgumentReader,
) -> Result<Action, ParseError> {
    loop {
        let Some(token) = reader.peek() else {
            return Ok(Action::Done);
        };

        if token == HELP_SHORT || token == HELP_LONG {
            return Ok(Action::PrintHelp);
        }

        let token = token.to_string();
        let (flag_part, value_part) = split_equals_delimiter(&token);

        let Some(option) = registry.find(flag_part) else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No flag matches '{flag_part}'.  Ending the scan.");
            }

            return Ok(Action::Done);
        };

        match value_part {
            Some(value) => {
                // An attached value: the flag token is only consumed once the capture succeeds.
                option
                    .capture(value)
                    .map_err(|error| ParseError::capture(flag_part, error))?;
                reader.next();
            }
            None => {
                // Step past the flag; the value is the new current token.
                reader.next();

                match reader.next() {
                    Some(value) => {
                        option
                            .capture(value)
                            .map_err(|error| ParseError::capture(flag_part, error))?;
                    }
                    None => {
                        return Err(ParseError::MissingArgument {
                            flag: flag_part.to_string(),
                        });
                    }
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{flag_part}'.");
        }
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((flag_part, value_part)) => (flag_part, Some(value_part)),
        None => (token, None),
    }
}
