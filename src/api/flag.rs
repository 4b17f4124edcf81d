use thiserror::Error;

use crate::api::Destination;
use crate::constant::{HELP_LONG, HELP_SHORT};
use crate::matcher::FlagOption;

/// A configuration problem detected while registering a flag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// Neither a short nor a long spelling was provided.
    #[error("Config error: a flag must declare a short or long spelling.")]
    MissingName,
    /// The spelling is reserved for the built-in help interception.
    #[error("Config error: '{spelling}' is reserved for help.")]
    ReservedName {
        /// The offending spelling.
        spelling: String,
    },
}

/// A flag bound to a caller-owned destination.
/// Used with [`FlagParser::register`](crate::FlagParser::register).
///
/// ### Example
/// ```
/// use flagbind::Flag;
///
/// let mut workers: u16 = 4;
/// Flag::new(&mut workers)
///     .short("-w")
///     .long("--workers")
///     .help("Worker threads to spawn.");
/// ```
pub struct Flag<'a, T> {
    destination: &'a mut T,
    short: Option<String>,
    long: Option<String>,
    help: Option<String>,
}

impl<'a, T: Destination> Flag<'a, T> {
    /// Create a flag writing into `destination`.
    ///
    /// At least one spelling must be declared via [`Flag::short`] or [`Flag::long`] before the
    /// flag can be registered.
    pub fn new(destination: &'a mut T) -> Self {
        Self {
            destination,
            short: None,
            long: None,
            help: None,
        }
    }

    /// Declare the short spelling, conventionally a single-dash form (ex: `-n`).
    /// If repeated, only the final spelling applies.
    ///
    /// The spelling is matched verbatim and case-sensitively against input tokens; no dash syntax
    /// is enforced.
    pub fn short(mut self, spelling: impl Into<String>) -> Self {
        self.short.replace(spelling.into());
        self
    }

    /// Declare the long spelling, conventionally a double-dash form (ex: `--num`).
    /// If repeated, only the final spelling applies.
    ///
    /// The spelling is matched verbatim and case-sensitively against input tokens; no dash syntax
    /// is enforced.
    pub fn long(mut self, spelling: impl Into<String>) -> Self {
        self.long.replace(spelling.into());
        self
    }

    /// Document the help message for this flag.
    /// If repeated, only the final message applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    pub(crate) fn consume(self) -> Result<FlagOption<'a, T>, RegisterError> {
        if self.short.is_none() && self.long.is_none() {
            return Err(RegisterError::MissingName);
        }

        for spelling in [&self.short, &self.long].into_iter().flatten() {
            if spelling == HELP_SHORT || spelling == HELP_LONG {
                return Err(RegisterError::ReservedName {
                    spelling: spelling.clone(),
                });
            }
        }

        Ok(FlagOption::new(
            self.short,
            self.long,
            self.help,
            self.destination,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Capturable;
    use rstest::rstest;

    #[test]
    fn consume() {
        let mut value: u32 = 0;
        let option = Flag::new(&mut value)
            .short("-v")
            .long("--value")
            .help("help message")
            .consume()
            .unwrap();

        let entry = option.entry();
        assert_eq!(entry.names(), "--value|-v");
        assert_eq!(entry.help, Some("help message".to_string()));
    }

    #[rstest]
    #[case(Some("-v"), None)]
    #[case(None, Some("--value"))]
    fn consume_single_spelling(#[case] short: Option<&str>, #[case] long: Option<&str>) {
        let mut value: u32 = 0;
        let mut flag = Flag::new(&mut value);

        if let Some(spelling) = short {
            flag = flag.short(spelling);
        }

        if let Some(spelling) = long {
            flag = flag.long(spelling);
        }

        assert!(flag.consume().is_ok());
    }

    #[test]
    fn consume_unnamed() {
        let mut value: u32 = 0;
        let result = Flag::new(&mut value).consume();
        assert_matches!(result, Err(RegisterError::MissingName));
    }

    #[rstest]
    #[case("-h")]
    #[case("--help")]
    fn consume_reserved(#[case] spelling: &str) {
        let mut value: u32 = 0;
        assert_matches!(
            Flag::new(&mut value).short(spelling).consume(),
            Err(RegisterError::ReservedName { .. })
        );

        let mut value: u32 = 0;
        assert_matches!(
            Flag::new(&mut value).long(spelling).consume(),
            Err(RegisterError::ReservedName { .. })
        );
    }

    #[test]
    fn repeated_spelling_replaces() {
        let mut value: u32 = 0;
        let option = Flag::new(&mut value)
            .long("--discarded")
            .long("--value")
            .consume()
            .unwrap();

        assert_eq!(option.entry().names(), "--value");
    }
}
