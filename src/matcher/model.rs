use thiserror::Error;

use crate::api::{ConvertError, Destination};
use crate::model::ScalarKind;

/// Why a matched flag failed to capture its value token.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CaptureError {
    #[error("cannot convert '{value}' to {kind}.")]
    InvalidConversion { value: String, kind: ScalarKind },

    #[error("'{value}' is out of range of {kind}.")]
    OutOfRange { value: String, kind: ScalarKind },
}

/// Behaviour shared by every registered flag, erased over the destination type so the registry
/// can hold all kinds behind one interface.
pub(crate) trait Capturable {
    /// Whether `flag_part` is one of this flag's spellings.
    fn matches(&self, flag_part: &str) -> bool;

    /// Convert the value token and write it through the destination.
    fn capture(&mut self, value: &str) -> Result<(), CaptureError>;

    /// Snapshot this flag for help rendering.
    fn entry(&self) -> OptionEntry;
}

/// A registered flag: its spellings, description, and bound destination.
#[derive(Debug)]
pub(crate) struct FlagOption<'a, T> {
    short: Option<String>,
    long: Option<String>,
    help: Option<String>,
    destination: &'a mut T,
}

impl<'a, T> FlagOption<'a, T> {
    pub(crate) fn new(
        short: Option<String>,
        long: Option<String>,
        help: Option<String>,
        destination: &'a mut T,
    ) -> Self {
        Self {
            short,
            long,
            help,
            destination,
        }
    }
}

impl<'a, T: Destination> Capturable for FlagOption<'a, T> {
    fn matches(&self, flag_part: &str) -> bool {
        // Exact, case-sensitive comparison; no prefix or abbreviation matching.
        self.short.as_deref() == Some(flag_part) || self.long.as_deref() == Some(flag_part)
    }

    fn capture(&mut self, value: &str) -> Result<(), CaptureError> {
        let converted = T::convert(value).map_err(|error| match error {
            ConvertError::Invalid => CaptureError::InvalidConversion {
                value: value.to_string(),
                kind: T::KIND,
            },
            ConvertError::OutOfRange => CaptureError::OutOfRange {
                value: value.to_string(),
                kind: T::KIND,
            },
        })?;
        *self.destination = converted;
        Ok(())
    }

    fn entry(&self) -> OptionEntry {
        OptionEntry {
            short: self.short.clone(),
            long: self.long.clone(),
            help: self.help.clone(),
        }
    }
}

/// The printer-facing snapshot of a registered flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionEntry {
    pub short: Option<String>,
    pub long: Option<String>,
    pub help: Option<String>,
}

impl OptionEntry {
    /// The spelling column: long first, pipe-joined with the short when both exist.
    pub(crate) fn names(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), Some(short)) => format!("{long}|{short}"),
            (Some(long), None) => long.clone(),
            (None, Some(short)) => short.clone(),
            (None, None) => {
                unreachable!("internal error - a registered flag must carry a spelling")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-n", true)]
    #[case("--num", true)]
    #[case("--nu", false)]
    #[case("--number", false)]
    #[case("--NUM", false)]
    #[case("-N", false)]
    #[case("num", false)]
    fn matches(#[case] flag_part: &str, #[case] expected: bool) {
        let mut value: i32 = 0;
        let option = FlagOption::new(
            Some("-n".to_string()),
            Some("--num".to_string()),
            None,
            &mut value,
        );

        assert_eq!(option.matches(flag_part), expected);
    }

    #[test]
    fn capture() {
        let mut value: i32 = 0;
        let mut option = FlagOption::new(Some("-n".to_string()), None, None, &mut value);

        option.capture("5").unwrap();

        drop(option);
        assert_eq!(value, 5);
    }

    #[test]
    fn capture_invalid() {
        let mut value: i32 = 0;
        let mut option = FlagOption::new(Some("-n".to_string()), None, None, &mut value);

        let error = option.capture("five").unwrap_err();

        assert_eq!(
            error,
            CaptureError::InvalidConversion {
                value: "five".to_string(),
                kind: ScalarKind::I32,
            }
        );
        drop(option);
        assert_eq!(value, 0);
    }

    #[test]
    fn capture_out_of_range() {
        let mut value: u8 = 0;
        let mut option = FlagOption::new(None, Some("--level".to_string()), None, &mut value);

        let error = option.capture("300").unwrap_err();

        assert_eq!(
            error,
            CaptureError::OutOfRange {
                value: "300".to_string(),
                kind: ScalarKind::U8,
            }
        );
    }

    #[rstest]
    #[case(Some("--num"), Some("-n"), "--num|-n")]
    #[case(Some("--num"), None, "--num")]
    #[case(None, Some("-n"), "-n")]
    fn entry_names(
        #[case] long: Option<&str>,
        #[case] short: Option<&str>,
        #[case] expected: &str,
    ) {
        let entry = OptionEntry {
            short: short.map(str::to_string),
            long: long.map(str::to_string),
            help: None,
        };

        assert_eq!(entry.names(), expected);
    }
}
