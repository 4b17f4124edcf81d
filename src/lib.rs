//! `flagbind` is a small command line flag parser for Rust.
//!
//! Many crates parse command lines; `flagbind` exists for tools that want the smallest possible
//! surface: named flags bound directly onto caller-owned variables, and nothing else.
//! Specifically, `flagbind` prioritizes the following design concerns:
//! * *Typed destinations*:
//! The caller never converts a `&str` by hand.
//! A flag is registered against a mutable reference to a scalar variable, and a successful parse
//! writes the converted value through that reference.
//! * *A closed scalar set*:
//! Destinations are restricted to a fixed set of scalar kinds: the signed and unsigned integers of
//! width 8 through 64, `f32`, `f64`, and `bool`.
//! Binding any other type is a compile error, not a runtime surprise.
//! * *Flags only*:
//! There is no sub-command tree, no positional cardinality, no grouped short flags.
//! Scanning simply stops at the first token that matches no flag, and the tail is left for the
//! caller (see [`FlagParser::remaining`]).
//! * *Predictable help*:
//! `-h` and `--help` are reserved, intercept the scan unconditionally, and render a plain usage
//! listing to the error stream.
//!
//! # Usage
//! ```
//! use flagbind::{Flag, FlagParser};
//!
//! let mut threshold: u32 = 10;
//! let mut dry_run: bool = false;
//! let mut parser = FlagParser::new()
//!     .program("prune")
//!     .about("Prune entries below a threshold.")
//!     .register(
//!         Flag::new(&mut threshold)
//!             .short("-t")
//!             .long("--threshold")
//!             .help("Smallest entry to keep."),
//!     )?
//!     .register(Flag::new(&mut dry_run).long("--dry-run"))?;
//!
//! parser.parse_tokens(&["prune", "--threshold=3", "--dry-run", "true", "stale.db"])?;
//! assert_eq!(parser.remaining(), vec!["stale.db"]);
//!
//! drop(parser);
//! assert_eq!(threshold, 3);
//! assert!(dry_run);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Cli semantics
//! `flagbind` scans the token vector according to the following rules:
//! * The first token is always taken as the program name.
//! It is used by the help header when no name was declared via [`FlagParser::program`].
//! * A flag's value is either attached with `=` (`--num=5`, split on the first `=` only) or taken
//! from the next token (`--num 5`).
//! Both spellings of a flag accept both forms.
//! * Exactly one value token is consumed per match.
//! A matched flag with no value left to consume is a parse error.
//! * Spelling matches are exact and case-sensitive; there is no prefix or abbreviation matching.
//! * Scanning ends at the first token that matches no registered flag.
//! That token is not consumed; it and the rest of the vector are available through
//! [`FlagParser::remaining`].
//!
//! # Errors
//! Failures during scanning abort the parse immediately and are reported as [`ParseError`];
//! nothing is skipped and nothing is retried.
//! A help request is surfaced as [`Halt::Help`] so callers can exit cleanly without treating it as
//! a failure.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events from the scan loop.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::ScalarKind;
pub use parser::{Halt, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {{
            let base = &$base;
            let sub = $sub;
            assert!(
                base.contains(sub),
                "'{b}' does not contain '{s}'",
                b = base,
                s = sub,
            );
        }};
    }

    pub(crate) use assert_contains;
}
