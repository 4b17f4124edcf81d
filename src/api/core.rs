use crate::api::{Destination, Flag, RegisterError};
use crate::matcher::TypedRegistry;
use crate::parser::{
    scan, Action, ArgumentReader, ConsoleInterface, Halt, Printer, UserInterface,
};

/// The flag parser: registration surface and parse driver.
///
/// Flags are registered against caller-owned variables; a successful parse writes the converted
/// values through them. The parser exclusively owns its registrations and its captured argument
/// vector for its whole lifetime.
///
/// ### Example
/// ```
/// use flagbind::{Flag, FlagParser};
///
/// let mut level: u8 = 0;
/// let mut parser = FlagParser::new()
///     .program("tool")
///     .register(Flag::new(&mut level).short("-l").long("--level"))?;
///
/// parser.parse_tokens(&["tool", "-l", "3"])?;
///
/// drop(parser);
/// assert_eq!(level, 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct FlagParser<'a> {
    program: Option<String>,
    discovered: Option<String>,
    about: Option<String>,
    registry: TypedRegistry<'a>,
    reader: Option<ArgumentReader>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for FlagParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagParser")
            .field("program", &self.program)
            .field("discovered", &self.discovered)
            .field("about", &self.about)
            .finish_non_exhaustive()
    }
}

impl<'a> Default for FlagParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FlagParser<'a> {
    /// Create a flag parser.
    ///
    /// Without [`FlagParser::program`], the help header falls back to the program name
    /// discovered from the argument vector.
    pub fn new() -> Self {
        Self {
            program: None,
            discovered: None,
            about: None,
            registry: TypedRegistry::default(),
            reader: None,
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Declare the program name used by the help header.
    /// If repeated, only the final name applies.
    pub fn program(mut self, name: impl Into<String>) -> Self {
        self.program.replace(name.into());
        self
    }

    /// Document the about message rendered under the help header.
    /// If repeated, only the final message applies.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Register a flag.
    ///
    /// Within a kind, the earlier registration wins when spellings collide. A spelling registered
    /// under two different kinds is a caller error that is deliberately not validated: the kind
    /// scanned later silently wins (scan order is `i8` through `u64`, then `f32`, `f64`, `bool`).
    ///
    /// ### Example
    /// ```
    /// use flagbind::{Flag, FlagParser};
    ///
    /// let mut jobs: u16 = 1;
    /// FlagParser::new()
    ///     .register(Flag::new(&mut jobs).short("-j").help("Parallel jobs."))
    ///     .unwrap();
    /// ```
    pub fn register<T: Destination>(mut self, flag: Flag<'a, T>) -> Result<Self, RegisterError> {
        let option = flag.consume()?;
        self.registry.insert(T::KIND, Box::new(option));
        Ok(self)
    }

    /// Run the parser against the process arguments.
    ///
    /// The process argument vector is captured on the first call; a vector previously injected
    /// via [`FlagParser::parse_tokens`] takes its place. See [`FlagParser::parse_tokens`] for
    /// the parse semantics.
    pub fn parse(&mut self) -> Result<(), Halt> {
        if self.reader.is_none() {
            self.reader = Some(ArgumentReader::capture());
        }

        self.run()
    }

    /// Run the parser against an injected vector.
    ///
    /// The vector replaces any previously captured one, cursor at the start. The leading token
    /// is recorded as the discovered program name; the remaining tokens are scanned against the
    /// registered flags. Scanning ends at the vector's end or at the first unmatched token (see
    /// [`FlagParser::remaining`]), fails fast on the first bad flag, and renders help
    /// immediately upon `-h`/`--help`.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), Halt> {
        self.reader = Some(ArgumentReader::new(
            tokens.iter().map(|token| token.to_string()).collect(),
        ));
        self.discovered = None;

        self.run()
    }

    /// Run the parser against the process arguments, exiting on interruption.
    ///
    /// On [`Halt::Help`], exits with code `0`; on [`Halt::Failed`], prints the error and exits
    /// with code `1` (via [`std::process::exit`]).
    pub fn parse_or_exit(&mut self) {
        match self.parse() {
            Ok(()) => {}
            Err(Halt::Help) => {
                std::process::exit(0);
            }
            Err(Halt::Failed(error)) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        }
    }

    /// The tokens left unconsumed once scanning stopped.
    ///
    /// After a completed parse this is the tail beginning with the first unmatched token, empty
    /// when the whole vector was consumed. Before any parse it is empty.
    pub fn remaining(&self) -> &[String] {
        self.reader
            .as_ref()
            .map(ArgumentReader::remaining)
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn with_interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }

    fn run(&mut self) -> Result<(), Halt> {
        let FlagParser {
            program,
            discovered,
            about,
            registry,
            reader,
            user_interface,
        } = self;
        let reader = reader
            .as_mut()
            .expect("internal error - the reader must be captured before scanning");

        // The leading token is the program name, whether or not one was declared.
        if discovered.is_none() {
            if let Some(name) = reader.next() {
                discovered.replace(name.to_string());
            }
        }

        match scan(registry, reader)? {
            Action::Done => Ok(()),
            Action::PrintHelp => {
                let name = program
                    .as_deref()
                    .or(discovered.as_deref())
                    .unwrap_or_default();
                Printer::terminal().print_help(
                    name,
                    about.as_deref(),
                    &registry.entries(),
                    user_interface.as_ref(),
                );
                Err(Halt::Help)
            }
        }
    }
}
