use flagbind::{Flag, FlagParser, RegisterError};

fn main() {
    let mut attempts: u8 = 3;
    let mut backoff: f64 = 1.5;
    let mut verbose: bool = false;

    let mut parser =
        configure(&mut attempts, &mut backoff, &mut verbose).unwrap_or_else(|error| {
            eprintln!("{error}");
            std::process::exit(1);
        });
    parser.parse_or_exit();
    let command = parser.remaining().to_vec();
    drop(parser);

    if verbose {
        eprintln!("attempts={attempts} backoff={backoff}");
    }

    let mut delay: f64 = 1.0;

    for attempt in 1..=attempts {
        println!("attempt {attempt}: {}", command.join(" "));
        delay *= backoff;

        if verbose {
            eprintln!("next delay: {delay:.2}s");
        }
    }
}

fn configure<'a>(
    attempts: &'a mut u8,
    backoff: &'a mut f64,
    verbose: &'a mut bool,
) -> Result<FlagParser<'a>, RegisterError> {
    FlagParser::new()
        .program("retry")
        .about("Print the retry schedule for a command.")
        .register(
            Flag::new(attempts)
                .short("-a")
                .long("--attempts")
                .help("How many attempts to schedule."),
        )?
        .register(
            Flag::new(backoff)
                .short("-b")
                .long("--backoff")
                .help("Multiplier applied to the delay between attempts."),
        )?
        .register(
            Flag::new(verbose)
                .short("-v")
                .long("--verbose")
                .help("Explain the schedule."),
        )
}
