use flagbind::{Flag, FlagParser, RegisterError};

fn main() {
    let mut threshold: u32 = 10;
    let mut invert: bool = false;

    let mut parser = configure(&mut threshold, &mut invert).unwrap_or_else(|error| {
        eprintln!("{error}");
        std::process::exit(1);
    });
    parser.parse_or_exit();
    let inputs = parser.remaining().to_vec();
    drop(parser);

    for input in inputs {
        match input.parse::<u32>() {
            Ok(value) if (value >= threshold) != invert => println!("{value}"),
            Ok(_) => {}
            Err(_) => eprintln!("skipping '{input}'"),
        }
    }
}

fn configure<'a>(
    threshold: &'a mut u32,
    invert: &'a mut bool,
) -> Result<FlagParser<'a>, RegisterError> {
    FlagParser::new()
        .program("threshold")
        .about("Keep the numeric inputs at or above the threshold.")
        .register(
            Flag::new(threshold)
                .short("-t")
                .long("--threshold")
                .help("Smallest value to keep."),
        )?
        .register(
            Flag::new(invert)
                .short("-i")
                .long("--invert")
                .help("Keep the values below the threshold instead."),
        )
}
