use std::fs;

use clap::Parser;
use maano::{Target, run, translate, transpile};
use tracing::Level;

/// maano is a tiny teaching language that runs your program and shows it
/// translated to another language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells maano to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Language to translate the program to: js, cpp, c, java or python.
    #[arg(short, long, default_value_t = Target::Js)]
    target: Target,

    /// Only print the translated program, do not run it.
    #[arg(short, long, conflicts_with = "run_only")]
    no_run: bool,

    /// Only run the program, do not print the translation.
    #[arg(short, long)]
    run_only: bool,

    /// Log more details to stderr. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_target(false)
                             .with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let result = if args.no_run {
        transpile(&script, args.target)
    } else if args.run_only {
        run(&script)
    } else {
        translate(&script, args.target).map(|t| format!("{}\n\n{}", t.code, t.output))
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
