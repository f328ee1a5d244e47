//! Command-line interface for chordsheet
//!
//! Usage:
//!   chordsheet render `<path>` [--from KEY] [--to KEY] [--no-chords] [--width N] [--format NAME] [--config FILE]
//!   chordsheet check `<path>` [--key KEY] - Validate a chord sheet (and its default key)
//!   chordsheet strip `<path>`            - Print the lyrics without chords or directives
//!   chordsheet interval `<from>` `<to>`  - Semitones between two keys
//!   chordsheet list-formats            - List available output formats

use chordsheet::chordsheet::config::{ChordsheetConfig, Loader};
use chordsheet::chordsheet::formats::FormatRegistry;
use chordsheet::chordsheet::music::semitone_interval;
use chordsheet::chordsheet::parser::{parse_document, strip_to_lyrics};
use chordsheet::chordsheet::processor::{process_file, ProcessingOptions};
use chordsheet::chordsheet::song::validate_song;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fmt::Display;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    init_logging();

    let matches = Command::new("chordsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, transpose and render chord-annotated lyric sheets")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a chord sheet")
                .arg(path_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Key the sheet is written in"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Key to transpose into"),
                )
                .arg(
                    Arg::new("no-chords")
                        .long("no-chords")
                        .help("Print lyrics only")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .help("Wrap width in characters (0 disables wrapping)")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)"),
                )
                .arg(
                    Arg::new("accidentals")
                        .long("accidentals")
                        .help("Accidental spelling for transposed chords")
                        .value_parser(["auto", "sharp", "flat"]),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a chord sheet")
                .arg(path_arg())
                .arg(
                    Arg::new("key")
                        .long("key")
                        .short('k')
                        .help("Default key to validate along with the sheet"),
                ),
        )
        .subcommand(
            Command::new("strip")
                .about("Print the lyrics without chords or section directives")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("interval")
                .about("Print the semitones needed to move from one key to another")
                .arg(Arg::new("from").required(true).index(1))
                .arg(Arg::new("to").required(true).index(2)),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let key = check_matches.get_one::<String>("key").map(String::as_str);
            handle_check_command(path, key);
        }
        Some(("strip", strip_matches)) => {
            let path = strip_matches.get_one::<String>("path").unwrap();
            handle_strip_command(path);
        }
        Some(("interval", interval_matches)) => {
            let from = interval_matches.get_one::<String>("from").unwrap();
            let to = interval_matches.get_one::<String>("to").unwrap();
            println!("{}", semitone_interval(Some(from.as_str()), Some(to.as_str())));
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the chord sheet")
        .required(true)
        .index(1)
}

fn fail(context: &str, error: impl Display) -> ! {
    eprintln!("{context}: {error}");
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| fail("Error reading file", e))
}

/// Defaults, then the optional config file, then command-line flags
fn load_config(matches: &ArgMatches) -> Result<ChordsheetConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("no-chords") {
        loader = loader.set_override("render.show_chords", false)?;
    }
    if let Some(width) = matches.get_one::<u32>("width") {
        loader = loader.set_override("render.wrap_width", i64::from(*width))?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(accidentals) = matches.get_one::<String>("accidentals") {
        loader = loader.set_override("transpose.accidentals", accidentals.as_str())?;
    }
    loader.build()
}

fn handle_render_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let config = load_config(matches).unwrap_or_else(|e| fail("Configuration error", e));

    let options = ProcessingOptions::from_config(&config).transpose(
        matches.get_one::<String>("from").map(String::as_str),
        matches.get_one::<String>("to").map(String::as_str),
    );

    let output = process_file(path, &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        if !FormatRegistry::with_defaults().has(&options.format) {
            eprintln!("\nAvailable formats:");
            for name in FormatRegistry::with_defaults().list_formats() {
                eprintln!("  {name}");
            }
        }
        std::process::exit(1);
    });

    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
}

fn handle_check_command(path: &str, key: Option<&str>) {
    let source = read_source(path);
    if let Some(key) = key {
        if let Err(e) = validate_song(&source, key) {
            fail(path, e);
        }
    }
    match parse_document(&source) {
        Ok(doc) => println!(
            "ok: {} sections, {} lines",
            doc.sections.len(),
            doc.iter_lines().count()
        ),
        Err(e) => fail(path, e),
    }
}

fn handle_strip_command(path: &str) {
    print!("{}", strip_to_lyrics(&read_source(path)));
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        println!("  {name}");
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
