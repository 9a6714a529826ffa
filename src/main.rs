//! Kite Diagram CLI
//!
//! Usage:
//!   kite-diagram [OPTIONS]
//!
//! Options:
//!   -o, --output <FILE>      Output SVG file [default: diagram.svg]
//!   -f, --font-size <N>      Font size (skips the font size prompt)
//!   -c, --config <FILE>      Diagram config file (TOML format)
//!   -s, --stylesheet <FILE>  Stylesheet file (TOML format)
//!   -q, --quiet              Do not print the intro and prompts
//!   --log-level <LEVEL>      Log level [default: warn]
//!   -h, --help               Print help

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use kite_diagram::{
    read_font_size, read_word_set, write_diagram, DiagramConfig, RenderConfig, Stylesheet,
    WordTable,
};

#[derive(Parser, Debug)]
#[command(name = "kite-diagram")]
#[command(about = "Render word lists as a circular kite diagram in SVG")]
struct Cli {
    /// Output SVG file
    #[arg(short, long, default_value = "diagram.svg")]
    output: PathBuf,

    /// Font size; when given, the font size is not asked for
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: Option<u32>,

    /// Diagram config file for radii and canvas scale (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet file for outline and text styling (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Do not print the intro text and prompts
    #[arg(short, long)]
    quiet: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    log::debug!("parsed arguments: {:?}", cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut diagram = match &cli.config {
        Some(path) => DiagramConfig::from_file(path)
            .map_err(|e| format!("loading config '{}': {}", path.display(), e))?,
        None => DiagramConfig::default(),
    };

    let stylesheet = match &cli.stylesheet {
        Some(path) => Stylesheet::from_file(path)
            .map_err(|e| format!("loading stylesheet '{}': {}", path.display(), e))?,
        None => Stylesheet::default(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if !cli.quiet {
        print_intro();
    }

    diagram.font_size = match cli.font_size {
        Some(size) => size,
        None => {
            prompt(cli, &format!("Font size? [{}] ", diagram.font_size))?;
            read_font_size(&mut input, diagram.font_size)?
        }
    };

    prompt(cli, "> Words for the inside?\n")?;
    let inner = read_word_set(&mut input)?;
    prompt(cli, "> Words for the outside?\n")?;
    let outer = read_word_set(&mut input)?;
    prompt(cli, "> Sub-words for the outside?\n")?;
    let sub = read_word_set(&mut input)?;

    let table = WordTable::align(&inner, &outer, &sub);
    let config = RenderConfig::new()
        .with_diagram(diagram)
        .with_stylesheet(stylesheet);

    write_diagram(&cli.output, &table, &config)?;

    if !cli.quiet {
        println!("Diagram written to file '{}'", cli.output.display());
    }
    Ok(())
}

/// Print a prompt without a trailing newline and flush it
fn prompt(cli: &Cli, text: &str) -> io::Result<()> {
    if cli.quiet {
        return Ok(());
    }
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn print_intro() {
    println!(
        r#"Three prompts for word lists follow.
Enter one word per line. You can also paste a column of words from a text
document or a spreadsheet. Close every list with a single '.' on the line
after the last word.

The number of points in the diagram is the length of the longest list
(at least 6).

The first word is placed at the "3 o'clock" position, the following words
clockwise.

Enter an empty line to leave a position without a word. To skip a list
entirely, type '.' right away.
"#
    );
}
