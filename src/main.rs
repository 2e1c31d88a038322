//! html-page CLI
//!
//! Usage:
//!   html-page [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>      Write the document to a file instead of stdout
//!   -d, --doctype <DOCTYPE>  Override the doctype of the description
//!   --headers                Print response headers before the document
//!   -v, --verbose            Log resolution details to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use html_page::{PageDescription, WriterSink};

#[derive(Parser)]
#[command(name = "html-page")]
#[command(about = "Render (X)HTML pages from TOML page descriptions")]
#[command(version)]
struct Cli {
    /// Page description file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write the document to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Doctype descriptor, e.g. "HTML 4.01 Strict", or "none"
    #[arg(short, long)]
    doctype: Option<String>,

    /// Print HTTP response headers before the document
    #[arg(long)]
    headers: bool,

    /// Log doctype and namespace resolution details
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut description = match PageDescription::from_str(&source) {
        Ok(description) => description,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };
    if let Some(doctype) = cli.doctype {
        description.options.doctype = Some(doctype);
    }
    let mut page = description.into_page();

    let result = match (&cli.output, cli.headers) {
        (Some(path), _) => page.to_file(path),
        (None, true) => page.emit(&mut WriterSink::new(io::stdout().lock())),
        (None, false) => {
            println!("{}", page.render());
            Ok(())
        }
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
