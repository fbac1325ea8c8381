//! butterxml - LaTeX-like markup to XML converter

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use butterxml::FsLoader;

#[derive(Parser)]
#[command(name = "butterxml")]
#[command(version, about = "Convert butterxml markup to XML", long_about = None)]
#[command(after_help = "EXAMPLES:
    butterxml doc.btr               Print XML to standard output
    butterxml doc.btr -o doc.xml    Write XML to doc.xml")]
struct Cli {
    /// Input markup file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write XML to a file instead of standard output
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Ok(input) = fs::read_to_string(&cli.input) else {
        eprintln!("Error: Input file '{}' not found.", cli.input.display());
        return ExitCode::FAILURE;
    };

    // Includes resolve relative to the input document.
    let base = match cli.input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parser = butterxml::Parser::with_loader(Box::new(FsLoader::new(base)));
    let xml = parser.process(&input);

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &xml) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
            println!("XML output written to {}", path.display());
        }
        None => println!("{xml}"),
    }

    ExitCode::SUCCESS
}
