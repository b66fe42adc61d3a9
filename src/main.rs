//! Tabula - a fixed-size spreadsheet with formula cells.

mod repl;

use std::env;
use std::path::PathBuf;

use tabula_core::{Document, RenderFormat};

fn print_usage() {
    eprintln!("Usage: tabula [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Spreadsheet file to open (.tbl)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rows <N>                Grid rows (default: 26)");
    eprintln!("  --cols <N>                Grid columns (default: 26)");
    eprintln!("  --format <txt|csv|html>   Output format (default: txt)");
    eprintln!("  -o, --output <FILE>       Render to a file and exit (non-interactive)");
    eprintln!("  -h, --help                Print help");
}

fn parse_dimension(name: &str, value: &str) -> usize {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: {} requires a positive integer, got '{}'", name, value);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut rows = 26usize;
    let mut cols = 26usize;
    let mut format = RenderFormat::Text;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--rows" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --rows requires a value");
                    std::process::exit(1);
                }
                rows = parse_dimension("--rows", &args[i]);
            }
            "--cols" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --cols requires a value");
                    std::process::exit(1);
                }
                cols = parse_dimension("--cols", &args[i]);
            }
            "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --format requires a value");
                    std::process::exit(1);
                }
                format = match RenderFormat::from_name(&args[i]) {
                    Some(f) => f,
                    None => {
                        eprintln!("Error: Unknown format: {}", args[i]);
                        std::process::exit(1);
                    }
                };
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let mut doc = match Document::with_file(file_path, rows, cols, format) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(output_path) = output_file {
        if let Err(e) = doc.write_rendered(&output_path) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("Rendered to {}", output_path.display());
    } else if let Err(e) = repl::run(&mut doc) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
