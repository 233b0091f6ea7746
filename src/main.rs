use std::{env, fs, process, time::Instant};

use atomc::{
    display_error, init_tracing,
    lexer::{lexer::scan_with_options, options::ScanOptions},
    printer::printer::show_tokens,
};
use tracing::debug;

const USAGE: &str = "usage: atomc [--lenient] <filename>";

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let (options, file_path) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Incorrect arguments provided!\n{}", USAGE);
            process::exit(1);
        }
    };

    let file_contents = match fs::read(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = scan_with_options(&file_contents, options);
    debug!(elapsed = ?start.elapsed(), "tokenized");

    match tokens {
        Ok(tokens) => {
            if let Err(error) = show_tokens(&tokens) {
                eprintln!("Failed to write tokens: {}", error);
                process::exit(1);
            }
        }
        Err(error) => {
            display_error(&error, &String::from_utf8_lossy(&file_contents), file_path);
            process::exit(1);
        }
    }
}

/// Accepts exactly one filename, optionally preceded or followed by `--lenient`.
fn parse_args(args: &[String]) -> Option<(ScanOptions, &str)> {
    let mut options = ScanOptions::default();
    let mut file_path = None;

    for arg in args {
        match arg.as_str() {
            "--lenient" => options = ScanOptions::lenient(),
            flag if flag.starts_with("--") => return None,
            path if file_path.is_none() => file_path = Some(path),
            _ => return None,
        }
    }

    file_path.map(|path| (options, path))
}
