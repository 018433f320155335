use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use hackasm::assemble;

fn print_usage() {
    eprintln!("hackasm v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    hackasm <file.asm> [<file.asm> ...] [options]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -v, --verbose    Show detailed output");
    eprintln!("    -h, --help       Show this help message");
    eprintln!();
    eprintln!("Each input file is translated to a .hack file next to it.");
}

fn assemble_file(input_path: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let source = fs::read_to_string(input_path)?;

    if verbose {
        eprintln!("Assembling: {}", input_path.display());
    }

    let mut output = assemble(&source)?;
    let instructions = output.lines().count();
    if !output.is_empty() {
        output.push('\n');
    }

    let output_path = input_path.with_extension("hack");
    fs::write(&output_path, output)?;

    if verbose {
        eprintln!(
            "  {} instructions in {:.2}ms -> {}",
            instructions,
            start.elapsed().as_secs_f64() * 1000.0,
            output_path.display()
        );
    } else {
        println!("{} -> {}", input_path.display(), output_path.display());
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let mut files = Vec::new();
    let mut verbose = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if files.is_empty() {
        eprintln!("Error: No input files specified");
        print_usage();
        process::exit(1);
    }

    let mut errors = 0;

    for file in files {
        if let Err(e) = assemble_file(&file, verbose) {
            eprintln!("Error processing {}: {}", file.display(), e);
            errors += 1;
        }
    }

    if errors > 0 {
        process::exit(1);
    }
}
