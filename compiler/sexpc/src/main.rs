//! Sexpc CLI entry point.

use std::process::ExitCode;

use sexpc::samples::{self, DEFAULT_SAMPLE, SAMPLES};
use sexpc::{compile, init_tracing, parse_options};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_options(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if invocation.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    init_tracing(invocation.options.verbose);

    let name = invocation.program.as_deref().unwrap_or(DEFAULT_SAMPLE);
    let Some(sample) = samples::find(name) else {
        eprintln!("error: unknown program `{name}`");
        eprintln!();
        print_programs();
        return ExitCode::FAILURE;
    };

    match compile(&sample.program(), &invocation.options) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: sexpc [OPTIONS] [PROGRAM]");
    println!();
    println!("Options:");
    println!("  --target=c|asm  Output language (default: c)");
    println!("  --indent=N      Spaces per indentation level (default: 4)");
    println!("  -v, --verbose   Log compiled statements to stderr");
    println!("  -h, --help      Show this help");
    println!();
    print_programs();
}

fn print_programs() {
    println!("Programs (default: {DEFAULT_SAMPLE}):");
    for sample in SAMPLES {
        println!("  {:<12} {}", sample.name, sample.description);
    }
}
