//! Rill CLI: run a script file, evaluate a string, or read one line from
//! standard input.

use std::fs;
use std::io::{self, BufRead};
use std::process;

use rillang::{RunOptions, SemanticsPolicy};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI command to execute.
enum Command {
    /// Read one line of source from stdin and run it.
    Stdin,
    /// Run a script file
    Run { file: String },
    /// Evaluate a string
    Eval { code: String },
}

/// CLI options parsed from arguments.
struct Options {
    command: Command,
    strict: bool,
    disassemble: bool,
}

fn print_usage() {
    eprintln!("Rill {} - Rill bytecode interpreter", VERSION);
    eprintln!();
    eprintln!("Usage: rill [options] [script.rl]");
    eprintln!();
    eprintln!("With no script, one line of source is read from standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e <code>       Evaluate code directly");
    eprintln!("  --strict        Treat semantic errors as fatal (abort before codegen)");
    eprintln!("  --disassemble   Print compiled bytecode before executing");
    eprintln!("  --help, -h      Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  rill script.rl                    Run a script file");
    eprintln!("  rill -e 'print(\"Hello\");'         Evaluate a one-liner");
    eprintln!("  echo 'print(42);' | rill          Compile and run from stdin");
}

fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut options = Options {
        command: Command::Stdin,
        strict: false,
        disassemble: false,
    };

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--strict" => {
                options.strict = true;
            }
            "--disassemble" => {
                options.disassemble = true;
            }
            "-e" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("-e requires an argument");
                    print_usage();
                    process::exit(64);
                }
                options.command = Command::Eval {
                    code: args[i].clone(),
                };
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(64);
            }
            _ => {
                if let Command::Run { .. } = options.command {
                    eprintln!("Only one script file can be specified");
                    print_usage();
                    process::exit(64);
                }
                options.command = Command::Run { file: arg.clone() };
            }
        }
        i += 1;
    }

    options
}

fn main() {
    let options = parse_args();

    let run_options = RunOptions {
        semantics: if options.strict {
            SemanticsPolicy::Strict
        } else {
            SemanticsPolicy::Advisory
        },
        disassemble: options.disassemble,
    };

    match &options.command {
        Command::Stdin => run_stdin(&run_options),
        Command::Run { file } => run_file(file, &run_options),
        Command::Eval { code } => run_source(code, &run_options),
    }
}

fn run_stdin(options: &RunOptions) {
    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        eprintln!("Error: failed to read from stdin: {}", e);
        process::exit(70);
    }
    run_source(&line, options);
}

fn run_file(path: &str, options: &RunOptions) {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to read file '{}': {}", path, e);
            process::exit(70);
        }
    };
    run_source(&source, options);
}

fn run_source(source: &str, options: &RunOptions) {
    if let Err(e) = rillang::run_with_options(source, options) {
        eprintln!("Error: {}", e);
        process::exit(70);
    }
}
