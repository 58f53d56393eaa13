mod command;
mod config;
mod error;

use cas_error::Error;
use cas_simplify::{nth_derivatives, simplify_with, simplify_with_steps};
use command::{parse_command, Command};
use config::{Config, USAGE};
use log::{info, warn};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};
use std::{fs, io::{self, BufRead, IsTerminal}, process::ExitCode};

/// Prints the report for the given error, which was produced from `input`.
fn report(err: &Error, input: &str) {
    if let Err(io_err) = err.report_to_stderr("input", input) {
        eprintln!("failed to print error: {}", io_err);
    }
}

/// Runs the given command, printing its results to stdout.
fn run(command: Command, config: &Config) {
    match command {
        Command::Simplify(term) if config.steps => {
            let (simplified, steps) = simplify_with_steps(&term, config.options);
            for step in steps {
                println!("  {}", step);
            }
            println!("{}", simplified);
        },
        Command::Simplify(term) => println!("{}", simplify_with(&term, config.options)),
        Command::Derivative { variable, order, term } => {
            let derivatives = nth_derivatives(&term, &variable, order, config.options);
            if let [derivative] = derivatives.as_slice() {
                println!("{}", derivative);
            } else {
                for (n, derivative) in derivatives.iter().enumerate() {
                    println!("{}: {}", n + 1, derivative);
                }
            }
        },
    }
}

/// Parses and runs a single line of input. Returns `false` if the line could not be parsed.
fn execute(line: &str, config: &Config) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    match parse_command(line) {
        Ok(command) => {
            info!("running `{}`", line.trim());
            run(command, config);
            true
        },
        Err(err) => {
            report(&err, line);
            false
        },
    }
}

/// Executes every line of the given reader, returning the number of lines that failed.
fn execute_lines(reader: impl BufRead, config: &Config) -> io::Result<usize> {
    let mut failures = 0;
    for line in reader.lines() {
        if !execute(&line?, config) {
            failures += 1;
        }
    }
    Ok(failures)
}

/// Runs the interactive REPL until the user exits.
fn repl(config: &Config) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, config: &Config) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        execute(&input, config);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, config) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err),
            };
        }
    }
}

/// Initializes the terminal logger at the configured level.
fn init_logger(config: &Config) {
    let logger = CombinedLogger::init(vec![TermLogger::new(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    if let Err(err) = logger {
        eprintln!("failed to initialize logger: {}", err);
    }
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        },
    };
    init_logger(&config);

    let failures = if let Some(filename) = &config.file {
        // run every line of the file
        fs::read_to_string(filename).and_then(|input| execute_lines(input.as_bytes(), &config))
    } else if !io::stdin().is_terminal() {
        // read lines from stdin
        execute_lines(io::stdin().lock(), &config)
    } else {
        // run the repl / interactive mode
        return match repl(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            },
        };
    };

    match failures {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            warn!("{} line(s) could not be parsed", failures);
            ExitCode::FAILURE
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
