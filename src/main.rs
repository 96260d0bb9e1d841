use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use safecalc::{config::Config, history::History, interpreter::evaluator::core::Evaluator};

/// safecalc is a calculator for plain arithmetic expressions, evaluated
/// under a strict operator whitelist.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Starts an interactive session when omitted.
    expression: Option<String>,

    /// Path to a JSON settings file.
    #[arg(short, long, default_value = "safecalc.json")]
    config: PathBuf,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load_or_default(&args.config);
    let evaluator = Evaluator::with_max_depth(config.max_depth);

    if let Some(expression) = args.expression {
        match evaluator.evaluate(expression.trim()) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    interactive(&evaluator, History::new(config.max_history));
}

/// Runs the line-oriented calculator loop.
///
/// Each line is trimmed and evaluated; successful results are printed and
/// recorded in the bounded history. Failures print a generic `Error`
/// indicator and leave all prior state untouched; the detail is available
/// through the debug log.
fn interactive(evaluator: &Evaluator, mut history: History) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "history" => {
                for entry in history.iter() {
                    println!("{entry}");
                }
                continue;
            },
            _ => {},
        }

        match evaluator.evaluate(input) {
            Ok(value) => {
                println!("{value}");
                history.record(input, &value);
            },
            Err(e) => {
                log::debug!("evaluation failed: {e}");
                println!("Error");
            },
        }
    }
}
