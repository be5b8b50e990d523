//! Tally CLI
//!
//! Evaluates arithmetic expressions from the command line.

use tallyc::cli::usage;
use tallyc::commands::{eval_expression, explain_error, json_response, lex_expression, Outcome};
use tallyc::logging::init_tracing;
use tallyc::{parse_args, CliError, Command, Config};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(outcome) => outcome.emit(),
        Err(err) => {
            eprintln!("error: {err}");
            if err.wants_usage() {
                eprintln!();
                eprint!("{}", usage());
            }
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<Outcome, CliError> {
    let command = parse_args(args)?;
    let outcome = match command {
        Command::Eval {
            expression,
            integer_division,
        } => {
            let mut config = Config::from_env()?;
            config.use_integer_division |= integer_division;
            eval_expression(&expression, &config.evaluator())
        }
        Command::Json { expression } => {
            let config = Config::from_env()?;
            json_response(expression.as_deref(), &config.evaluator())
        }
        Command::Lex { expression } => lex_expression(&expression, &Config::from_env()?),
        Command::Explain { code } => explain_error(&code),
        Command::Help => Outcome::success(usage()),
        Command::Version => Outcome::success(format!(
            "Tally {}\nArithmetic expression evaluator\n",
            env!("CARGO_PKG_VERSION")
        )),
    };
    Ok(outcome)
}
