//! Command-line parsing.

use crate::config::ConfigError;

/// A parsed `tally` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Evaluate and print the result.
    Eval {
        expression: String,
        integer_division: bool,
    },
    /// Print the JSON response body. `None` models a request without the
    /// parameter.
    Json { expression: Option<String> },
    /// Dump the top-level token queues.
    Lex { expression: String },
    /// Print the documentation for an error code.
    Explain { code: String },
    Help,
    Version,
}

/// Invalid command line or configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("missing argument\nUsage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Whether the usage summary should follow the error.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::UnknownCommand(_))
    }
}

/// Parse `args` (including the program name at index 0).
///
/// No arguments at all means `help`.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some(command) = args.get(1) else {
        return Ok(Command::Help);
    };
    let rest = &args[2..];

    match command.as_str() {
        "eval" => {
            let mut integer_division = false;
            let mut expression = None;
            for arg in rest {
                if arg == "--integer-division" || arg == "-i" {
                    integer_division = true;
                } else if expression.is_none() {
                    expression = Some(arg.clone());
                } else {
                    return Err(CliError::UnknownOption(arg.clone()));
                }
            }
            let expression = expression.ok_or(CliError::MissingArgument {
                usage: "tally eval <expression> [--integer-division]",
            })?;
            Ok(Command::Eval {
                expression,
                integer_division,
            })
        }
        "json" => Ok(Command::Json {
            expression: rest.first().cloned(),
        }),
        "lex" => {
            let expression = rest.first().cloned().ok_or(CliError::MissingArgument {
                usage: "tally lex <expression>",
            })?;
            Ok(Command::Lex { expression })
        }
        "--explain" | "explain" => {
            let code = rest.first().cloned().ok_or(CliError::MissingArgument {
                usage: "tally --explain <ERROR_CODE>",
            })?;
            Ok(Command::Explain { code })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

/// Usage summary for `tally help`.
pub fn usage() -> String {
    let lines = [
        "Tally arithmetic evaluator",
        "",
        "Usage: tally <command> [options]",
        "",
        "Commands:",
        "  eval <expr>          Evaluate an expression and print the result",
        "  json [<expr>]        Print the JSON response body for an expression",
        "  lex <expr>           Show the top-level token queues",
        "  --explain <code>     Explain an error code (e.g., E1002)",
        "  help                 Show this help message",
        "  version              Show version information",
        "",
        "Eval options:",
        "  --integer-division, -i   Use floored division for '/'",
        "",
        "Environment:",
        "  USE_INTEGER_DIVISION     true/false (default: false)",
        "  TALLY_MAX_DEPTH          Maximum parenthesis nesting (default: 256)",
        "  RUST_LOG                 Tracing filter, e.g. tally_eval=debug",
        "  TALLY_LOG_TREE=1         Hierarchical tracing output",
        "",
        "Examples:",
        "  tally eval \"8 + 5 - 2 * 2\"",
        "  tally eval \"7 / 2\" --integer-division",
        "  tally json \"4 / 0\"",
        "  tally --explain E1002",
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests;
