//! Command handlers for the `tally` CLI.
//!
//! Handlers build an [`Outcome`] instead of printing, so they can be tested
//! without capturing the process streams. `main` emits it.

mod eval;
mod explain;
mod json;
mod lex;

pub use eval::eval_expression;
pub use explain::explain_error;
pub use json::json_response;
pub use lex::lex_expression;

/// What a command wants written and the exit code it ends with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl Outcome {
    /// Successful outcome printing `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Outcome {
            stdout: stdout.into(),
            ..Outcome::default()
        }
    }

    /// Failed outcome printing `stderr`.
    pub fn failure(stderr: impl Into<String>) -> Self {
        Outcome {
            stderr: stderr.into(),
            exit_code: 1,
            ..Outcome::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Write both streams and exit with the outcome's code.
    pub fn emit(self) -> ! {
        if !self.stdout.is_empty() {
            print!("{}", self.stdout);
        }
        if !self.stderr.is_empty() {
            eprint!("{}", self.stderr);
        }
        std::process::exit(self.exit_code)
    }
}

/// Ensure `text` ends with exactly one newline.
fn line(text: impl Into<String>) -> String {
    let mut text = text.into();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests;
