//! Command-line argument handling.

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// What the binary prints on success.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Emit {
    /// The resulting integers, ascending, one per line.
    #[default]
    Result,
    /// One `Kind raw` line per token.
    Tokens,
    /// The compiled expression in canonical form.
    Tree,
}

impl FromStr for Emit {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "result" => Ok(Emit::Result),
            "tokens" => Ok(Emit::Tokens),
            "tree" => Ok(Emit::Tree),
            other => Err(UsageError::UnknownEmit(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunOptions {
    /// Directory source names are resolved against; the working directory
    /// when unset.
    pub base_dir: Option<PathBuf>,
    pub emit: Emit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Help,
    Run { program: String, options: RunOptions },
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum UsageError {
    #[error("missing program argument")]
    MissingProgram,
    #[error("unexpected extra argument '{0}'")]
    ExtraArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unknown --emit value '{0}' (expected result, tokens or tree)")]
    UnknownEmit(String),
}

pub const USAGE: &str = "\
Usage: scalc [options] \"<program>\"

Example: scalc \"[ SUM [ DIF a.txt b.txt ] [ INT b.txt c.txt ] ]\"

Options:
  --base-dir=<dir>              Resolve source names against <dir>
  --emit=result|tokens|tree     What to print (default: result)
  -h, --help                    Show this message

Results are printed to stdout, one integer per line. An error is printed
to stderr as a single SYNTAX/COMPILE/RUNTIME ERROR line and the exit status
is 1. Bad usage exits with status 2.

Set RUST_LOG (e.g. RUST_LOG=debug) to trace compilation and evaluation.";

/// Parse arguments (without the binary name).
pub fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    let mut options = RunOptions::default();
    let mut program = None;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(dir) = arg.strip_prefix("--base-dir=") {
            options.base_dir = Some(PathBuf::from(dir));
        } else if let Some(emit) = arg.strip_prefix("--emit=") {
            options.emit = emit.parse()?;
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if program.is_none() {
            program = Some(arg.clone());
        } else {
            return Err(UsageError::ExtraArgument(arg.clone()));
        }
    }

    let program = program.ok_or(UsageError::MissingProgram)?;
    Ok(Command::Run { program, options })
}
