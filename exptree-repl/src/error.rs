use ariadne::{Fmt, Source};
use exptree_attrs::ErrorKind;
use exptree_compute::{numerical::EvalError, symbolic::DiffError};
use exptree_error::EXPR;
use exptree_parser::ParseError;
use std::ops::Range;

/// Joins a list of suggestions into a help message, or returns a fallback if there are none.
fn suggest(suggestions: &[String], fallback: &str) -> String {
    if suggestions.is_empty() {
        fallback.to_string()
    } else {
        format!(
            "did you mean {}?",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// An error in the way a command was written.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
pub enum CommandError {
    /// The first word of the line is not a command.
    #[error(
        message = format!("unknown command `{}`", name),
        labels = ["this command"],
        help = suggest(suggestions, "type `help` to list the available commands"),
    )]
    UnknownCommand {
        /// The word that was typed.
        name: String,

        /// Commands with a similar name, if any.
        suggestions: Vec<String>,
    },

    /// The command was given the wrong number of arguments.
    #[error(
        message = format!("wrong number of arguments. Expected: {}", expected),
        labels = ["this command"],
        help = format!("usage: {}", usage.fg(EXPR)),
    )]
    WrongArgumentCount {
        /// The number of arguments the command expects.
        expected: usize,

        /// How the command should be written.
        usage: &'static str,
    },

    /// A tree name that is not made of letters only.
    #[error(
        message = "tree names must be only letters",
        labels = ["this name"],
        help = format!("pick a name like {}", "a".fg(EXPR)),
    )]
    InvalidTreeName {
        /// The rejected name.
        name: String,
    },

    /// No tree is stored under the given name.
    #[error(
        message = format!("unknown tree name `{}`", name),
        labels = ["this tree"],
        help = suggest(suggestions, "create it first with `new <name> <expression>`"),
    )]
    UnknownTree {
        /// The name that was used.
        name: String,

        /// Stored trees with a similar name, if any.
        suggestions: Vec<String>,
    },

    /// A variable binding of the `eval` command that is not of the form `name=value`.
    #[error(
        message = format!("invalid variable binding `{}`", binding),
        labels = ["this binding"],
        help = format!("bind variables like {}", "x=2".fg(EXPR)),
    )]
    InvalidBinding {
        /// The rejected binding.
        binding: String,
    },
}

/// Utility enum to package errors that can occur while running a command.
///
/// Every error remembers the region of the input line it should point at.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The command itself is malformed.
    Command(CommandError, Range<usize>),

    /// An expression failed to parse. Its spans are relative to the start of the expression, which
    /// is at the given byte offset of the line.
    Parse(ParseError, usize),

    /// A tree could not be differentiated.
    Diff(DiffError, Range<usize>),

    /// A tree or a variable binding could not be evaluated.
    Eval(EvalError, Range<usize>),
}

impl Error {
    /// Converts this error into an [`exptree_error::Error`] with spans into the input line.
    pub fn to_report_error(&self) -> exptree_error::Error {
        match self {
            Self::Command(err, span) => exptree_error::Error::new(vec![span.clone()], err.clone()),
            Self::Parse(err, offset) => exptree_error::Error::from(err.clone()).offset(*offset),
            Self::Diff(err, span) => exptree_error::Error::new(vec![span.clone()], err.clone()),
            Self::Eval(err, span) => exptree_error::Error::new(vec![span.clone()], err.clone()),
        }
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report_error = self.to_report_error();
        let report = report_error.build_report("input");
        if let Err(err) = report.eprint(("input", Source::from(input))) {
            eprintln!("{}", err);
        }
    }
}
