//! The commands of the REPL, and the store of named trees they operate on.

use crate::{error::{CommandError, Error}, visualize::visualize};
use exptree_compute::{
    numerical::{evaluate, Ctxt, Eval},
    symbolic::{derivative, simplify_with_steps},
};
use exptree_parser::{parse, parser::token::op::FuncKind, Expr};
use levenshtein::levenshtein;
use std::{collections::HashMap, ops::Range};

/// The available commands, with their help text.
const COMMANDS: [(&str, &str); 8] = [
    ("new", "Create a new tree from an expression. Syntax: new <name> <expression>."),
    ("simplify", "Simplify a tree to a new tree. Syntax: simplify <name> <new name>."),
    ("diff", "Differentiate by a variable from a tree to a new tree. Syntax: diff <variable> <name> <new name>."),
    ("eval", "Evaluate a tree, optionally binding variables. Syntax: eval <name> [<variable>=<value> ...]."),
    ("print", "Print the expression represented by a tree. Syntax: print <name>."),
    ("visualize", "Visualize a tree. Syntax: visualize <name>."),
    ("stop", "Exit the program."),
    ("help", "Show the available commands, or the help of one command. Syntax: help [<command>]."),
];

/// A whitespace-separated word of an input line.
#[derive(Debug, Clone, PartialEq)]
struct Word<'a> {
    /// The text of the word.
    text: &'a str,

    /// Where the word is in the line.
    span: Range<usize>,
}

/// Splits the line into words, remembering where each word is.
fn words(line: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(Word { text: &line[s..i], span: s..i });
                start = None;
            },
            (false, None) => start = Some(i),
            _ => (),
        }
    }

    if let Some(s) = start {
        words.push(Word { text: &line[s..], span: s..line.len() });
    }

    words
}

/// Returns the names in `candidates` that are similar to `name`, in sorted order.
fn similar<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut similar = candidates.into_iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(str::to_string)
        .collect::<Vec<_>>();
    similar.sort_unstable();
    similar
}

/// Returns an error if the command was not given the expected number of arguments.
fn expect_args(words: &[Word], expected: usize, usage: &'static str) -> Result<(), Error> {
    if words.len() - 1 == expected {
        Ok(())
    } else {
        Err(Error::Command(
            CommandError::WrongArgumentCount { expected, usage },
            words[0].span.clone(),
        ))
    }
}

/// Returns the word as the name of a new tree, if it is made of letters only.
fn tree_name(word: &Word) -> Result<String, Error> {
    if word.text.chars().all(char::is_alphabetic) {
        Ok(word.text.to_string())
    } else {
        Err(Error::Command(
            CommandError::InvalidTreeName { name: word.text.to_string() },
            word.span.clone(),
        ))
    }
}

/// The text printed by `help` without arguments.
fn overview() -> String {
    let commands = COMMANDS.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ");
    let functions = FuncKind::ALL.iter().map(FuncKind::name).collect::<Vec<_>>().join(", ");
    format!("Commands: {}.\nAvailable functions: {}", commands, functions)
}

/// What the REPL should do after a command ran successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print the given text.
    Print(String),

    /// Do nothing; the line was empty.
    Nothing,

    /// Exit the program.
    Stop,
}

/// A REPL session, holding the trees created so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The trees, by name.
    trees: HashMap<String, Expr>,

    /// Whether `simplify` lists the rules it applied.
    show_steps: bool,
}

impl Session {
    /// Creates a session with no trees.
    pub fn new(show_steps: bool) -> Self {
        Self { trees: HashMap::new(), show_steps }
    }

    /// Returns the text printed when the session starts.
    pub fn banner() -> String {
        overview()
    }

    /// Returns the tree with the given name, if it exists.
    #[cfg(test)]
    pub fn tree(&self, name: &str) -> Option<&Expr> {
        self.trees.get(name)
    }

    /// Returns the tree named by the word, or an error suggesting similar names.
    fn get_tree(&self, word: &Word) -> Result<&Expr, Error> {
        self.trees.get(word.text).ok_or_else(|| Error::Command(
            CommandError::UnknownTree {
                name: word.text.to_string(),
                suggestions: similar(word.text, self.trees.keys().map(String::as_str)),
            },
            word.span.clone(),
        ))
    }

    /// `new <name> <expression>`
    fn new_tree(&mut self, line: &str, words: &[Word]) -> Result<Response, Error> {
        if words.len() < 3 {
            return Err(Error::Command(
                CommandError::WrongArgumentCount { expected: 2, usage: "new <name> <expression>" },
                words[0].span.clone(),
            ));
        }

        let name = tree_name(&words[1])?;
        let offset = words[2].span.start;
        let expr = parse(&line[offset..]).map_err(|err| Error::Parse(err, offset))?;

        let response = format!("New tree named \"{}\" created with expression: {}", name, expr);
        self.trees.insert(name, expr);
        Ok(Response::Print(response))
    }

    /// `simplify <name> <new name>`
    fn simplify(&mut self, words: &[Word]) -> Result<Response, Error> {
        expect_args(words, 2, "simplify <name> <new name>")?;
        let new_name = tree_name(&words[2])?;
        let expr = self.get_tree(&words[1])?;

        let (simplified, steps) = simplify_with_steps(expr);
        let mut response = format!("Expression simplified from {} to: {}", expr, simplified);
        if self.show_steps {
            for step in steps {
                response.push_str(&format!("\n  - {}", step));
            }
        }

        self.trees.insert(new_name, simplified);
        Ok(Response::Print(response))
    }

    /// `diff <variable> <name> <new name>`
    fn diff(&mut self, words: &[Word]) -> Result<Response, Error> {
        expect_args(words, 3, "diff <variable> <name> <new name>")?;
        let new_name = tree_name(&words[3])?;
        let expr = self.get_tree(&words[2])?;

        let derived = derivative(expr, words[1].text)
            .map_err(|err| Error::Diff(err, words[2].span.clone()))?;
        let response = format!("Expression differentiated from {} to: {}", expr, derived);

        self.trees.insert(new_name, derived);
        Ok(Response::Print(response))
    }

    /// `eval <name> [<variable>=<value> ...]`
    ///
    /// Values are expressions themselves, evaluated in order, so they can use `pi`, `e` and the
    /// variables bound before them.
    fn eval(&self, words: &[Word]) -> Result<Response, Error> {
        if words.len() < 2 {
            return Err(Error::Command(
                CommandError::WrongArgumentCount { expected: 1, usage: "eval <name> [<variable>=<value> ...]" },
                words[0].span.clone(),
            ));
        }

        let expr = self.get_tree(&words[1])?;

        let mut ctxt = Ctxt::default();
        for binding in &words[2..] {
            let invalid = || Error::Command(
                CommandError::InvalidBinding { binding: binding.text.to_string() },
                binding.span.clone(),
            );

            let (name, value) = binding.text.split_once('=').ok_or_else(invalid)?;
            if name.is_empty() || !name.chars().all(char::is_alphabetic) {
                return Err(invalid());
            }

            let offset = binding.span.start + name.len() + 1;
            let value_span = offset..binding.span.end;
            let value = parse(value)
                .map_err(|err| Error::Parse(err, offset))?
                .eval(&ctxt)
                .map_err(|err| Error::Eval(err, value_span))?;
            ctxt.add_var(name, value);
        }

        let result = evaluate(expr, &ctxt)
            .map_err(|err| Error::Eval(err, words[1].span.clone()))?;
        Ok(Response::Print(result.to_string()))
    }

    /// `print <name>`
    fn print(&self, words: &[Word]) -> Result<Response, Error> {
        expect_args(words, 1, "print <name>")?;
        let expr = self.get_tree(&words[1])?;
        Ok(Response::Print(expr.to_string()))
    }

    /// `visualize <name>`
    fn visualize(&self, words: &[Word]) -> Result<Response, Error> {
        expect_args(words, 1, "visualize <name>")?;
        let expr = self.get_tree(&words[1])?;
        Ok(Response::Print(visualize(expr).trim_end().to_string()))
    }

    /// `help [<command>]`
    fn help(&self, words: &[Word]) -> Result<Response, Error> {
        let response = match words.get(1) {
            None => overview(),
            Some(topic) => COMMANDS.iter()
                .find(|(name, _)| *name == topic.text)
                .map_or("No help available for that subject.", |(_, help)| *help)
                .to_string(),
        };
        Ok(Response::Print(response))
    }

    /// Runs one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Response, Error> {
        let words = words(line);
        let Some(command) = words.first() else {
            return Ok(Response::Nothing);
        };

        match command.text {
            "new" => self.new_tree(line, &words),
            "simplify" => self.simplify(&words),
            "diff" => self.diff(&words),
            "eval" => self.eval(&words),
            "print" => self.print(&words),
            "visualize" => self.visualize(&words),
            "stop" => Ok(Response::Stop),
            "help" => self.help(&words),
            name => Err(Error::Command(
                CommandError::UnknownCommand {
                    name: name.to_string(),
                    suggestions: similar(name, COMMANDS.iter().map(|(name, _)| *name)),
                },
                command.span.clone(),
            )),
        }
    }
}
