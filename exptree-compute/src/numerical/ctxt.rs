use exptree_parser::parser::ast::Number;
use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Number>,
}

/// The default context binds the constants `pi` and `e`.
impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("pi".to_string(), Number::Float(std::f64::consts::PI)),
                ("e".to_string(), Number::Float(std::f64::consts::E)),
            ]),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// Consider using the [`Default`] implementation instead if the expression may refer to `pi`
    /// or `e`.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
        }
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: impl Into<Number>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<Number> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Number> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, in sorted
    /// order.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl<S: Into<String>, N: Into<Number>> FromIterator<(S, N)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_constants() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_var("pi"), Some(Number::Float(std::f64::consts::PI)));
        assert!(ctxt.get_var("e").is_some());
        assert!(Ctxt::new().get_vars().is_empty());
    }

    #[test]
    fn similar_names() {
        let ctxt = [("x1", 1i64), ("x2", 2), ("y", 3)].into_iter().collect::<Ctxt>();
        assert_eq!(ctxt.get_similar_vars("x"), vec!["x1", "x2", "y"]);
        assert_eq!(ctxt.get_similar_vars("x12"), vec!["x1", "x2"]);
        assert!(ctxt.get_similar_vars("abc").is_empty());
    }
}
