//! Draws an expression tree as indented text.
//!
//! ```text
//! *
//! ├── +
//! │   ├── 1
//! │   └── x
//! └── sin
//!     └── x
//! ```

use exptree_parser::Expr;

/// Returns the text drawn for a node, without its children.
fn label(expr: &Expr) -> String {
    match expr {
        Expr::Constant(number) => number.to_string(),
        Expr::Variable(name) => name.clone(),
        Expr::Binary(binary) => binary.op.symbol().to_string(),
        Expr::Unary(unary) => unary.op.symbol().to_string(),
        Expr::Call(call) => call.func.name().to_string(),
    }
}

/// Returns the children of a node, from left to right.
fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Vec::new(),
        Expr::Binary(binary) => vec![&*binary.lhs, &*binary.rhs],
        Expr::Unary(unary) => vec![&*unary.operand],
        Expr::Call(call) => vec![&*call.arg],
    }
}

fn draw_children(out: &mut String, expr: &Expr, prefix: &str) {
    let children = children(expr);
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        out.push_str(&format!("{}{}{}\n", prefix, branch, label(child)));
        draw_children(out, child, &format!("{}{}", prefix, indent));
    }
}

/// Draws the tree, one node per line, with the root on the first line.
pub fn visualize(expr: &Expr) -> String {
    let mut out = label(expr);
    out.push('\n');
    draw_children(&mut out, expr, "");
    out
}

#[cfg(test)]
mod tests {
    use exptree_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn leaf() {
        assert_eq!(visualize(&Expr::float(2.5)), "2.5\n");
    }

    #[test]
    fn nested() {
        let expr = parse("(1 + x) * sin(-x)").unwrap();
        assert_eq!(visualize(&expr), concat!(
            "*\n",
            "├── +\n",
            "│   ├── 1\n",
            "│   └── x\n",
            "└── sin\n",
            "    └── -\n",
            "        └── x\n",
        ));
    }
}
