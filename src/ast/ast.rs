use std::fmt::Display;

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::lexer::tokens::TokenKind;

/// The four binary operators of the grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn from_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            TokenKind::Times => Some(BinaryOp::Multiply),
            TokenKind::Divide => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree node.
///
/// Parentheses only affect grouping, so there is no node for them. A node
/// has either zero children (a literal) or exactly two (an operator).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expr {
    Number(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: impl Into<String>) -> Expr {
        Expr::Number(value.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Operator symbol or literal text.
    pub fn label(&self) -> &str {
        match self {
            Expr::Number(value) => value.as_str(),
            Expr::Binary { op, .. } => op.symbol(),
        }
    }

    /// Ordered children, left operand first.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) => vec![],
            Expr::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Number(_))
    }

    /// Literal labels read left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = vec![];
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        match self {
            Expr::Number(value) => leaves.push(value),
            Expr::Binary { left, right, .. } => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }

    /// Number of levels, a lone literal being depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

// Hierarchical `{ name, children }` shape used by tree visualisers
impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Expr", 2)?;
        state.serialize_field("name", self.label())?;
        state.serialize_field("children", &self.children())?;
        state.end()
    }
}
