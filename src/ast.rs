use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A truth assignment: maps variable names to boolean values.
pub type Assignment = HashMap<char, bool>;

/// An evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("variable '{0}' is not assigned")]
    UnassignedVariable(char),
}

/// A propositional formula as an immutable expression tree.
///
/// Leaves are boolean constants and single-character variables; inner nodes
/// are the connectives. Nodes are never mutated after construction: every
/// operation that "changes" an expression builds a new tree.
///
/// `PartialEq`, `Eq` and `Hash` are structural. The canonical rendering
/// produced by [`Display`][std::fmt::Display] is injective on tree shape, so
/// two expressions are equal exactly when their canonical strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(bool),
    Variable(char),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Equiv(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn literal(value: bool) -> Self {
        Expr::Literal(value)
    }

    pub fn variable(name: char) -> Self {
        Expr::Variable(name)
    }

    /// Wraps the operand in a negation. No rewriting happens here:
    /// `not(not(x))` really is a double negation.
    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Expr::Equiv(Box::new(lhs), Box::new(rhs))
    }
}

impl Expr {
    /// Evaluates the expression under the given assignment.
    ///
    /// Every variable occurring in the expression must be assigned,
    /// otherwise [`EvalError::UnassignedVariable`] is returned. Both
    /// operands of a binary connective are always evaluated; there is no
    /// short-circuiting, so a missing variable is reported even when the
    /// other operand already decides the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_rs::ast::{Assignment, Expr};
    ///
    /// let expr = Expr::and(Expr::variable('a'), Expr::variable('b'));
    /// let assignment = Assignment::from([('a', true), ('b', false)]);
    /// assert_eq!(expr.evaluate(&assignment), Ok(false));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Expr::Literal(value) => Ok(*value),
            Expr::Variable(name) => assignment
                .get(name)
                .copied()
                .ok_or(EvalError::UnassignedVariable(*name)),
            Expr::Not(operand) => Ok(!operand.evaluate(assignment)?),
            Expr::And(lhs, rhs) => {
                let lhs = lhs.evaluate(assignment)?;
                let rhs = rhs.evaluate(assignment)?;
                Ok(lhs && rhs)
            }
            Expr::Or(lhs, rhs) => {
                let lhs = lhs.evaluate(assignment)?;
                let rhs = rhs.evaluate(assignment)?;
                Ok(lhs || rhs)
            }
            Expr::Implies(lhs, rhs) => {
                let lhs = lhs.evaluate(assignment)?;
                let rhs = rhs.evaluate(assignment)?;
                Ok(!lhs || rhs)
            }
            Expr::Equiv(lhs, rhs) => {
                let lhs = lhs.evaluate(assignment)?;
                let rhs = rhs.evaluate(assignment)?;
                Ok(lhs == rhs)
            }
        }
    }

    /// Returns the variables occurring in the expression, deduplicated and
    /// in ascending order.
    pub fn variables(&self) -> BTreeSet<char> {
        match self {
            Expr::Literal(_) => BTreeSet::new(),
            Expr::Variable(name) => BTreeSet::from([*name]),
            Expr::Not(operand) => operand.variables(),
            Expr::And(lhs, rhs)
            | Expr::Or(lhs, rhs)
            | Expr::Implies(lhs, rhs)
            | Expr::Equiv(lhs, rhs) => {
                let mut vars = lhs.variables();
                vars.extend(rhs.variables());
                vars
            }
        }
    }

    /// Renders the expression without the outermost pair of parentheses.
    ///
    /// The [`Display`][std::fmt::Display] rendering wraps every binary
    /// connective in parentheses, including the topmost one. For
    /// presentation the outer pair is noise, so it is stripped here:
    /// `(a ∧ b)` becomes `a ∧ b`, while `¬a` and plain `a` are returned
    /// unchanged.
    pub fn to_final_string(&self) -> String {
        let s = self.to_string();
        match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => inner.to_string(),
            None => s,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(true) => write!(f, "⊤"),
            Expr::Literal(false) => write!(f, "⊥"),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Not(operand) => write!(f, "¬{}", operand),
            Expr::And(lhs, rhs) => write!(f, "({} ∧ {})", lhs, rhs),
            Expr::Or(lhs, rhs) => write!(f, "({} ∨ {})", lhs, rhs),
            Expr::Implies(lhs, rhs) => write!(f, "({} → {})", lhs, rhs),
            Expr::Equiv(lhs, rhs) => write!(f, "({} ≡ {})", lhs, rhs),
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::And(Box::new(self), Box::new(rhs))
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::Or(Box::new(self), Box::new(rhs))
    }
}
