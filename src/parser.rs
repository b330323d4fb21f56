//! Parsing of human-entered propositional expressions.
//!
//! The pipeline has three stages:
//!
//! 1. **Preprocess**: strip whitespace and rewrite every accepted spelling of
//!    a connective (keyword, ASCII symbol, Unicode glyph) to one canonical
//!    character.
//! 2. **Convert**: run the shunting-yard algorithm over the normalized
//!    characters, producing the expression in postfix (reverse Polish) order.
//! 3. **Build**: fold the postfix sequence into an [`Expr`] tree with an
//!    operand stack.
//!
//! # Operators
//!
//! From tightest to loosest binding:
//!
//! - `¬` (`not`, `!`, `~`, `-`): negation, precedence 4
//! - `∧` (`and`, `&`): conjunction, precedence 3
//! - `∨` (`or`, `|`): disjunction, precedence 3
//! - `→` (`implies`, `->`): implication, precedence 2
//! - `≡` (`equiv`, `=`, `↔`, `<->`): equivalence, precedence 1
//!
//! On equal precedence the stacked operator is popped first, so operators of
//! the same precedence associate to the left and `a | b & c` groups as
//! `(a ∨ b) ∧ c`. Parenthesize to override.
//!
//! The letters `T` and `F` and the glyphs `⊤` and `⊥` are the boolean
//! constants; any other letter is a variable.
//!
//! # Examples
//!
//! ```
//! use prop_rs::parser::parse;
//!
//! let expr = parse("a -> (b | !c)").unwrap();
//! assert_eq!(expr.to_string(), "(a → (b ∨ ¬c))");
//! ```

use log::debug;

use crate::ast::Expr;

/// A syntax failure anywhere in the parse pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(char),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(char),
    #[error("invalid expression")]
    InvalidExpression,
}

/// Spelling rewrites applied by the preprocessor, in order.
///
/// The order matters: `<->` must be rewritten before `->`, and `->` before
/// the bare `-`.
const REWRITES: &[(&str, char)] = &[
    ("equiv", '≡'),
    ("=", '≡'),
    ("↔", '≡'),
    ("<->", '≡'),
    ("implies", '→'),
    ("->", '→'),
    ("or", '∨'),
    ("|", '∨'),
    ("and", '∧'),
    ("&", '∧'),
    ("not", '¬'),
    ("!", '¬'),
    ("~", '¬'),
    ("-", '¬'),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum TokenKind {
    Operand,
    Unary,
    Binary,
    OpenParen,
    CloseParen,
}

fn classify(token: char) -> TokenKind {
    match token {
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '¬' => TokenKind::Unary,
        '∧' | '∨' | '→' | '≡' => TokenKind::Binary,
        _ => TokenKind::Operand,
    }
}

fn precedence(op: char) -> u32 {
    match op {
        '¬' => 4,
        '∧' | '∨' => 3,
        '→' => 2,
        '≡' => 1,
        _ => 0,
    }
}

/// Strips whitespace and rewrites every operator spelling to its canonical
/// character. Unrecognized characters pass through untouched; the tree
/// builder is the stage that rejects them.
fn preprocess(input: &str) -> String {
    let mut s: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    for &(pattern, replacement) in REWRITES {
        s = s.replace(pattern, &replacement.to_string());
    }
    s
}

/// Converts the normalized infix sequence to postfix order.
///
/// An incoming operator pops every stacked operator with precedence greater
/// than or equal to its own. At the end of input the operator stack drains
/// into the output; an unmatched `(` drains with it and is rejected by the
/// tree builder.
fn to_rpn(input: &str) -> Result<Vec<char>, ParseError> {
    let mut output: Vec<char> = Vec::new();
    let mut stack: Vec<char> = Vec::new();

    for token in input.chars() {
        match classify(token) {
            TokenKind::OpenParen => stack.push(token),
            TokenKind::CloseParen => loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnbalancedParens),
                }
            },
            TokenKind::Unary | TokenKind::Binary => {
                while let Some(&top) = stack.last() {
                    if top == '(' || precedence(top) < precedence(token) {
                        break;
                    }
                    stack.pop();
                    output.push(top);
                }
                stack.push(token);
            }
            TokenKind::Operand => output.push(token),
        }
    }

    while let Some(op) = stack.pop() {
        output.push(op);
    }

    Ok(output)
}

/// Folds a postfix sequence into an expression tree.
///
/// Operands push leaves; a binary operator pops the right operand first,
/// then the left. Exactly one tree must remain at the end.
fn build(postfix: &[char]) -> Result<Expr, ParseError> {
    let mut stack: Vec<Expr> = Vec::new();

    for &token in postfix {
        match classify(token) {
            TokenKind::Unary => {
                let operand = stack.pop().ok_or(ParseError::MissingOperand(token))?;
                stack.push(Expr::not(operand));
            }
            TokenKind::Binary => {
                let rhs = stack.pop().ok_or(ParseError::MissingOperand(token))?;
                let lhs = stack.pop().ok_or(ParseError::MissingOperand(token))?;
                let node = match token {
                    '∧' => Expr::and(lhs, rhs),
                    '∨' => Expr::or(lhs, rhs),
                    '→' => Expr::implies(lhs, rhs),
                    '≡' => Expr::equiv(lhs, rhs),
                    _ => unreachable!(),
                };
                stack.push(node);
            }
            TokenKind::OpenParen | TokenKind::CloseParen => {
                return Err(ParseError::UnbalancedParens);
            }
            TokenKind::Operand => match token {
                '⊤' | 'T' => stack.push(Expr::literal(true)),
                '⊥' | 'F' => stack.push(Expr::literal(false)),
                c if c.is_alphabetic() => stack.push(Expr::variable(c)),
                c => return Err(ParseError::UnexpectedToken(c)),
            },
        }
    }

    let expr = stack.pop().ok_or(ParseError::InvalidExpression)?;
    if !stack.is_empty() {
        return Err(ParseError::InvalidExpression);
    }
    Ok(expr)
}

/// Parses an expression string into an [`Expr`] tree.
///
/// # Examples
///
/// ```
/// use prop_rs::parser::parse;
///
/// let expr = parse("not p and q").unwrap();
/// assert_eq!(expr.to_string(), "(¬p ∧ q)");
/// assert!(parse("p and").is_err());
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    debug!("parse(input = {:?})", input);
    let normalized = preprocess(input);
    debug!("normalized = {:?}", normalized);
    let postfix = to_rpn(&normalized)?;
    debug!("postfix = {:?}", postfix);
    let expr = build(&postfix)?;
    debug!("built = {}", expr);
    Ok(expr)
}
