//! # prop-rs: Propositional Logic Expressions in Rust
//!
//! **`prop-rs`** is a small library for parsing, evaluating, simplifying, and
//! tabulating propositional-logic formulas.
//!
//! ## What does it do?
//!
//! Human-entered formulas like `a -> (b | !c)` are parsed into an immutable
//! expression tree. The parser accepts English keywords (`and`, `or`, `not`,
//! `implies`, `equiv`), ASCII symbols (`&`, `|`, `!`, `~`, `->`, `<->`, `=`),
//! and the logical Unicode glyphs (`∧`, `∨`, `¬`, `→`, `≡`, `⊤`, `⊥`), all
//! mixed freely within one expression.
//!
//! ## Key Features
//!
//! - **Forgiving input**: every common spelling of a connective is accepted
//!   and normalized before parsing.
//! - **Immutable AST**: expressions are plain values. Clone, compare, hash,
//!   and share them across threads.
//! - **Evaluation**: substitute truth values for variables and get the
//!   resulting boolean; a missing variable is reported as an error, never
//!   guessed.
//! - **Algebraic rewriting**: single-step associative, commutative, identity,
//!   and distributive transformations that preserve logical equivalence.
//! - **Truth tables**: the full table of a formula, rendered as aligned text.
//!
//! ## Quick Start
//!
//! Add `prop-rs` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! prop-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use prop_rs::ast::Assignment;
//! use prop_rs::parser::parse;
//!
//! // 1. Parse a formula (keywords, ASCII and glyphs all work)
//! let expr = parse("a -> (b | !c)").unwrap();
//! assert_eq!(expr.to_string(), "(a → (b ∨ ¬c))");
//!
//! // 2. Evaluate it under an assignment
//! let assignment = Assignment::from([('a', true), ('b', false), ('c', true)]);
//! assert_eq!(expr.evaluate(&assignment), Ok(false));
//!
//! // 3. Enumerate its variables (always in ascending order)
//! let vars: Vec<char> = expr.variables().into_iter().collect();
//! assert_eq!(vars, vec!['a', 'b', 'c']);
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: input normalization, infix-to-postfix conversion, and
//!   tree building. Start here: [`parse`][crate::parser::parse].
//! - **[`ast`]**: the [`Expr`][crate::ast::Expr] tree, evaluation, canonical
//!   rendering, and variable enumeration.
//! - **[`simplify`]**: the single-step algebraic rewrite rules.
//! - **[`table`]**: [`TruthTable`][crate::table::TruthTable] construction and
//!   text rendering.

pub mod ast;
pub mod parser;
pub mod simplify;
pub mod table;
