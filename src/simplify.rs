//! Single-step algebraic rewriting of expression trees.
//!
//! Each function applies one family of laws at the root of the tree, never
//! recursing into operands. All of them are total: when the tree does not
//! have the required shape, it is returned unchanged. Chaining steps and
//! deciding when to stop is the caller's business.
//!
//! Every rewrite preserves logical equivalence: the result evaluates to the
//! same value as the input under every assignment.

use crate::ast::Expr;

/// Applies the associative laws at the root.
///
/// ```text
/// (A ∧ B) ∧ C = A ∧ (B ∧ C)
/// (A ∨ B) ∨ C = A ∨ (B ∨ C)
/// ```
///
/// A left-nested tree is rotated right, otherwise a right-nested tree is
/// rotated left. Trees nested on both sides take the first form.
pub fn associative(expr: Expr) -> Expr {
    match expr {
        Expr::And(lhs, rhs) => match (*lhs, *rhs) {
            (Expr::And(a, b), c) => Expr::and(*a, Expr::and(*b, c)),
            (a, Expr::And(b, c)) => Expr::and(Expr::and(a, *b), *c),
            (a, b) => Expr::and(a, b),
        },
        Expr::Or(lhs, rhs) => match (*lhs, *rhs) {
            (Expr::Or(a, b), c) => Expr::or(*a, Expr::or(*b, c)),
            (a, Expr::Or(b, c)) => Expr::or(Expr::or(a, *b), *c),
            (a, b) => Expr::or(a, b),
        },
        other => other,
    }
}

/// Applies the commutative laws at the root.
///
/// ```text
/// A ∧ B = B ∧ A
/// A ∨ B = B ∨ A
/// ```
pub fn commutative(expr: Expr) -> Expr {
    match expr {
        Expr::And(lhs, rhs) => Expr::And(rhs, lhs),
        Expr::Or(lhs, rhs) => Expr::Or(rhs, lhs),
        other => other,
    }
}

/// Applies the identity laws at the root.
///
/// ```text
/// A ∧ ⊤ = A    A ∧ ⊥ = ⊥
/// A ∨ ⊥ = A    A ∨ ⊤ = ⊤
/// ```
///
/// Only a literal on the right-hand side is recognized; `⊤ ∧ A` is returned
/// unchanged.
pub fn identity(expr: Expr) -> Expr {
    match expr {
        Expr::And(lhs, rhs) => match (*lhs, *rhs) {
            (a, Expr::Literal(true)) => a,
            (_, Expr::Literal(false)) => Expr::literal(false),
            (a, b) => Expr::and(a, b),
        },
        Expr::Or(lhs, rhs) => match (*lhs, *rhs) {
            (_, Expr::Literal(true)) => Expr::literal(true),
            (a, Expr::Literal(false)) => a,
            (a, b) => Expr::or(a, b),
        },
        other => other,
    }
}

/// Applies the distributive laws at the root.
///
/// ```text
/// (A ∨ B) ∧ (A ∨ C) = A ∨ (B ∧ C)
/// (A ∧ B) ∨ (A ∧ C) = A ∧ (B ∨ C)
/// A ∧ (B ∨ C) = (A ∧ B) ∨ (A ∧ C)
/// A ∨ (B ∧ C) = (A ∨ B) ∧ (A ∨ C)
/// ```
///
/// Factoring is tried first and requires the two left sub-operands to be
/// structurally equal. Expansion distributes the whole left operand over
/// the right one; a factorable left operand with a plain right operand is
/// returned unchanged.
pub fn distributive(expr: Expr) -> Expr {
    match expr {
        Expr::And(lhs, rhs) => match (*lhs, *rhs) {
            (Expr::Or(a, b), Expr::Or(c, d)) if a == c => Expr::or(*a, Expr::and(*b, *d)),
            (a, Expr::Or(b, c)) => Expr::or(Expr::and(a.clone(), *b), Expr::and(a, *c)),
            (a, b) => Expr::and(a, b),
        },
        Expr::Or(lhs, rhs) => match (*lhs, *rhs) {
            (Expr::And(a, b), Expr::And(c, d)) if a == c => Expr::and(*a, Expr::or(*b, *d)),
            (a, Expr::And(b, c)) => Expr::and(Expr::or(a.clone(), *b), Expr::or(a, *c)),
            (a, b) => Expr::or(a, b),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ast::Assignment;
    use crate::parser::parse;

    /// Checks that both trees evaluate identically under every assignment
    /// of their combined variables.
    fn assert_equivalent(before: &Expr, after: &Expr) {
        let mut vars = before.variables();
        vars.extend(after.variables());
        let vars: Vec<char> = vars.into_iter().collect();
        for bits in 0usize..(1 << vars.len()) {
            let assignment: Assignment = vars
                .iter()
                .enumerate()
                .map(|(i, &name)| (name, (bits >> i) & 1 == 1))
                .collect();
            assert_eq!(
                before.evaluate(&assignment),
                after.evaluate(&assignment),
                "{} and {} differ under {:?}",
                before,
                after,
                assignment
            );
        }
    }

    fn check(rule: fn(Expr) -> Expr, input: &str, expected: &str) {
        let before = parse(input).unwrap();
        let after = rule(before.clone());
        assert_eq!(after.to_string(), expected);
        assert_equivalent(&before, &after);
    }

    #[test]
    fn test_associative() {
        check(associative, "(a & b) & c", "(a ∧ (b ∧ c))");
        check(associative, "a & (b & c)", "((a ∧ b) ∧ c)");
        check(associative, "(a | b) | c", "(a ∨ (b ∨ c))");
        check(associative, "a | (b | c)", "((a ∨ b) ∨ c)");
        // Nested on both sides: the left-nested form wins.
        check(associative, "(a & b) & (c & d)", "(a ∧ (b ∧ (c ∧ d)))");
    }

    #[test]
    fn test_associative_no_match() {
        let expr = parse("a & b").unwrap();
        assert_eq!(associative(expr.clone()), expr);

        // Implication does not associate.
        let expr = parse("a -> (b -> c)").unwrap();
        assert_eq!(associative(expr.clone()), expr);

        // Mixed connectives below the root do not count.
        let expr = parse("(a | b) & c").unwrap();
        assert_eq!(associative(expr.clone()), expr);
    }

    #[test]
    fn test_commutative() {
        check(commutative, "a & b", "(b ∧ a)");
        check(commutative, "a | b", "(b ∨ a)");
        check(commutative, "(a -> b) & c", "(c ∧ (a → b))");
    }

    #[test]
    fn test_commutative_no_match() {
        let expr = parse("a -> b").unwrap();
        assert_eq!(commutative(expr.clone()), expr);
        let expr = parse("!a").unwrap();
        assert_eq!(commutative(expr.clone()), expr);
    }

    #[test]
    fn test_identity() {
        check(identity, "a & T", "a");
        check(identity, "a & F", "⊥");
        check(identity, "a | F", "a");
        check(identity, "a | T", "⊤");
        check(identity, "(a -> b) & T", "(a → b)");
    }

    #[test]
    fn test_identity_literal_on_left_is_kept() {
        let expr = parse("T & a").unwrap();
        assert_eq!(identity(expr.clone()), expr);
        let expr = parse("F | a").unwrap();
        assert_eq!(identity(expr.clone()), expr);
    }

    #[test]
    fn test_distributive_factoring() {
        check(distributive, "(a | b) & (a | c)", "(a ∨ (b ∧ c))");
        check(distributive, "(a & b) | (a & c)", "(a ∧ (b ∨ c))");
    }

    #[test]
    fn test_distributive_expansion() {
        check(distributive, "a & (b | c)", "((a ∧ b) ∨ (a ∧ c))");
        check(distributive, "a | (b & c)", "((a ∨ b) ∧ (a ∨ c))");

        // Different left sub-operands: factoring does not apply, the whole
        // left tree distributes over the right one.
        check(
            distributive,
            "(a | b) & (d | c)",
            "(((a ∨ b) ∧ d) ∨ ((a ∨ b) ∧ c))",
        );
    }

    #[test]
    fn test_distributive_no_match() {
        let expr = parse("a & b").unwrap();
        assert_eq!(distributive(expr.clone()), expr);

        // The factorable pair must sit to the right.
        let expr = parse("(b | c) & a").unwrap();
        assert_eq!(distributive(expr.clone()), expr);
    }

    #[test]
    fn test_no_match_twice_is_stable() {
        // Once a rule stops matching, reapplying it changes nothing.
        let once = identity(parse("a & T").unwrap());
        assert_eq!(identity(once.clone()), once);
        let once = distributive(parse("a & b").unwrap());
        assert_eq!(distributive(once.clone()), once);
    }
}
