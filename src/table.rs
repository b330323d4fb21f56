use std::fmt;

use log::debug;

use crate::ast::{Assignment, Expr};
use crate::parser::{parse, ParseError};

/// The full truth table of an expression.
///
/// Construction parses the expression, collects its variables in ascending
/// order, and evaluates it under all `2^n` assignments. Row `i` assigns bit
/// `b` of `i` to the `b`-th variable (0 = false), so the first variable
/// toggles fastest.
///
/// # Examples
///
/// ```
/// use prop_rs::table::TruthTable;
///
/// let table = TruthTable::new("p & q").unwrap();
/// assert_eq!(table.variables(), &['p', 'q']);
/// assert_eq!(table.rows()[1], vec![true, false, false]);
/// println!("{}", table);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable {
    expr: Expr,
    variables: Vec<char>,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    pub fn new(expression: &str) -> Result<Self, ParseError> {
        debug!("truth_table(expression = {:?})", expression);

        let expr = parse(expression)?;
        let variables: Vec<char> = expr.variables().into_iter().collect();
        let n = variables.len();
        assert!(
            n < usize::BITS as usize,
            "Number of variables should be less than {}",
            usize::BITS
        );

        let mut rows = Vec::with_capacity(1 << n);
        for i in 0..(1usize << n) {
            let mut row: Vec<bool> = (0..n).map(|b| (i >> b) & 1 == 1).collect();
            let assignment: Assignment =
                variables.iter().copied().zip(row.iter().copied()).collect();
            // The assignment covers every variable of the expression.
            let result = expr.evaluate(&assignment).expect("all variables assigned");
            row.push(result);
            rows.push(row);
        }

        Ok(Self {
            expr,
            variables,
            rows,
        })
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The expression's variables, in ascending order (the column order).
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// One row per assignment: the variable values in column order, then
    /// the value of the expression.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = self.variables.iter().map(|v| v.to_string()).collect();
        header.push(self.expr.to_final_string());

        // Each column is as wide as its widest cell, header included.
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, value) in widths.iter_mut().zip(row) {
                *width = (*width).max(value.to_string().len());
            }
        }

        let render = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:>width$}", cell))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(render(&header));
        lines.push(
            widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            lines.push(render(&cells));
        }

        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_enumerate_little_endian() {
        let table = TruthTable::new("p & q").unwrap();
        assert_eq!(table.variables(), &['p', 'q']);
        assert_eq!(
            table.rows(),
            &[
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
                vec![true, true, true],
            ]
        );
    }

    #[test]
    fn test_variables_sorted() {
        let table = TruthTable::new("q | p").unwrap();
        assert_eq!(table.variables(), &['p', 'q']);
    }

    #[test]
    fn test_render() {
        let table = TruthTable::new("p & q").unwrap();
        let expected = [
            "    p |     q | p ∧ q",
            "------+-------+------",
            "false | false | false",
            " true | false | false",
            "false |  true | false",
            " true |  true |  true",
        ]
        .join("\n");
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let table = TruthTable::new("a | b").unwrap();
        assert!(!table.to_string().ends_with('\n'));
    }

    #[test]
    fn test_constant_expression() {
        let table = TruthTable::new("T & F").unwrap();
        assert!(table.variables().is_empty());
        assert_eq!(table.rows(), &[vec![false]]);

        let expected = ["⊤ ∧ ⊥", "-----", "false"].join("\n");
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_tautology_column() {
        let table = TruthTable::new("!a | b = a -> b").unwrap();
        assert_eq!(table.rows().len(), 4);
        assert!(table.rows().iter().all(|row| row[row.len() - 1]));
    }

    #[test]
    fn test_syntax_error_propagates() {
        assert_eq!(
            TruthTable::new("(a & b").unwrap_err(),
            ParseError::UnbalancedParens
        );
        assert_eq!(
            TruthTable::new("").unwrap_err(),
            ParseError::InvalidExpression
        );
    }
}
