//! Conversion to conjunctive normal form.
//!
//! # Overview
//!
//! [to_cnf] rewrites an arbitrary expression into an equivalent conjunction of disjunctions of literals, in two passes:
//!
//! 1. Negation normal form: biconditionals and implications are eliminated (`a <=> b` as `(a => b) & (b => a)`, `a => b` as `~a | b`) while negation is pushed inward through De Morgan's laws and double negations are dropped, in a single traversal threading the requested polarity.
//! 2. Distribution of ∨ over ∧, pairwise with eager flattening, until no conjunction is nested inside a disjunction.
//!
//! The result is semantically equivalent to the input on every total assignment.
//! Distribution may grow the formula exponentially --- the price of a clausal form, and the reason flattening is eager: nested same-connective nodes are collapsed as they are produced rather than in a separate pass.
//!
//! ```rust
//! # use ermine_kb::builder::parse_sentence;
//! # use ermine_kb::normalize::to_cnf;
//! let sentence = parse_sentence("A <=> B").unwrap();
//! assert_eq!(format!("{}", to_cnf(sentence)), "(~A | B) & (~B | A)");
//! ```

use crate::{misc::log::targets, structures::expression::Expression};

/// The conjunctive normal form of the expression.
pub fn to_cnf(expression: Expression) -> Expression {
    let clausal = distribute(negation_normal_form(expression, false));
    log::trace!(
        target: targets::CNF,
        "{} conjunct(s) from conversion",
        clausal.conjuncts().len()
    );
    clausal
}

/// Rewrites to negation normal form, with `negated` tracking the polarity of the subtree being built.
fn negation_normal_form(expression: Expression, negated: bool) -> Expression {
    match expression {
        Expression::Symbol(_) => match negated {
            true => expression.negate(),
            false => expression,
        },

        Expression::Not(inner) => negation_normal_form(*inner, !negated),

        Expression::And(operands) => {
            let operands = operands
                .into_iter()
                .map(|operand| negation_normal_form(operand, negated))
                .collect();
            // ~(a & b) is ~a | ~b
            match negated {
                true => group_or(Expression::flatten_or(operands)),
                false => group_and(Expression::flatten_and(operands)),
            }
        }

        Expression::Or(operands) => {
            let operands = operands
                .into_iter()
                .map(|operand| negation_normal_form(operand, negated))
                .collect();
            match negated {
                true => group_and(Expression::flatten_and(operands)),
                false => group_or(Expression::flatten_or(operands)),
            }
        }

        // a => b is ~a | b, and its negation a & ~b.
        Expression::Implies(antecedent, consequent) => match negated {
            false => Expression::or(
                negation_normal_form(*antecedent, true),
                negation_normal_form(*consequent, false),
            ),
            true => Expression::and(
                negation_normal_form(*antecedent, false),
                negation_normal_form(*consequent, true),
            ),
        },

        // a <=> b is (~a | b) & (~b | a), and its negation (a | b) & (~a | ~b).
        Expression::Iff(left, right) => match negated {
            false => Expression::and(
                Expression::or(
                    negation_normal_form((*left).clone(), true),
                    negation_normal_form((*right).clone(), false),
                ),
                Expression::or(
                    negation_normal_form(*right, true),
                    negation_normal_form(*left, false),
                ),
            ),
            true => Expression::and(
                Expression::or(
                    negation_normal_form((*left).clone(), false),
                    negation_normal_form((*right).clone(), false),
                ),
                Expression::or(
                    negation_normal_form(*left, true),
                    negation_normal_form(*right, true),
                ),
            ),
        },
    }
}

/// Distributes ∨ over ∧ until no conjunction is nested inside a disjunction.
///
/// Conditionals are rewritten to negation normal form first, so the function is total, though [to_cnf] will already have eliminated them.
fn distribute(expression: Expression) -> Expression {
    match expression {
        Expression::Symbol(_) | Expression::Not(_) => expression,

        Expression::And(operands) => {
            let operands = operands.into_iter().map(distribute).collect();
            group_and(Expression::flatten_and(operands))
        }

        Expression::Or(operands) => {
            // Each operand distributes to a conjunction of clauses.
            // The disjunction of two conjunctions is the conjunction of the pairwise clause disjunctions, folded across operands.
            let mut clauses: Vec<Expression> = Vec::new();
            for (position, operand) in operands.into_iter().enumerate() {
                let conjuncts = into_conjuncts(distribute(operand));
                if position == 0 {
                    clauses = conjuncts;
                    continue;
                }

                let mut crossed = Vec::with_capacity(clauses.len() * conjuncts.len());
                for left in &clauses {
                    for right in &conjuncts {
                        let mut literals = left.disjuncts().to_vec();
                        literals.extend_from_slice(right.disjuncts());
                        crossed.push(group_or(literals));
                    }
                }
                clauses = crossed;
            }
            group_and(clauses)
        }

        Expression::Implies(_, _) | Expression::Iff(_, _) => {
            distribute(negation_normal_form(expression, false))
        }
    }
}

fn into_conjuncts(expression: Expression) -> Vec<Expression> {
    match expression {
        Expression::And(operands) => operands,
        other => vec![other],
    }
}

fn group_and(mut operands: Vec<Expression>) -> Expression {
    match operands.len() {
        1 => operands.swap_remove(0),
        _ => Expression::And(operands),
    }
}

fn group_or(mut operands: Vec<Expression>) -> Expression {
    match operands.len() {
        1 => operands.swap_remove(0),
        _ => Expression::Or(operands),
    }
}
