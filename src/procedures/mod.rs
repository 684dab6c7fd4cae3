//! The entailment procedures.
//!
//! Four independent procedures decide whether a database entails a query, each trading generality against cost:
//!
//! | procedure | database | cost | evidence |
//! |---|---|---|---|
//! | [truth_table] | [ClauseDb](crate::db::ClauseDb) | exponential in symbols | model count |
//! | [forward] | [DefiniteDb](crate::db::DefiniteDb) | linear in clauses × antecedent length | inferred symbols |
//! | [backward] | [DefiniteDb](crate::db::DefiniteDb) | goal-directed, memoized | proven goals |
//! | [dpll] | [ClauseDb](crate::db::ClauseDb) | exponential worst case, pruned | counterexample valuation |
//!
//! Truth-table enumeration is the reference method: the other three must agree with it on the verdict wherever both apply.
//! Each invocation owns its working sets (agenda, visited sets, partial valuation) for its duration --- no state crosses a call boundary.

pub mod backward;
pub mod dpll;
pub mod forward;
pub mod truth_table;

use crate::structures::{expression::Expression, symbol::Symbol};

/// The antecedent symbols of a rule, in conjunct order.
///
/// Yields nothing for a fact, and skips any non-symbol conjunct --- the definite database rules out the latter at tell.
pub(crate) fn premise_symbols(rule: &Expression) -> impl Iterator<Item = &Symbol> {
    let antecedent = match rule {
        Expression::Implies(antecedent, _) => antecedent.conjuncts(),
        _ => &[],
    };
    antecedent.iter().filter_map(Expression::as_symbol)
}

/// The consequent symbol of a rule, if any.
pub(crate) fn conclusion_symbol(rule: &Expression) -> Option<&Symbol> {
    match rule {
        Expression::Implies(_, consequent) => consequent.as_symbol(),
        _ => None,
    }
}
