//! Entailment by DPLL search.
//!
//! # Overview
//!
//! The database entails the query exactly when the database conjoined with the negated query is unsatisfiable, and DPLL decides satisfiability of that conjunction directly.
//!
//! The search recurses over a fixed clause set, the undecided symbols, and a partial valuation:
//!
//! 1. A clause false on the valuation refutes the branch.
//! 2. Every clause true on the valuation satisfies it, and the (possibly partial) valuation is the witness.
//! 3. Otherwise an assignment is forced where one is available, in order of preference:
//!    - a *pure symbol* --- one polarity across every not-yet-satisfied clause --- takes the polarity satisfying all its occurrences;
//!    - a *unit clause* --- an unsatisfied clause with one undecided symbol --- forces the value satisfying it;
//!    - failing both, a branch symbol is assigned true, and false if the first subtree refutes.
//!
//! Branch-symbol selection follows the [configuration](crate::config): first in symbol order by default, or drawn from a seeded generator with the configured probability.
//! Either way only the witness varies, never the verdict.
//!
//! When the conjunction is satisfiable the witness valuation is a counterexample to entailment, and is reported for display regardless of the verdict.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use std::collections::BTreeSet;

use crate::{
    config::Config,
    db::ClauseDb,
    misc::log::targets,
    normalize::to_cnf,
    reports::DpllReport,
    structures::{
        expression::Expression,
        symbol::Symbol,
        valuation::{Truth, Valuation},
    },
};

impl ClauseDb {
    /// Decides whether the database entails the query, by refutation.
    ///
    /// ```rust
    /// # use ermine_kb::builder::parse_sentence;
    /// # use ermine_kb::config::Config;
    /// # use ermine_kb::db::ClauseDb;
    /// let mut db = ClauseDb::default();
    /// db.tell(parse_sentence("P & (P => Q)").unwrap());
    ///
    /// let report = db.dpll_entails(&parse_sentence("Q").unwrap(), &Config::default());
    /// assert!(report.entailed);
    /// assert!(report.model.is_none());
    /// ```
    pub fn dpll_entails(&self, query: &Expression, config: &Config) -> DpllReport {
        let mut clauses = self.clauses().to_vec();
        match to_cnf(query.clone().negate()) {
            Expression::And(conjuncts) => clauses.extend(conjuncts),
            clause => clauses.push(clause),
        }

        let mut symbols: BTreeSet<Symbol> = BTreeSet::new();
        for clause in &clauses {
            symbols.extend(clause.symbols());
        }
        let symbols: Vec<Symbol> = symbols
            .into_iter()
            .filter(Symbol::is_propositional)
            .collect();

        log::debug!(
            target: targets::DPLL,
            "Searching {} clause(s) over {} symbol(s)",
            clauses.len(),
            symbols.len()
        );

        let mut search = Search {
            rng: SmallRng::seed_from_u64(config.seed),
            random_decision_bias: config.random_decision_bias.clamp(0.0, 1.0),
        };

        let (satisfiable, model) = search.solve(&clauses, symbols, Valuation::default());

        DpllReport {
            entailed: !satisfiable,
            model,
        }
    }
}

/// The state of one DPLL run: the branch tie-breaking alone.
struct Search {
    rng: SmallRng,
    random_decision_bias: f64,
}

impl Search {
    /// Decides satisfiability of the clause set, extending the valuation over the remaining symbols.
    fn solve(
        &mut self,
        clauses: &[Expression],
        symbols: Vec<Symbol>,
        valuation: Valuation,
    ) -> (bool, Option<Valuation>) {
        let mut value = Truth::True;
        for clause in clauses {
            match clause.value_on(&valuation) {
                Truth::False => return (false, None),
                Truth::Unknown => value = Truth::Unknown,
                Truth::True => {}
            }
        }
        if value == Truth::True {
            return (true, Some(valuation));
        }

        if let Some((symbol, forced)) = find_pure_symbol(clauses, &symbols, &valuation) {
            log::trace!(target: targets::DPLL, "Pure {symbol} as {forced}");
            let rest = without(symbols, &symbol);
            return self.solve(clauses, rest, valuation.extend(symbol, forced));
        }

        if let Some((symbol, forced)) = find_unit_clause(clauses, &symbols, &valuation) {
            log::trace!(target: targets::DPLL, "Unit {symbol} as {forced}");
            let rest = without(symbols, &symbol);
            return self.solve(clauses, rest, valuation.extend(symbol, forced));
        }

        let Some(symbol) = self.branch_symbol(&symbols) else {
            // Undecidable leftovers, possible only for clauses over non-propositional symbols.
            return (false, None);
        };
        log::trace!(target: targets::DPLL, "Branching on {symbol}");

        let rest = without(symbols, &symbol);

        let (satisfiable, model) =
            self.solve(clauses, rest.clone(), valuation.extend(symbol.clone(), true));
        if satisfiable {
            return (satisfiable, model);
        }

        self.solve(clauses, rest, valuation.extend(symbol, false))
    }

    /// A remaining symbol to branch on, first in order or at random per the configured bias.
    fn branch_symbol(&mut self, symbols: &[Symbol]) -> Option<Symbol> {
        if symbols.is_empty() {
            return None;
        }

        let index = match self.random_decision_bias > 0.0
            && self.rng.random_bool(self.random_decision_bias)
        {
            true => self.rng.random_range(0..symbols.len()),
            false => 0,
        };

        Some(symbols[index].clone())
    }
}

/// A symbol appearing with a single polarity across the not-yet-satisfied clauses, with that polarity.
///
/// Positive pures are preferred when both kinds qualify.
fn find_pure_symbol(
    clauses: &[Expression],
    symbols: &[Symbol],
    valuation: &Valuation,
) -> Option<(Symbol, bool)> {
    let mut the_true: BTreeSet<&Symbol> = BTreeSet::new();
    let mut the_false: BTreeSet<&Symbol> = BTreeSet::new();

    for clause in clauses {
        if clause.value_on(valuation) == Truth::True {
            continue;
        }

        for literal in clause.disjuncts() {
            let Some((symbol, polarity)) = literal.as_literal() else {
                continue;
            };
            if !symbols.contains(symbol) {
                continue;
            }
            match polarity {
                true => the_true.insert(symbol),
                false => the_false.insert(symbol),
            };
        }
    }

    if let Some(symbol) = the_true.difference(&the_false).next() {
        return Some(((*symbol).clone(), true));
    }
    if let Some(symbol) = the_false.difference(&the_true).next() {
        return Some(((*symbol).clone(), false));
    }
    None
}

/// The single undecided symbol of a not-yet-satisfied clause, with the value satisfying the clause.
fn find_unit_clause(
    clauses: &[Expression],
    symbols: &[Symbol],
    valuation: &Valuation,
) -> Option<(Symbol, bool)> {
    for clause in clauses {
        if clause.value_on(valuation) == Truth::True {
            continue;
        }

        let mut undecided = clause
            .symbols()
            .into_iter()
            .filter(|symbol| symbols.contains(symbol));

        let Some(symbol) = undecided.next() else {
            continue;
        };
        if undecided.next().is_some() {
            continue;
        }

        // Exactly one undecided symbol: force whichever value satisfies the clause.
        let forced = clause.value_on(&valuation.extend(symbol.clone(), true)) == Truth::True;
        return Some((symbol, forced));
    }
    None
}

fn without(mut symbols: Vec<Symbol>, symbol: &Symbol) -> Vec<Symbol> {
    symbols.retain(|candidate| candidate != symbol);
    symbols
}
