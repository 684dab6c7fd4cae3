//! Entailment by forward chaining over definite clauses.
//!
//! # Overview
//!
//! Data-driven inference: an agenda is seeded with every fact of the database, and each rule carries a countdown of the distinct antecedent symbols not yet inferred.
//! Popping a symbol marks it inferred and decrements the countdown of every rule whose antecedent contains it; a rule reaching zero fires, pushing its consequent.
//! The run short-circuits as soon as the query is popped or concluded, and terminates with a negative verdict when the agenda drains.
//!
//! The procedure is monotonic --- the inferred set only grows, and each symbol is processed to completion at most once --- so the cost is linear in clauses × average antecedent length.
//!
//! Evidence on success is the set of every symbol inferred plus the remaining agenda.

use std::collections::BTreeSet;

use crate::{
    db::DefiniteDb,
    misc::log::targets,
    procedures::{conclusion_symbol, premise_symbols},
    reports::ChainingReport,
    structures::symbol::Symbol,
};

impl DefiniteDb {
    /// Decides whether the database entails the query symbol, bottom-up.
    ///
    /// ```rust
    /// # use ermine_kb::builder::parse_sentence;
    /// # use ermine_kb::db::DefiniteDb;
    /// # use ermine_kb::structures::symbol::Symbol;
    /// let mut db = DefiniteDb::default();
    /// for sentence in ["P", "P => Q"] {
    ///     db.tell(parse_sentence(sentence).unwrap()).unwrap();
    /// }
    ///
    /// assert!(db.forward_entails(&Symbol::new("Q").unwrap()).entailed);
    /// assert!(!db.forward_entails(&Symbol::new("R").unwrap()).entailed);
    /// ```
    pub fn forward_entails(&self, query: &Symbol) -> ChainingReport {
        // Distinct antecedent symbols remaining per rule, indexed in step with the clause list.
        let mut count: Vec<usize> = self
            .clauses()
            .iter()
            .map(|clause| premise_symbols(clause).collect::<BTreeSet<_>>().len())
            .collect();

        let mut inferred: BTreeSet<Symbol> = BTreeSet::new();
        let mut agenda: Vec<Symbol> = self.facts().cloned().collect();

        while let Some(symbol) = agenda.pop() {
            log::trace!(target: targets::FORWARD, "Processing {symbol}");

            if symbol == *query {
                return ChainingReport {
                    entailed: true,
                    support: support(inferred, agenda, symbol),
                };
            }

            if !inferred.insert(symbol.clone()) {
                continue;
            }

            for (index, rule) in self.clauses().iter().enumerate() {
                if !premise_symbols(rule).any(|premise| *premise == symbol) {
                    continue;
                }

                if count[index] > 0 {
                    count[index] -= 1;
                }
                if count[index] > 0 {
                    continue;
                }

                if let Some(conclusion) = conclusion_symbol(rule) {
                    log::debug!(target: targets::FORWARD, "Fired {rule}");
                    agenda.push(conclusion.clone());

                    if conclusion == query {
                        return ChainingReport {
                            entailed: true,
                            support: support(inferred, agenda, symbol),
                        };
                    }
                }
            }
        }

        ChainingReport {
            entailed: false,
            support: BTreeSet::new(),
        }
    }
}

fn support(inferred: BTreeSet<Symbol>, agenda: Vec<Symbol>, last: Symbol) -> BTreeSet<Symbol> {
    let mut support = inferred;
    support.extend(agenda);
    support.insert(last);
    support
}
