//! Entailment by backward chaining over definite clauses.
//!
//! # Overview
//!
//! Goal-directed inference: an or-search over the rules concluding a goal alternates with an and-search over each rule's antecedent.
//! A goal succeeds immediately when it is a known fact, and fails when it was already exhausted or is an ancestor of itself --- the ancestor check is the cycle guard that keeps circular rule sets terminating.
//!
//! Two memo sets make shared subgoals cheap: a proved goal is recorded as a fact, and a goal whose rules are all exhausted is recorded as permanently failed.
//! The ancestor stack is popped on every exit, so a goal abandoned in one branch is free to be attempted in a sibling branch.
//!
//! The search state is an owned context threaded by reference down the recursion; nothing is shared across sibling branches except through it.
//!
//! Evidence is the accumulated set of proven goals.

use std::collections::BTreeSet;

use crate::{
    db::DefiniteDb,
    misc::log::targets,
    procedures::premise_symbols,
    reports::ChainingReport,
    structures::symbol::Symbol,
};

impl DefiniteDb {
    /// Decides whether the database entails the query symbol, top-down.
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
    /// assert!(db.backward_entails(&Symbol::new("Q").unwrap()).entailed);
    /// assert!(!db.backward_entails(&Symbol::new("R").unwrap()).entailed);
    /// ```
    pub fn backward_entails(&self, query: &Symbol) -> ChainingReport {
        let mut search = Search {
            db: self,
            facts: self.facts().cloned().collect(),
            failed: BTreeSet::new(),
            proven: BTreeSet::from([query.clone()]),
        };

        let entailed = search.or_search(query, &mut Vec::new());

        ChainingReport {
            entailed,
            support: search.proven,
        }
    }
}

/// The state of one backward-chaining run.
struct Search<'db> {
    db: &'db DefiniteDb,

    /// Known facts, grown as goals are proved.
    facts: BTreeSet<Symbol>,

    /// Goals whose every rule was exhausted.
    failed: BTreeSet<Symbol>,

    /// Evidence: the goals proved so far.
    proven: BTreeSet<Symbol>,
}

impl Search<'_> {
    /// Tries each rule concluding the goal, with `ancestors` guarding against cyclic regress.
    fn or_search(&mut self, goal: &Symbol, ancestors: &mut Vec<Symbol>) -> bool {
        if self.facts.contains(goal) {
            return true;
        }
        if self.failed.contains(goal) || ancestors.contains(goal) {
            log::trace!(target: targets::BACKWARD, "Abandoning {goal}");
            return false;
        }

        ancestors.push(goal.clone());

        let db = self.db;
        for rule in db.clauses_with_conclusion(goal) {
            let premise: Vec<&Symbol> = premise_symbols(rule).collect();

            if self.and_search(&premise, ancestors) {
                log::debug!(target: targets::BACKWARD, "Proved {goal} via {rule}");
                self.proven.extend(premise.into_iter().cloned());
                self.facts.insert(goal.clone());
                ancestors.pop();
                return true;
            }
        }

        ancestors.pop();
        self.failed.insert(goal.clone());
        false
    }

    /// Requires every premise symbol to be provable in turn.
    fn and_search(&mut self, premise: &[&Symbol], ancestors: &mut Vec<Symbol>) -> bool {
        premise.iter().all(|subgoal| self.or_search(subgoal, ancestors))
    }
}
