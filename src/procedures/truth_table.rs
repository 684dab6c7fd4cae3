//! Entailment by truth-table enumeration.
//!
//! # Overview
//!
//! The database entails the query exactly when the query is true in every model of the database.
//! Enumeration makes that definition the procedure: every total assignment over the propositional symbols of the database and the query is visited by binary recursion, two branches per symbol, and the query is checked wherever the database holds.
//!
//! The cost is 2^n evaluations for n symbols.
//! This is the reference method --- exact, exhaustive, and the ground truth the other procedures are tested against.
//!
//! A count of the models in which the database and the query both held is threaded through the recursion as an explicit accumulator and reported as evidence.

use crate::{
    db::ClauseDb,
    misc::log::targets,
    reports::TruthTableReport,
    structures::{
        expression::Expression,
        symbol::Symbol,
        valuation::{Truth, Valuation},
    },
    types::err::QueryError,
};

impl ClauseDb {
    /// Decides whether the database entails the query, by enumeration.
    ///
    /// The query must be variable-free; enumeration covers propositional symbols only.
    ///
    /// ```rust
    /// # use ermine_kb::builder::parse_sentence;
    /// # use ermine_kb::db::ClauseDb;
    /// let mut db = ClauseDb::default();
    /// db.tell(parse_sentence("P & Q").unwrap());
    ///
    /// let report = db.tt_entails(&parse_sentence("Q").unwrap()).unwrap();
    /// assert!(report.entailed);
    /// assert_eq!(report.kb_models, 1);
    /// ```
    pub fn tt_entails(&self, query: &Expression) -> Result<TruthTableReport, QueryError> {
        let query_symbols = query.symbols();
        if let Some(variable) = query_symbols.iter().find(|symbol| symbol.is_variable()) {
            return Err(QueryError::VariableInQuery(variable.clone()));
        }

        let mut symbols = query_symbols;
        for clause in self.clauses() {
            symbols.extend(clause.symbols());
        }
        let symbols: Vec<Symbol> = symbols
            .into_iter()
            .filter(Symbol::is_propositional)
            .collect();

        log::debug!(
            target: targets::TRUTH_TABLE,
            "Enumerating {} assignment(s) over {} symbol(s)",
            1_usize << symbols.len().min(usize::BITS as usize - 1),
            symbols.len()
        );

        let mut kb_models = 0;
        let entailed = check_all(
            self.clauses(),
            query,
            &symbols,
            &Valuation::default(),
            &mut kb_models,
        );

        Ok(TruthTableReport { entailed, kb_models })
    }
}

/// Checks the query in every completion of the valuation, branching on the first remaining symbol.
fn check_all(
    clauses: &[Expression],
    query: &Expression,
    symbols: &[Symbol],
    valuation: &Valuation,
    kb_models: &mut usize,
) -> bool {
    let Some((symbol, rest)) = symbols.split_first() else {
        let db_holds = clauses
            .iter()
            .all(|clause| clause.value_on(valuation) == Truth::True);

        // Assignments falsifying the database are vacuously fine.
        if !db_holds {
            return true;
        }

        match query.value_on(valuation) {
            Truth::True => {
                *kb_models += 1;
                return true;
            }
            _ => return false,
        }
    };

    check_all(
        clauses,
        query,
        rest,
        &valuation.extend(symbol.clone(), true),
        kb_models,
    ) && check_all(
        clauses,
        query,
        rest,
        &valuation.extend(symbol.clone(), false),
        kb_models,
    )
}
