//! The general clause database.

use crate::{misc::log::targets, normalize::to_cnf, structures::expression::Expression};

/// A database of clauses in conjunctive normal form, no indexing.
///
/// Sentences of any shape may be told; each is converted to CNF and its conjuncts appended.
///
/// ```rust
/// # use ermine_kb::builder::parse_sentence;
/// # use ermine_kb::db::ClauseDb;
/// let mut db = ClauseDb::default();
/// db.tell(parse_sentence("(A | B) => C").unwrap());
///
/// assert_eq!(db.clauses().len(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClauseDb {
    clauses: Vec<Expression>,
}

impl ClauseDb {
    /// A database holding the clauses of an initial sentence.
    pub fn from_sentence(sentence: Expression) -> Self {
        let mut db = Self::default();
        db.tell(sentence);
        db
    }

    /// Adds the sentence's clauses to the database.
    pub fn tell(&mut self, sentence: Expression) {
        match to_cnf(sentence) {
            Expression::And(conjuncts) => {
                log::trace!(target: targets::DB, "Told {} clause(s)", conjuncts.len());
                self.clauses.extend(conjuncts);
            }
            clause => {
                log::trace!(target: targets::DB, "Told {clause}");
                self.clauses.push(clause);
            }
        }
    }

    /// Removes every stored clause structurally equal to one of the sentence's clauses.
    ///
    /// Clauses not present are ignored.
    pub fn retract(&mut self, sentence: Expression) {
        let normalized = to_cnf(sentence);
        for conjunct in normalized.conjuncts() {
            self.clauses.retain(|clause| clause != conjunct);
        }
    }

    /// The stored clauses, in insertion order.
    pub fn clauses(&self) -> &[Expression] {
        &self.clauses
    }

    /// A count of the stored clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clause is stored.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
