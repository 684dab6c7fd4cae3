//! The definite-clause database.

use crate::{
    misc::log::targets,
    structures::{expression::Expression, symbol::Symbol},
    types::err::TellError,
};

/// A database of propositional definite clauses.
///
/// Every stored clause is a fact (a bare propositional symbol) or a rule (an implication from a conjunction of propositional symbols to a propositional symbol).
/// The invariant is enforced at [tell](Self::tell); violating sentences are rejected with the database unchanged.
///
/// ```rust
/// # use ermine_kb::builder::parse_sentence;
/// # use ermine_kb::db::DefiniteDb;
/// let mut db = DefiniteDb::default();
///
/// assert!(db.tell(parse_sentence("A & B => C").unwrap()).is_ok());
/// assert!(db.tell(parse_sentence("~A => C").unwrap()).is_err());
/// assert_eq!(db.clauses().len(), 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DefiniteDb {
    clauses: Vec<Expression>,
}

impl DefiniteDb {
    /// A database holding an initial definite clause.
    pub fn from_sentence(sentence: Expression) -> Result<Self, TellError> {
        let mut db = Self::default();
        db.tell(sentence)?;
        Ok(db)
    }

    /// Adds a definite clause to the database, unmodified.
    pub fn tell(&mut self, sentence: Expression) -> Result<(), TellError> {
        if !sentence.is_definite_clause() {
            return Err(TellError::NonDefiniteClause);
        }
        log::trace!(target: targets::DB, "Told {sentence}");
        self.clauses.push(sentence);
        Ok(())
    }

    /// Removes every stored clause structurally equal to the sentence.
    ///
    /// A sentence not present is ignored, for consistency with the general database.
    pub fn retract(&mut self, sentence: &Expression) {
        self.clauses.retain(|clause| clause != sentence);
    }

    /// The stored clauses, in insertion order.
    pub fn clauses(&self) -> &[Expression] {
        &self.clauses
    }

    /// The facts of the database: the bare symbols, in insertion order.
    pub fn facts(&self) -> impl Iterator<Item = &Symbol> {
        self.clauses.iter().filter_map(Expression::as_symbol)
    }

    /// The stored rules whose antecedent conjuncts include the given symbol.
    pub fn clauses_with_premise<'db>(
        &'db self,
        premise: &'db Symbol,
    ) -> impl Iterator<Item = &'db Expression> {
        self.clauses.iter().filter(move |clause| match clause {
            Expression::Implies(antecedent, _) => antecedent
                .conjuncts()
                .iter()
                .any(|conjunct| conjunct.as_symbol() == Some(premise)),
            _ => false,
        })
    }

    /// The stored rules whose consequent is the given symbol.
    pub fn clauses_with_conclusion<'db>(
        &'db self,
        conclusion: &'db Symbol,
    ) -> impl Iterator<Item = &'db Expression> {
        self.clauses.iter().filter(move |clause| match clause {
            Expression::Implies(_, consequent) => consequent.as_symbol() == Some(conclusion),
            _ => false,
        })
    }
}
