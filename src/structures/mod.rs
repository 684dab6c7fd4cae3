//! Key structures: symbols, expressions, and valuations.
//!
//! # Expressions and clauses
//!
//! An [expression](expression) is an immutable tree over symbols and the connectives ¬, ∧, ∨, ⇒, and ⇔.
//!
//! A *clause* is a disjunction of literals, represented as an expression whose connective is ∨ or, degenerately, as a single literal.
//! Clauses have no dedicated structure --- the [general database](crate::db::ClauseDb) stores the conjuncts produced by [CNF conversion](crate::normalize), and these are clauses by construction.
//!
//! A *definite clause* is either a bare propositional symbol (a fact) or a rule whose antecedent is a conjunction of propositional symbols and whose consequent is a single propositional symbol.
//! See [Expression::is_definite_clause](expression::Expression::is_definite_clause).
//!
//! # Valuations
//!
//! A [valuation](valuation) is a partial map from symbols to truth values, extended with value semantics during a search so that sibling branches never observe one another's assignments.

pub mod expression;
pub mod symbol;
pub mod valuation;
