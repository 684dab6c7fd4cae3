//! The knowledge bases, or: clause databases.
//!
//! Two databases are provided:
//! - [ClauseDb] stores arbitrary sentences as the conjuncts of their [conjunctive normal form](crate::normalize), and answers queries by [truth-table enumeration](crate::procedures::truth_table) or [DPLL search](crate::procedures::dpll).
//! - [DefiniteDb] stores definite clauses verbatim, and answers queries by [forward](crate::procedures::forward) or [backward](crate::procedures::backward) chaining.
//!
//! Both preserve insertion order and permit duplicate clauses --- storage is a sequence read as a multiset.
//! Mutation happens only through `tell` and `retract`; each database is the sole owner of its clause list for its lifetime.

mod definite;
mod kb;

pub use definite::DefiniteDb;
pub use kb::ClauseDb;
