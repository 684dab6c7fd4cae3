//! A library for deciding whether a propositional knowledge base entails a query.
//!
//! ermine_kb stores logical sentences in a knowledge base and decides entailment of a query by one of four interchangeable procedures: truth-table enumeration, forward chaining, backward chaining, or DPLL search.
//! The procedures differ in generality and cost but never in verdict --- enumeration is the exact reference the others are held to.
//!
//! # Orientation
//!
//! The library is designed around two databases and the procedures over them.
//!
//! - Sentences of any shape go to a [ClauseDb](db::ClauseDb), which stores their [conjunctive normal form](normalize) and answers queries by [enumeration](procedures::truth_table) or [DPLL search](procedures::dpll).
//! - Definite clauses go to a [DefiniteDb](db::DefiniteDb), which stores them verbatim and answers queries by [forward](procedures::forward) or [backward](procedures::backward) chaining.
//!
//! Sentences are [expressions](structures::expression) --- immutable trees over validated [symbols](structures::symbol), built programmatically or read from text by the [builder].
//! Each procedure returns a [report](reports) pairing the verdict with the evidence its search accumulated: a model count, a set of symbols, or a counterexample [valuation](structures::valuation).
//!
//! Useful starting points:
//! - The [procedures] module, for the four decision procedures and their costs.
//! - The [db] module, for what the databases store and how tell and retract behave.
//! - The [structures], for the elements the procedures consume.
//!
//! # Examples
//!
//! + Chaining over definite clauses.
//!
//! ```rust
//! use ermine_kb::builder::parse_sentence;
//! use ermine_kb::db::DefiniteDb;
//! use ermine_kb::structures::symbol::Symbol;
//!
//! let mut db = DefiniteDb::default();
//! for sentence in ["A", "B", "A & B => D", "D => E"] {
//!     db.tell(parse_sentence(sentence).unwrap()).unwrap();
//! }
//!
//! let e = Symbol::new("E").unwrap();
//! let report = db.forward_entails(&e);
//!
//! assert!(report.entailed);
//! assert!(report.support.contains(&e));
//! assert_eq!(report.entailed, db.backward_entails(&e).entailed);
//! ```
//!
//! + A counterexample from DPLL search.
//!
//! ```rust
//! use ermine_kb::builder::parse_sentence;
//! use ermine_kb::config::Config;
//! use ermine_kb::db::ClauseDb;
//!
//! let mut db = ClauseDb::default();
//! db.tell(parse_sentence("P | Q").unwrap());
//!
//! let report = db.dpll_entails(&parse_sentence("P").unwrap(), &Config::default());
//!
//! assert!(!report.entailed);
//! assert!(report.model.is_some());
//! ```
//!
//! # Scope
//!
//! Propositional logic only.
//! Symbols beginning with a lowercase letter are variables of an unsupported first-order fragment; they are rejected where they would be enumerated and otherwise ignored by the procedures.
//!
//! # Logging
//!
//! Calls to the [log] facade are made throughout, scoped by the targets in [misc::log].
//! No log implementation is provided.

pub mod builder;
pub mod config;
pub mod db;
pub mod misc;
pub mod normalize;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
