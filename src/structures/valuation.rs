//! Partial valuations and three-valued truth.
//!
//! A valuation is a partial map from symbols to booleans.
//! Evaluating an expression on a valuation which under-specifies some subexpression yields [Truth::Unknown], a result distinct from both booleans which is never coerced to a default.
//!
//! Valuations have value semantics during search: [extend](Valuation::extend) returns an independent copy, so each branch of a recursive search operates on its own valuation and sibling branches never observe one another's assignments.
//!
//! ```rust
//! # use ermine_kb::structures::symbol::Symbol;
//! # use ermine_kb::structures::valuation::Valuation;
//! let p = Symbol::new("P").unwrap();
//! let q = Symbol::new("Q").unwrap();
//!
//! let base = Valuation::default();
//! let left = base.extend(p.clone(), true);
//! let right = base.extend(q.clone(), false);
//!
//! assert_eq!(left.value_of(&p), Some(true));
//! assert_eq!(left.value_of(&q), None);
//! assert_eq!(right.value_of(&p), None);
//! ```

use std::collections::BTreeMap;

use crate::structures::symbol::Symbol;

/// A three-valued truth value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Truth {
    True,
    False,

    /// The valuation under-specifies the expression.
    Unknown,
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        match value {
            true => Truth::True,
            false => Truth::False,
        }
    }
}

/// A partial map from symbols to booleans.
///
/// Backed by an ordered map, so iteration and display follow symbol order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Valuation {
    assignment: BTreeMap<Symbol, bool>,
}

impl Valuation {
    /// Some value of a symbol under the valuation, or otherwise nothing.
    pub fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.assignment.get(symbol).copied()
    }

    /// An independent copy of the valuation, extended with the given assignment.
    pub fn extend(&self, symbol: Symbol, value: bool) -> Self {
        let mut extended = self.clone();
        extended.assignment.insert(symbol, value);
        extended
    }

    /// An iterator over the assignments of the valuation, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.assignment.iter().map(|(symbol, value)| (symbol, *value))
    }

    /// A count of the assigned symbols.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Whether no symbol is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (position, (symbol, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}: {value}")?;
        }
        write!(f, "}}")
    }
}
