//! Constructors.
//!
//! All constructors are pure: operands are consumed and a fresh tree is returned.
//! Conjunction and disjunction flatten nested nodes of the same connective, so `(a ∧ b) ∧ c` and `a ∧ (b ∧ c)` both construct `a ∧ b ∧ c`.

use crate::{structures::expression::Expression, types::err::BuildError};

impl Expression {
    /// The negation of the expression.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// The conjunction of two expressions, flattened.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Self::flatten_and(vec![left, right]))
    }

    /// The disjunction of two expressions, flattened.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Self::flatten_or(vec![left, right]))
    }

    /// An implication from `antecedent` to `consequent`.
    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Self::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// A biconditional between `left` and `right`.
    pub fn iff(left: Self, right: Self) -> Self {
        Self::Iff(Box::new(left), Box::new(right))
    }

    /// The conjunction of the given operands, flattened.
    ///
    /// A single operand is returned unwrapped, and an empty operand list is malformed.
    pub fn conjoin(operands: Vec<Self>) -> Result<Self, BuildError> {
        let mut operands = Self::flatten_and(operands);
        match operands.len() {
            0 => Err(BuildError::EmptyConnective),
            1 => Ok(operands.swap_remove(0)),
            _ => Ok(Self::And(operands)),
        }
    }

    /// The disjunction of the given operands, flattened.
    ///
    /// A single operand is returned unwrapped, and an empty operand list is malformed.
    pub fn disjoin(operands: Vec<Self>) -> Result<Self, BuildError> {
        let mut operands = Self::flatten_or(operands);
        match operands.len() {
            0 => Err(BuildError::EmptyConnective),
            1 => Ok(operands.swap_remove(0)),
            _ => Ok(Self::Or(operands)),
        }
    }

    pub(crate) fn flatten_and(operands: Vec<Self>) -> Vec<Self> {
        let mut flat = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Self::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        flat
    }

    pub(crate) fn flatten_or(operands: Vec<Self>) -> Vec<Self> {
        let mut flat = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Self::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        flat
    }
}
