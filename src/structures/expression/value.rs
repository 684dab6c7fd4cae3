//! The value of an expression on a (partial) valuation.

use crate::structures::{
    expression::Expression,
    valuation::{Truth, Valuation},
};

impl Expression {
    /// The three-valued truth of the expression on the given valuation.
    ///
    /// - A symbol takes its value from the valuation, and is [Unknown](Truth::Unknown) when unassigned.
    /// - Negation maps Unknown to Unknown.
    /// - A conjunction is False as soon as any operand is False, even if others are Unknown; otherwise Unknown if any operand is Unknown.
    /// - A disjunction is the mirror image: True as soon as any operand is True.
    /// - An implication `a => b` takes the value of `~a | b`.
    /// - A biconditional is Unknown unless both sides are decided, and is then boolean equality.
    ///
    /// The connectives are closed, so every expression has a value --- there is no failure case.
    ///
    /// ```rust
    /// # use ermine_kb::structures::expression::Expression;
    /// # use ermine_kb::structures::symbol::Symbol;
    /// # use ermine_kb::structures::valuation::{Truth, Valuation};
    /// let p = Expression::from(Symbol::new("P").unwrap());
    ///
    /// assert_eq!(p.value_on(&Valuation::default()), Truth::Unknown);
    /// ```
    pub fn value_on(&self, valuation: &Valuation) -> Truth {
        match self {
            Self::Symbol(symbol) => match valuation.value_of(symbol) {
                Some(value) => Truth::from(value),
                None => Truth::Unknown,
            },

            Self::Not(inner) => match inner.value_on(valuation) {
                Truth::True => Truth::False,
                Truth::False => Truth::True,
                Truth::Unknown => Truth::Unknown,
            },

            Self::And(operands) => {
                let mut value = Truth::True;
                for operand in operands {
                    match operand.value_on(valuation) {
                        Truth::False => return Truth::False,
                        Truth::Unknown => value = Truth::Unknown,
                        Truth::True => {}
                    }
                }
                value
            }

            Self::Or(operands) => {
                let mut value = Truth::False;
                for operand in operands {
                    match operand.value_on(valuation) {
                        Truth::True => return Truth::True,
                        Truth::Unknown => value = Truth::Unknown,
                        Truth::False => {}
                    }
                }
                value
            }

            // The value of ~a | b, without building the disjunction.
            Self::Implies(antecedent, consequent) => {
                match (antecedent.value_on(valuation), consequent.value_on(valuation)) {
                    (Truth::False, _) | (_, Truth::True) => Truth::True,
                    (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
                    (Truth::True, Truth::False) => Truth::False,
                }
            }

            Self::Iff(left, right) => {
                match (left.value_on(valuation), right.value_on(valuation)) {
                    (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
                    (l, r) => Truth::from(l == r),
                }
            }
        }
    }
}
