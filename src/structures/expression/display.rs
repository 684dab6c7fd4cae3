//! Infix display of expressions.
//!
//! Operands of a binary or variadic connective are parenthesised unless they are literals, which keeps mixed sentences readable without tracking precedence: `(A & B) => C`, `~P | (P & Q)`.

use crate::structures::expression::Expression;

impl Expression {
    fn fmt_operand(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Symbol(_) | Self::Not(_) => write!(f, "{self}"),
            _ => write!(f, "({self})"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),

            Self::Not(inner) => {
                write!(f, "~")?;
                inner.fmt_operand(f)
            }

            Self::And(operands) => {
                for (position, operand) in operands.iter().enumerate() {
                    if position > 0 {
                        write!(f, " & ")?;
                    }
                    operand.fmt_operand(f)?;
                }
                Ok(())
            }

            Self::Or(operands) => {
                for (position, operand) in operands.iter().enumerate() {
                    if position > 0 {
                        write!(f, " | ")?;
                    }
                    operand.fmt_operand(f)?;
                }
                Ok(())
            }

            Self::Implies(antecedent, consequent) => {
                antecedent.fmt_operand(f)?;
                write!(f, " => ")?;
                consequent.fmt_operand(f)
            }

            Self::Iff(left, right) => {
                left.fmt_operand(f)?;
                write!(f, " <=> ")?;
                right.fmt_operand(f)
            }
        }
    }
}
