/*!
Reports from the entailment procedures.

Each procedure returns a typed report pairing the verdict with the evidence the procedure accumulated:
- [TruthTableReport] carries a model count.
- [ChainingReport] carries a set of symbols.
- [DpllReport] carries a valuation, when the negated query was satisfiable.

Only the verdict is required to agree across procedures --- the evidence reflects the particular search each ran.
*/

use std::collections::BTreeSet;

use crate::structures::{symbol::Symbol, valuation::Valuation};

/// The verdict of an entailment procedure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// Every model of the database is a model of the query.
    Entailed,

    /// Some model of the database falsifies the query.
    NotEntailed,
}

impl From<bool> for Verdict {
    fn from(entailed: bool) -> Self {
        match entailed {
            true => Verdict::Entailed,
            false => Verdict::NotEntailed,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Entailed => write!(f, "YES"),
            Verdict::NotEntailed => write!(f, "NO"),
        }
    }
}

/// The report of a truth-table enumeration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTableReport {
    /// Whether the query held in every model of the database.
    pub entailed: bool,

    /// A count of the models of the database in which the query also held.
    pub kb_models: usize,
}

/// The report of a forward or backward chaining run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainingReport {
    /// Whether the query was derived.
    pub entailed: bool,

    /// The symbols supporting the verdict: for forward chaining, every symbol inferred plus the remaining agenda; for backward chaining, the accumulated proven goals.
    pub support: BTreeSet<Symbol>,
}

/// The report of a DPLL search over the database conjoined with the negated query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DpllReport {
    /// Whether the conjunction was unsatisfiable.
    pub entailed: bool,

    /// A satisfying (possibly partial) valuation of the conjunction, when one exists --- a counterexample to entailment.
    pub model: Option<Valuation>,
}

impl TruthTableReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.entailed)
    }
}

impl ChainingReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.entailed)
    }
}

impl DpllReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.entailed)
    }
}
