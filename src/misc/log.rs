/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library, scoped by target to the procedure of interest.
No log implementation is provided --- for details, see [log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs from forward chaining can be filtered with `RUST_LOG=forward …`.
- Logs of CNF conversion alone can be found with `RUST_LOG=cnf=trace …`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [CNF conversion](crate::normalize).
    pub const CNF: &str = "cnf";

    /// Logs related to the [knowledge bases](crate::db).
    pub const DB: &str = "db";

    /// Logs related to [truth-table enumeration](crate::procedures::truth_table).
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [forward chaining](crate::procedures::forward).
    pub const FORWARD: &str = "forward";

    /// Logs related to [backward chaining](crate::procedures::backward).
    pub const BACKWARD: &str = "backward";

    /// Logs related to [DPLL search](crate::procedures::dpll).
    pub const DPLL: &str = "dpll";
}
