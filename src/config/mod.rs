/*!
Configuration of a solve.

The entailment procedures are deterministic functions of the database and the query, up to tie-breaking when several branch symbols qualify.
The configuration pins that tie-breaking down: with the default values every run is fully deterministic, and with a positive [random_decision_bias](Config::random_decision_bias) the branch symbol is drawn from a generator seeded by [seed](Config::seed), so runs remain reproducible.

Only the boolean entailment verdict is independent of these choices --- the witness model may differ between configurations.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of choosing a random branch symbol during DPLL search, rather than the first in symbol order.
    ///
    /// Clamped to [0, 1] at use.
    pub random_decision_bias: f64,

    /// The seed of the generator behind random branch decisions.
    pub seed: u64,
}

impl Default for Config {
    /// The default configuration is tuned for deterministic results.
    fn default() -> Self {
        Config {
            random_decision_bias: 0.0,
            seed: 0,
        }
    }
}
