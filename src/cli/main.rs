//! A thin shell over the library: read a TELL/ASK file, run the requested procedure, print `YES`/`NO`.
//!
//! Evidence follows the verdict where the procedure produced any:
//! - `TT`: a count of the models of the knowledge base in which the query held.
//! - `FC`/`BC`: the supporting symbols, lower-cased for display.
//! - `DPLL`: on `NO`, the counterexample valuation.

use std::{collections::BTreeSet, fs::File, io::BufReader, process};

use ermine_kb::{
    builder,
    config::Config,
    db::{ClauseDb, DefiniteDb},
    structures::{expression::Expression, symbol::Symbol, valuation::Valuation},
};

use args::{parse_args, Method};

mod args;

fn main() {
    let arguments: Vec<String> = std::env::args().collect();
    let (path, method) = parse_args(&arguments);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            eprintln!("Failed to open {}", path.display());
            process::exit(1);
        }
    };

    let (sentences, query) = match builder::read_tell_ask(BufReader::new(file)) {
        Ok(blocks) => blocks,
        Err(e) => {
            eprintln!("Failed to read {}: {e:?}", path.display());
            process::exit(1);
        }
    };

    match method {
        Method::TruthTable => {
            let db = general_db(sentences);
            match db.tt_entails(&query) {
                Ok(report) if report.entailed => {
                    println!("{}: {}", report.verdict(), report.kb_models)
                }
                Ok(report) => println!("{}", report.verdict()),
                Err(e) => {
                    eprintln!("Query rejected: {e:?}");
                    process::exit(1);
                }
            }
        }

        Method::Dpll => {
            let db = general_db(sentences);
            let report = db.dpll_entails(&query, &Config::default());
            let verdict = report.verdict();
            match report.model {
                Some(model) if !report.entailed => {
                    println!("{verdict}: {}", display_model(&model))
                }
                _ => println!("{verdict}"),
            }
        }

        Method::Forward | Method::Backward => {
            let db = definite_db(sentences);
            let symbol = query_symbol(&query);

            let report = match method {
                Method::Forward => db.forward_entails(&symbol),
                _ => db.backward_entails(&symbol),
            };

            match report.entailed {
                true => println!("{}: {}", report.verdict(), display_symbols(&report.support)),
                false => println!("{}", report.verdict()),
            }
        }
    }
}

fn general_db(sentences: Vec<Expression>) -> ClauseDb {
    let mut db = ClauseDb::default();
    for sentence in sentences {
        db.tell(sentence);
    }
    db
}

fn definite_db(sentences: Vec<Expression>) -> DefiniteDb {
    let mut db = DefiniteDb::default();
    for sentence in sentences {
        if let Err(e) = db.tell(sentence) {
            eprintln!("Sentence rejected: {e:?}");
            process::exit(1);
        }
    }
    db
}

fn query_symbol(query: &Expression) -> Symbol {
    match query.as_symbol() {
        Some(symbol) => symbol.clone(),
        None => {
            eprintln!("Chaining takes a single symbol as query, not {query}");
            process::exit(1);
        }
    }
}

fn display_symbols(symbols: &BTreeSet<Symbol>) -> String {
    let names: Vec<String> = symbols
        .iter()
        .map(|symbol| symbol.name().to_lowercase())
        .collect();
    format!("{{{}}}", names.join(", "))
}

fn display_model(model: &Valuation) -> String {
    let pairs: Vec<String> = model
        .iter()
        .map(|(symbol, value)| format!("{}: {value}", symbol.name().to_lowercase()))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
