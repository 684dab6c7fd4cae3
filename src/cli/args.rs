use std::{path::PathBuf, str::FromStr};

/// The entailment procedure requested on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    TruthTable,
    Forward,
    Backward,
    Dpll,
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TT" => Ok(Method::TruthTable),
            "FC" => Ok(Method::Forward),
            "BC" => Ok(Method::Backward),
            "DPLL" => Ok(Method::Dpll),
            _ => Err(()),
        }
    }
}

/// Parses the two positional arguments, or exits with usage.
pub fn parse_args(args: &[String]) -> (PathBuf, Method) {
    let [_, path, method] = args else { usage() };

    let Ok(method) = Method::from_str(method) else {
        eprintln!("Unrecognised method: {method}");
        usage()
    };

    (PathBuf::from(path), method)
}

fn usage() -> ! {
    eprintln!("Usage: ermine_cli <file> <TT|FC|BC|DPLL>");
    std::process::exit(1);
}
