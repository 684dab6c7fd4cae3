use rand::{rngs::SmallRng, Rng, SeedableRng};

use ermine_kb::{
    builder::parse_sentence,
    normalize::to_cnf,
    structures::{
        expression::Expression,
        symbol::Symbol,
        valuation::{Truth, Valuation},
    },
    types::err::BuildError,
};

fn symbols(count: usize) -> Vec<Symbol> {
    ["A", "B", "C", "D", "E", "F"][..count]
        .iter()
        .map(|name| Symbol::new(*name).unwrap())
        .collect()
}

fn random_formula(rng: &mut SmallRng, symbols: &[Symbol], depth: usize) -> Expression {
    if depth == 0 || rng.random_bool(0.3) {
        let symbol = symbols[rng.random_range(0..symbols.len())].clone();
        return Expression::Symbol(symbol);
    }

    match rng.random_range(0..5) {
        0 => random_formula(rng, symbols, depth - 1).negate(),
        1 => Expression::and(
            random_formula(rng, symbols, depth - 1),
            random_formula(rng, symbols, depth - 1),
        ),
        2 => Expression::or(
            random_formula(rng, symbols, depth - 1),
            random_formula(rng, symbols, depth - 1),
        ),
        3 => Expression::implies(
            random_formula(rng, symbols, depth - 1),
            random_formula(rng, symbols, depth - 1),
        ),
        _ => Expression::iff(
            random_formula(rng, symbols, depth - 1),
            random_formula(rng, symbols, depth - 1),
        ),
    }
}

/// Every total assignment over the given symbols.
fn assignments(symbols: &[Symbol]) -> Vec<Valuation> {
    let mut all = Vec::with_capacity(1 << symbols.len());
    for mask in 0..(1_usize << symbols.len()) {
        let mut valuation = Valuation::default();
        for (position, symbol) in symbols.iter().enumerate() {
            valuation = valuation.extend(symbol.clone(), mask & (1 << position) != 0);
        }
        all.push(valuation);
    }
    all
}

fn equivalent(left: &Expression, right: &Expression, symbols: &[Symbol]) -> bool {
    assignments(symbols).iter().all(|valuation| {
        let l = left.value_on(valuation);
        let r = right.value_on(valuation);
        assert_ne!(l, Truth::Unknown);
        assert_ne!(r, Truth::Unknown);
        l == r
    })
}

fn is_clausal(expression: &Expression) -> bool {
    expression.conjuncts().iter().all(|clause| {
        clause
            .disjuncts()
            .iter()
            .all(|literal| literal.as_literal().is_some())
    })
}

mod conversion {
    use super::*;

    #[test]
    fn preserves_truth_on_every_assignment() {
        let symbols = symbols(4);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, &symbols, 3);
            let clausal = to_cnf(formula.clone());

            assert!(
                equivalent(&formula, &clausal, &symbols),
                "conversion changed the truth of {formula}",
            );
        }
    }

    #[test]
    fn produces_clausal_form() {
        let symbols = symbols(4);
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..200 {
            let formula = random_formula(&mut rng, &symbols, 3);
            let clausal = to_cnf(formula);

            assert!(is_clausal(&clausal), "not clausal: {clausal}");
        }
    }

    #[test]
    fn idempotent_up_to_equivalence() {
        let symbols = symbols(4);
        let mut rng = SmallRng::seed_from_u64(13);

        for _ in 0..100 {
            let once = to_cnf(random_formula(&mut rng, &symbols, 3));
            let twice = to_cnf(once.clone());

            assert!(is_clausal(&twice));
            assert!(equivalent(&once, &twice, &symbols));
        }
    }

    #[test]
    fn wider_formulas_over_six_symbols() {
        let symbols = symbols(6);
        let mut rng = SmallRng::seed_from_u64(17);

        for _ in 0..50 {
            let formula = random_formula(&mut rng, &symbols, 4);
            let clausal = to_cnf(formula.clone());

            assert!(is_clausal(&clausal));
            assert!(equivalent(&formula, &clausal, &symbols));
        }
    }
}

mod shapes {
    use super::*;

    #[test]
    fn biconditional_becomes_two_clauses() {
        let clausal = to_cnf(parse_sentence("A <=> B").unwrap());
        assert_eq!(clausal, parse_sentence("(~A | B) & (~B | A)").unwrap());
    }

    #[test]
    fn negation_distributes_over_conjunction() {
        let clausal = to_cnf(parse_sentence("~(A & B)").unwrap());
        assert_eq!(clausal, parse_sentence("~A | ~B").unwrap());
    }

    #[test]
    fn double_negation_drops() {
        let clausal = to_cnf(parse_sentence("~~A").unwrap());
        assert_eq!(clausal, parse_sentence("A").unwrap());
    }

    #[test]
    fn disjunction_distributes_over_conjunction() {
        let clausal = to_cnf(parse_sentence("A | (B & C)").unwrap());
        assert_eq!(clausal, parse_sentence("(A | B) & (A | C)").unwrap());
    }

    #[test]
    fn variadic_constructors_flatten() {
        let operands = vec![
            parse_sentence("A | B").unwrap(),
            parse_sentence("C").unwrap(),
        ];
        assert_eq!(
            Expression::disjoin(operands),
            Ok(parse_sentence("A | B | C").unwrap())
        );

        assert_eq!(
            Expression::conjoin(vec![parse_sentence("A").unwrap()]),
            Ok(parse_sentence("A").unwrap())
        );
        assert_eq!(Expression::conjoin(vec![]), Err(BuildError::EmptyConnective));
    }

    #[test]
    fn nested_connectives_flatten() {
        let clausal = to_cnf(parse_sentence("(A & B) & (C & D)").unwrap());
        assert_eq!(clausal, Expression::And(vec![
            parse_sentence("A").unwrap(),
            parse_sentence("B").unwrap(),
            parse_sentence("C").unwrap(),
            parse_sentence("D").unwrap(),
        ]));
    }
}
