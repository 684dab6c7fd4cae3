use ermine_kb::{
    builder::parse_sentence,
    config::Config,
    db::{ClauseDb, DefiniteDb},
    reports::Verdict,
    structures::{symbol::Symbol, valuation::Truth},
    types::err::{QueryError, TellError},
};

fn general(sentences: &[&str]) -> ClauseDb {
    let mut db = ClauseDb::default();
    for sentence in sentences {
        db.tell(parse_sentence(sentence).unwrap());
    }
    db
}

fn definite(sentences: &[&str]) -> DefiniteDb {
    let mut db = DefiniteDb::default();
    for sentence in sentences {
        db.tell(parse_sentence(sentence).unwrap()).unwrap();
    }
    db
}

fn symbol(name: &str) -> Symbol {
    Symbol::new(name).unwrap()
}

mod all_engines {
    use super::*;

    // KB = {P, P => Q}: Q follows, R does not.
    const SENTENCES: [&str; 2] = ["P", "P => Q"];

    #[test]
    fn modus_ponens_entailed() {
        let general = general(&SENTENCES);
        let definite = definite(&SENTENCES);
        let q = parse_sentence("Q").unwrap();

        assert!(general.tt_entails(&q).unwrap().entailed);
        assert!(general.dpll_entails(&q, &Config::default()).entailed);
        assert!(definite.forward_entails(&symbol("Q")).entailed);
        assert!(definite.backward_entails(&symbol("Q")).entailed);

        let verdict = definite.forward_entails(&symbol("Q")).verdict();
        assert_eq!(verdict, Verdict::Entailed);
        assert_eq!(format!("{verdict}"), "YES");
    }

    #[test]
    fn unreachable_not_entailed() {
        let general = general(&SENTENCES);
        let definite = definite(&SENTENCES);
        let r = parse_sentence("R").unwrap();

        assert!(!general.tt_entails(&r).unwrap().entailed);
        assert!(!general.dpll_entails(&r, &Config::default()).entailed);
        assert!(!definite.forward_entails(&symbol("R")).entailed);
        assert!(!definite.backward_entails(&symbol("R")).entailed);
    }
}

mod truth_table {
    use super::*;

    #[test]
    fn model_count() {
        let db = general(&["P", "P => Q"]);
        let report = db.tt_entails(&parse_sentence("Q").unwrap()).unwrap();

        // One model satisfies the database, and the query holds there.
        assert!(report.entailed);
        assert_eq!(report.kb_models, 1);
    }

    #[test]
    fn tautology_from_empty_database() {
        let db = ClauseDb::default();
        let report = db.tt_entails(&parse_sentence("P | ~P").unwrap()).unwrap();

        assert!(report.entailed);
        assert_eq!(report.kb_models, 2);
    }

    #[test]
    fn variable_query_rejected() {
        let db = general(&["P"]);

        assert_eq!(
            db.tt_entails(&parse_sentence("p").unwrap()),
            Err(QueryError::VariableInQuery(symbol("p")))
        );
    }
}

mod dpll {
    use super::*;

    const CLAUSES: [&str; 6] = ["~A | B | C", "A | B | D", "~A | ~C | ~D", "B | C | D", "B | ~C", "~C"];

    #[test]
    fn counterexample_model() {
        let db = general(&CLAUSES);
        let a = parse_sentence("A").unwrap();

        let report = db.dpll_entails(&a, &Config::default());
        assert!(!report.entailed);

        // The witness satisfies every clause and falsifies the query.
        let model = report.model.unwrap();
        assert!(!model.is_empty());
        for clause in db.clauses() {
            assert_eq!(clause.value_on(&model), Truth::True);
        }
        assert_eq!(a.value_on(&model), Truth::False);
    }

    #[test]
    fn entailment_leaves_no_model() {
        let db = general(&["P", "P => Q"]);
        let report = db.dpll_entails(&parse_sentence("Q").unwrap(), &Config::default());

        assert!(report.entailed);
        assert!(report.model.is_none());
    }

    #[test]
    fn random_branching_agrees() {
        let db = general(&CLAUSES);
        let deterministic = Config::default();
        let randomised = Config {
            random_decision_bias: 1.0,
            seed: 97,
        };

        for query in ["A", "B", "C", "D"] {
            let query = parse_sentence(query).unwrap();
            assert_eq!(
                db.dpll_entails(&query, &deterministic).entailed,
                db.dpll_entails(&query, &randomised).entailed,
            );
        }
    }
}

mod databases {
    use super::*;

    #[test]
    fn tell_stores_conjuncts() {
        let db = general(&["A & B"]);
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn retract_removes_normalized_clauses() {
        let mut db = general(&["A & B"]);
        db.retract(parse_sentence("A").unwrap());

        assert_eq!(db.clauses(), &[parse_sentence("B").unwrap()]);
    }

    #[test]
    fn retract_of_absent_clause_is_a_no_op() {
        let mut db = general(&["A"]);
        db.retract(parse_sentence("Z").unwrap());
        assert_eq!(db.len(), 1);

        let mut definite = definite(&["A"]);
        definite.retract(&parse_sentence("Z").unwrap());
        assert_eq!(definite.clauses().len(), 1);
    }

    #[test]
    fn built_from_an_initial_sentence() {
        let db = ClauseDb::from_sentence(parse_sentence("A & (B | C)").unwrap());
        assert_eq!(db.len(), 2);

        let definite = DefiniteDb::from_sentence(parse_sentence("A").unwrap()).unwrap();
        assert_eq!(definite.facts().count(), 1);

        assert!(DefiniteDb::from_sentence(parse_sentence("~A").unwrap()).is_err());
    }

    #[test]
    fn duplicates_are_kept() {
        let db = general(&["A", "A"]);
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn non_definite_sentences_rejected() {
        let mut db = DefiniteDb::default();

        for sentence in ["~A", "A | B", "A => ~B", "(A | B) => C", "a => B"] {
            assert_eq!(
                db.tell(parse_sentence(sentence).unwrap()),
                Err(TellError::NonDefiniteClause),
            );
        }
        assert!(db.clauses().is_empty());
    }

    #[test]
    fn rule_indexing() {
        let db = definite(&["A", "A & B => C", "B => C", "C => D"]);

        let b = symbol("B");
        let c = symbol("C");
        assert_eq!(db.clauses_with_premise(&b).count(), 2);
        assert_eq!(db.clauses_with_conclusion(&c).count(), 2);
        assert_eq!(db.clauses_with_premise(&c).count(), 1);
        assert_eq!(db.facts().count(), 1);
    }
}
